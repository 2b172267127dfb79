//! Dividend payments as reported upstream and as normalized calendar events.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use paft::money::Money;
use serde::{Deserialize, Serialize};

/// A single dividend payment as returned by a data provider.
///
/// `ts` is the upstream timestamp; its calendar date is only meaningful once
/// shifted by the exchange offset carried by [`DividendHistory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividendPayment {
    /// Upstream ex-dividend timestamp.
    pub ts: DateTime<Utc>,
    /// Cash amount per share.
    pub amount: Money,
}

/// Full dividend history of one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DividendHistory {
    /// Payments in provider order; not necessarily sorted or unique.
    pub payments: Vec<DividendPayment>,
    /// Exchange offset from UTC in seconds, when the provider reports one.
    pub utc_offset_seconds: Option<i64>,
}

impl DividendHistory {
    /// True when the provider reported no payments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

/// One observed dividend payment attributed to a ticker.
///
/// The ex-dividend date is timezone-free: it is the calendar date on the
/// instrument's exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividendEvent {
    /// Ticker symbol as supplied by the caller.
    pub ticker: String,
    /// Display name; the ticker itself when no name could be resolved.
    pub company_name: String,
    /// Exchange-local ex-dividend date.
    pub ex_dividend_date: NaiveDate,
    /// Cash amount per share, always positive.
    pub amount: Money,
}

impl DividendEvent {
    /// Calendar year of the ex-dividend date.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.ex_dividend_date.year()
    }

    /// Day of month of the ex-dividend date.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.ex_dividend_date.day()
    }
}
