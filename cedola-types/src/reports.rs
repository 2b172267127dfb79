//! Report envelopes produced by the calendar orchestrator.

use chrono::{DateTime, NaiveDate, Utc};
use paft::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TradeWindow;
use crate::error::CedolaError;

/// One enriched row of the current-year dividend calendar.
///
/// Percentages are expressed in percent units (`2.5` means 2.5%). Every
/// derived figure is optional: a missing price or a zero divisor leaves it
/// `None` instead of failing the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRow {
    /// Month number (1..=12), used for ordering.
    pub month: u32,
    /// Localized month label.
    pub month_name: String,
    /// Day of month.
    pub day: u32,
    /// Ticker symbol.
    pub ticker: String,
    /// Display name or the ticker as fallback.
    pub company_name: String,
    /// Exchange-local ex-dividend date.
    pub ex_dividend_date: NaiveDate,
    /// Dividend per share.
    pub dividend: Money,
    /// Mean per-payment dividend over the historical window.
    pub ten_year_mean: Option<Decimal>,
    /// Latest available close price.
    pub current_price: Option<Decimal>,
    /// `dividend / current_price * 100`.
    pub yield_pct: Option<Decimal>,
    /// `(dividend - mean) / mean * 100`.
    pub delta_pct: Option<Decimal>,
    /// Simulated buy date.
    pub buy_date: NaiveDate,
    /// Simulated sell date.
    pub sell_date: NaiveDate,
    /// Simulated trade gain; only present once the sell date has passed.
    pub gain_pct: Option<Decimal>,
}

/// Historical mean dividend of one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerSummary {
    /// Ticker symbol.
    pub ticker: String,
    /// Arithmetic mean of every payment inside the historical window.
    pub ten_year_mean: Decimal,
}

/// A non-fatal failure attributed to one ticker.
///
/// The ticker contributes whatever could still be computed; the error explains
/// what is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerWarning {
    /// Ticker the failure belongs to.
    pub ticker: String,
    /// Underlying error.
    pub error: CedolaError,
}

impl TickerWarning {
    /// Attach `error` to `ticker`.
    pub fn new(ticker: impl Into<String>, error: CedolaError) -> Self {
        Self {
            ticker: ticker.into(),
            error,
        }
    }
}

impl std::fmt::Display for TickerWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.ticker, self.error)
    }
}

/// Result of a calendar run.
///
/// Carries the current-year rows in calendar order, the per-ticker means and
/// the non-fatal issues met while building them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarReport {
    /// Reference year of the calendar.
    pub year: i32,
    /// Instant the report was computed for.
    pub as_of: DateTime<Utc>,
    /// Offsets used for the trade simulation.
    pub trade_window: TradeWindow,
    /// Calendar rows ordered by (month, day).
    pub rows: Vec<CalendarRow>,
    /// Historical means keyed by ticker, in ticker order.
    pub summaries: Vec<TickerSummary>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<TickerWarning>,
}

impl CalendarReport {
    /// True when no current-year dividend was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
