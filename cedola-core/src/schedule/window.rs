use cedola_types::{CedolaError, TradeWindow};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::percent::pct_of;

/// Buy and sell dates of a simulated trade around one ex-dividend date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TradeDates {
    /// `ex_date + buy_offset_days`.
    pub buy: NaiveDate,
    /// `ex_date + sell_offset_days`.
    pub sell: NaiveDate,
}

fn shift(date: NaiveDate, days: i32) -> Result<NaiveDate, CedolaError> {
    date.checked_add_signed(TimeDelta::days(i64::from(days)))
        .ok_or_else(|| CedolaError::InvalidArg(format!("{date} shifted by {days} days")))
}

/// Apply the window offsets to an ex-dividend date.
///
/// # Errors
/// Returns `InvalidArg` if a shifted date leaves chrono's representable range.
pub fn trade_dates(ex_date: NaiveDate, window: &TradeWindow) -> Result<TradeDates, CedolaError> {
    Ok(TradeDates {
        buy: shift(ex_date, window.buy_offset_days)?,
        sell: shift(ex_date, window.sell_offset_days)?,
    })
}

/// True once the UTC calendar date of `now` is after `sell_date`.
///
/// The whole sell day is still open: its close is not final until the day is over.
#[must_use]
pub fn is_settled(sell_date: NaiveDate, now: DateTime<Utc>) -> bool {
    now.date_naive() > sell_date
}

/// Gain of buying at `buy_close` and selling at `sell_close`, in percent of
/// `current_price`.
///
/// Absent when any input is missing or the current price is zero.
#[must_use]
pub fn gain_pct(
    buy_close: Option<Decimal>,
    sell_close: Option<Decimal>,
    current_price: Option<Decimal>,
) -> Option<Decimal> {
    let gain = sell_close?.checked_sub(buy_close?)?;
    pct_of(gain, current_price?)
}
