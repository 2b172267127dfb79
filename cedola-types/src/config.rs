//! Configuration types shared across the orchestrator and front ends.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CedolaError;

/// Buy/sell offsets, in calendar days relative to the ex-dividend date, used to
/// simulate a short trade around each dividend event.
///
/// Offsets are signed and bounded to `[MIN_OFFSET_DAYS, MAX_OFFSET_DAYS]`. No
/// ordering is enforced between them: a buy offset later than the sell offset
/// is accepted and reported by [`TradeWindow::is_inverted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradeWindow {
    /// Days added to the ex-dividend date to obtain the simulated buy date.
    pub buy_offset_days: i32,
    /// Days added to the ex-dividend date to obtain the simulated sell date.
    pub sell_offset_days: i32,
}

impl TradeWindow {
    /// Lowest accepted offset.
    pub const MIN_OFFSET_DAYS: i32 = -60;
    /// Highest accepted offset.
    pub const MAX_OFFSET_DAYS: i32 = 60;
    /// Default buy offset: twenty days before the ex-dividend date.
    pub const DEFAULT_BUY_OFFSET_DAYS: i32 = -20;
    /// Default sell offset: two days after the ex-dividend date.
    pub const DEFAULT_SELL_OFFSET_DAYS: i32 = 2;

    /// Build a validated window.
    ///
    /// # Errors
    /// Returns `InvalidArg` when either offset falls outside the accepted range.
    pub fn try_new(buy_offset_days: i32, sell_offset_days: i32) -> Result<Self, CedolaError> {
        let window = Self {
            buy_offset_days,
            sell_offset_days,
        };
        window.validate()?;
        Ok(window)
    }

    /// Check both offsets against the accepted range.
    ///
    /// # Errors
    /// Returns `InvalidArg` naming the first offending offset.
    pub fn validate(&self) -> Result<(), CedolaError> {
        let range = Self::MIN_OFFSET_DAYS..=Self::MAX_OFFSET_DAYS;
        if !range.contains(&self.buy_offset_days) {
            return Err(CedolaError::InvalidArg(format!(
                "buy offset {} outside [{}, {}]",
                self.buy_offset_days,
                Self::MIN_OFFSET_DAYS,
                Self::MAX_OFFSET_DAYS
            )));
        }
        if !range.contains(&self.sell_offset_days) {
            return Err(CedolaError::InvalidArg(format!(
                "sell offset {} outside [{}, {}]",
                self.sell_offset_days,
                Self::MIN_OFFSET_DAYS,
                Self::MAX_OFFSET_DAYS
            )));
        }
        Ok(())
    }

    /// True when the simulated buy happens after the simulated sell.
    ///
    /// Such windows are computed as configured; the sign of the resulting gain
    /// no longer describes a buy-then-sell trade.
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.buy_offset_days > self.sell_offset_days
    }
}

impl Default for TradeWindow {
    fn default() -> Self {
        Self {
            buy_offset_days: Self::DEFAULT_BUY_OFFSET_DAYS,
            sell_offset_days: Self::DEFAULT_SELL_OFFSET_DAYS,
        }
    }
}

/// Calendar naming used for month labels in reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum MonthLocale {
    /// Gennaio .. Dicembre.
    #[default]
    Italian,
    /// January .. December.
    English,
}

/// Global configuration for the `Cedola` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CedolaConfig {
    /// Buy/sell offsets for the trade simulation.
    pub trade_window: TradeWindow,
    /// Length, in years before the reference year, of the historical mean window.
    pub history_years: u16,
    /// Month naming used in calendar rows.
    pub month_locale: MonthLocale,
    /// Optional timeout applied to each provider call. `None` waits indefinitely.
    pub provider_timeout: Option<Duration>,
    /// Maximum number of tickers (and rows) processed concurrently. `1` is sequential.
    pub max_concurrency: usize,
}

impl CedolaConfig {
    /// Validate the configuration as a whole.
    ///
    /// # Errors
    /// Returns `InvalidArg` for out-of-range offsets, a zero-length history window,
    /// or a zero concurrency bound.
    pub fn validate(&self) -> Result<(), CedolaError> {
        self.trade_window.validate()?;
        if self.history_years == 0 {
            return Err(CedolaError::InvalidArg(
                "history window must span at least one year".into(),
            ));
        }
        if self.max_concurrency == 0 {
            return Err(CedolaError::InvalidArg(
                "max_concurrency must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CedolaConfig {
    fn default() -> Self {
        Self {
            trade_window: TradeWindow::default(),
            history_years: 10,
            month_locale: MonthLocale::default(),
            provider_timeout: None,
            max_concurrency: 1,
        }
    }
}
