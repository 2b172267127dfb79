use chrono::{Days, NaiveDate};

use cedola_core::{Candle, Capability, CedolaError, Decimal, Instrument};

use crate::Cedola;
use crate::router::macros::cedola_router_method;

/// Days looked back from today when resolving the current price.
const CURRENT_PRICE_LOOKBACK_DAYS: u64 = 6;
/// Half-width of the window searched around a trade date.
const TRADE_DATE_TOLERANCE_DAYS: u64 = 1;

impl Cedola {
    cedola_router_method! {
        /// Fetch daily candles whose exchange-local date lies in `[start, end]`.
        method: daily_closes(inst: &Instrument, start: NaiveDate, end: NaiveDate) -> Vec<Candle>,
        accessor: as_price_provider,
        capability: Capability::ClosePrices,
        call: daily_closes(inst, start, end)
    }

    /// Most recent close on or before `today`.
    ///
    /// Looks back a week so weekends and market holidays still resolve. Returns
    /// `Ok(None)` when the provider has no close in that window.
    ///
    /// # Errors
    /// Propagates routing errors from [`daily_closes`](Self::daily_closes).
    pub async fn current_price(
        &self,
        inst: &Instrument,
        today: NaiveDate,
    ) -> Result<Option<Decimal>, CedolaError> {
        let start = today
            .checked_sub_days(Days::new(CURRENT_PRICE_LOOKBACK_DAYS))
            .unwrap_or(today);
        let candles = self.daily_closes(inst, start, today).await?;
        Ok(candles.last().map(|c| c.close.amount()))
    }

    /// First available close within one day either side of `date`.
    ///
    /// # Errors
    /// Propagates routing errors from [`daily_closes`](Self::daily_closes).
    pub async fn price_on_date(
        &self,
        inst: &Instrument,
        date: NaiveDate,
    ) -> Result<Option<Decimal>, CedolaError> {
        let tolerance = Days::new(TRADE_DATE_TOLERANCE_DAYS);
        let start = date.checked_sub_days(tolerance).unwrap_or(date);
        let end = date.checked_add_days(tolerance).unwrap_or(date);
        let candles = self.daily_closes(inst, start, end).await?;
        Ok(candles.first().map(|c| c.close.amount()))
    }
}
