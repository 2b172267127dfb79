//! cedola-yfinance
//!
//! Public connector that implements `CedolaConnector` on top of the `yfinance-rs`
//! client library. Exposes dividend history, daily closes, and company profiles.
#![warn(missing_docs)]

/// Chart and profile adapters, plus the live Yahoo session behind them.
pub mod adapter;

use std::sync::Arc;

use adapter::{ChartQuery, YahooSession, YfChart, YfCompany};
use async_trait::async_trait;
use cedola_core::{
    Action, AssetKind, Candle, CedolaError, DividendHistory, DividendPayment, Instrument, Profile,
    connector::{CedolaConnector, DividendProvider, PriceProvider, ProfileProvider},
    exchange_local_date,
};
use chrono::{NaiveDate, Utc};

/// Public connector type. Production users will construct with `YfConnector::try_new_default()`.
pub struct YfConnector {
    chart: Arc<dyn YfChart>,
    company: Arc<dyn YfCompany>,
}

impl YfConnector {
    /// Connector name used in routing and error tags.
    pub const NAME: &'static str = "cedola-yfinance";

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("delisted")
    }

    fn normalize_error(e: CedolaError, what: &str) -> CedolaError {
        match e {
            CedolaError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    CedolaError::not_found(what.to_string())
                } else {
                    CedolaError::connector(Self::NAME, msg)
                }
            }
            CedolaError::Other(msg) => CedolaError::connector(Self::NAME, msg),
            other => other,
        }
    }

    /// Build over a fresh Yahoo session.
    ///
    /// # Errors
    /// Returns an error if the HTTP or Yahoo client cannot be constructed.
    pub fn try_new_default() -> Result<Self, CedolaError> {
        let session = Arc::new(YahooSession::open()?);
        Ok(Self {
            chart: session.clone(),
            company: session,
        })
    }

    /// Build from injected chart and profile sources (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    #[must_use]
    pub fn with_adapters(chart: Arc<dyn YfChart>, company: Arc<dyn YfCompany>) -> Self {
        Self { chart, company }
    }
}

#[async_trait]
impl DividendProvider for YfConnector {
    async fn dividends(&self, instrument: &Instrument) -> Result<DividendHistory, CedolaError> {
        let symbol = instrument.symbol_str();
        let raw = self
            .chart
            .chart(symbol, ChartQuery::dividends_through(Utc::now().date_naive()))
            .await
            .map_err(|e| Self::normalize_error(e, &format!("dividend-history for {symbol}")))?;

        let payments: Vec<DividendPayment> = raw
            .actions
            .into_iter()
            .filter_map(|a| match a {
                Action::Dividend { ts, amount } => Some(DividendPayment { ts, amount }),
                _ => None,
            })
            .collect();

        Ok(DividendHistory {
            payments,
            utc_offset_seconds: raw
                .meta
                .and_then(|m| m.utc_offset_seconds)
                .map(i64::from),
        })
    }
}

#[async_trait]
impl PriceProvider for YfConnector {
    async fn daily_closes(
        &self,
        instrument: &Instrument,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Candle>, CedolaError> {
        let query = ChartQuery::closes(start, end)?;
        let symbol = instrument.symbol_str();
        let raw = self
            .chart
            .chart(symbol, query)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("close-prices for {symbol}")))?;

        let offset = raw
            .meta
            .as_ref()
            .and_then(|m| m.utc_offset_seconds)
            .map(i64::from);
        let mut candles: Vec<Candle> = raw
            .candles
            .into_iter()
            .filter(|c| (start..=end).contains(&exchange_local_date(c.ts, offset)))
            .collect();
        candles.sort_by_key(|c| c.ts);

        #[cfg(feature = "tracing")]
        tracing::debug!(symbol, %start, %end, candles = candles.len(), "daily closes");

        Ok(candles)
    }
}

#[async_trait]
impl ProfileProvider for YfConnector {
    async fn profile(&self, instrument: &Instrument) -> Result<Profile, CedolaError> {
        let symbol = instrument.symbol_str();
        let raw = self
            .company
            .describe(symbol)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("profile for {symbol}")))?;
        Ok(raw)
    }
}

impl CedolaConnector for YfConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn as_dividend_provider(&self) -> Option<&dyn DividendProvider> {
        Some(self as &dyn DividendProvider)
    }

    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        Some(self as &dyn PriceProvider)
    }

    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        Some(self as &dyn ProfileProvider)
    }

    fn supports_kind(&self, kind: AssetKind) -> bool {
        matches!(kind, AssetKind::Equity | AssetKind::Fund)
    }
}
