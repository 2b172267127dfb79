//! Deterministic fixture connector for tests and offline runs.
//!
//! Fixture symbols: `ENI.MI`, `ENEL.MI`, `KO` (regular payers), `GROW` (never
//! paid), `NONAME` (pays, but has no profile). `FAIL` forces a connector error
//! on every capability and `TIMEOUT` answers after a short delay. Any other
//! symbol is not found.

use async_trait::async_trait;
use cedola_core::connector::{
    CedolaConnector, DividendProvider, PriceProvider, ProfileProvider,
};
use cedola_core::{AssetKind, Candle, CedolaError, DividendHistory, Instrument, Profile};
use chrono::NaiveDate;

mod fixtures;

/// Mock connector for CI-safe runs. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Build the mock connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> CedolaError {
        CedolaError::not_found(what.to_string())
    }

    async fn maybe_fail_or_timeout(symbol: &str, capability: &'static str) -> Result<(), CedolaError> {
        match symbol {
            "FAIL" => Err(CedolaError::connector(
                "cedola-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Orchestrator may time out depending on config
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl CedolaConnector for MockConnector {
    fn name(&self) -> &'static str {
        "cedola-mock"
    }

    fn supports_kind(&self, _kind: AssetKind) -> bool {
        true
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
}

#[async_trait]
impl DividendProvider for MockConnector {
    async fn dividends(&self, instrument: &Instrument) -> Result<DividendHistory, CedolaError> {
        let s = instrument.symbol_str();
        Self::maybe_fail_or_timeout(s, "dividend-history").await?;
        if s == "TIMEOUT" {
            return Ok(DividendHistory::default());
        }
        fixtures::dividends::by_symbol(s)?
            .ok_or_else(|| Self::not_found(&format!("dividend-history for {s}")))
    }
}

#[async_trait]
impl PriceProvider for MockConnector {
    async fn daily_closes(
        &self,
        instrument: &Instrument,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Candle>, CedolaError> {
        let s = instrument.symbol_str();
        Self::maybe_fail_or_timeout(s, "close-prices").await?;
        fixtures::prices::by_symbol(s, start, end)?
            .ok_or_else(|| Self::not_found(&format!("close-prices for {s}")))
    }
}

#[async_trait]
impl ProfileProvider for MockConnector {
    async fn profile(&self, instrument: &Instrument) -> Result<Profile, CedolaError> {
        let s = instrument.symbol_str();
        Self::maybe_fail_or_timeout(s, "profile").await?;
        fixtures::profile::by_symbol(s).ok_or_else(|| Self::not_found(&format!("profile for {s}")))
    }
}
