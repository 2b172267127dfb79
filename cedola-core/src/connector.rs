use async_trait::async_trait;
use chrono::NaiveDate;

use crate::CedolaError;
use cedola_types::DividendHistory;
use paft::domain::{AssetKind, Instrument};
use paft::fundamentals::profile::Profile;
use paft::market::responses::history::Candle;

/// Focused role trait for connectors that provide dividend payment history.
#[async_trait]
pub trait DividendProvider: Send + Sync {
    /// Fetch every dividend payment the provider knows for the instrument.
    ///
    /// An instrument that never paid a dividend yields an empty history, not an error.
    async fn dividends(&self, instrument: &Instrument) -> Result<DividendHistory, CedolaError>;
}

/// Focused role trait for connectors that provide daily close prices.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch daily candles whose exchange-local date lies in `[start, end]`, inclusive.
    ///
    /// Candles are returned in ascending timestamp order. Days without trading
    /// are simply absent.
    async fn daily_closes(
        &self,
        instrument: &Instrument,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Candle>, CedolaError>;
}

/// Focused role trait for connectors that provide company profile data.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Fetch a profile for the given instrument.
    async fn profile(&self, instrument: &Instrument) -> Result<Profile, CedolaError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait CedolaConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "cedola-yfinance", "cedola-mock").
    fn name(&self) -> &'static str;

    /// Whether this connector *claims* to support a given asset kind.
    ///
    /// Default: returns `false` for all kinds. Connectors must explicitly override
    /// this method to declare which asset kinds they support.
    fn supports_kind(&self, kind: AssetKind) -> bool {
        let _ = kind;
        false
    }

    /// Advertise dividend capability by returning a usable trait object reference when supported.
    fn as_dividend_provider(&self) -> Option<&dyn DividendProvider> {
        None
    }

    /// Advertise close-price capability by returning a usable trait object reference when supported.
    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        None
    }

    /// If implemented, returns a trait object for company profiles.
    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        None
    }
}
