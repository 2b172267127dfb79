use std::sync::Arc;

use cedola::{CedolaConnector, CedolaError};

/// Environment variable that switches the binary to the fixture connector.
pub const USE_MOCK_ENV: &str = "CEDOLA_USE_MOCK";

/// Return the connector for this run: fixtures when requested, Yahoo otherwise.
///
/// # Errors
/// Fails when the Yahoo HTTP client cannot be built.
pub fn get_connector(mock: bool) -> Result<Arc<dyn CedolaConnector>, CedolaError> {
    if mock || std::env::var(USE_MOCK_ENV).is_ok() {
        tracing::info!("using mock connector");
        Ok(Arc::new(cedola_mock::MockConnector::new()))
    } else {
        Ok(Arc::new(cedola_yfinance::YfConnector::try_new_default()?))
    }
}
