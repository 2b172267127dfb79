use std::collections::HashSet;
#[cfg(feature = "tracing")]
use std::convert::TryFrom;
use std::sync::Arc;
use std::time::Duration;

use cedola_core::{
    Capability, CedolaConfig, CedolaConnector, CedolaError, Instrument, MonthLocale, TradeWindow,
};

use crate::router::util::collapse_errors;

/// Orchestrator that routes provider calls and builds dividend calendars.
pub struct Cedola {
    pub(crate) connectors: Vec<Arc<dyn CedolaConnector>>,
    pub(crate) cfg: CedolaConfig,
}

/// Builder for constructing a `Cedola` orchestrator with custom configuration.
pub struct CedolaBuilder {
    connectors: Vec<Arc<dyn CedolaConnector>>,
    cfg: CedolaConfig,
}

impl Default for CedolaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CedolaBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Defaults: a `-20 / +2` day trade window, a 10-year mean, Italian month
    /// names, no provider timeout and sequential per-ticker processing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: CedolaConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order is the routing priority: the first connector that
    /// supports a capability is tried first and later ones act as fallbacks.
    /// Registering a connector whose name is already present has no effect.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn CedolaConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: CedolaConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the buy/sell offsets used for the trade simulation.
    #[must_use]
    pub const fn trade_window(mut self, window: TradeWindow) -> Self {
        self.cfg.trade_window = window;
        self
    }

    /// Number of past years averaged into the per-ticker mean.
    #[must_use]
    pub const fn history_years(mut self, years: u16) -> Self {
        self.cfg.history_years = years;
        self
    }

    /// Language of month labels in the report.
    #[must_use]
    pub const fn month_locale(mut self, locale: MonthLocale) -> Self {
        self.cfg.month_locale = locale;
        self
    }

    /// Bound every individual provider call.
    ///
    /// A call exceeding the timeout fails with `ProviderTimeout` and the next
    /// connector is tried.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = Some(timeout);
        self
    }

    /// Maximum number of tickers (and rows) processed concurrently.
    ///
    /// Report order does not depend on this value.
    #[must_use]
    pub const fn max_concurrency(mut self, n: usize) -> Self {
        self.cfg.max_concurrency = n;
        self
    }

    /// Build the `Cedola` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via
    /// [`with_connector`](Self::with_connector) or the configuration is invalid.
    pub fn build(self) -> Result<Cedola, CedolaError> {
        if self.connectors.is_empty() {
            return Err(CedolaError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        self.cfg.validate()?;

        let mut seen: HashSet<&'static str> = HashSet::new();
        let connectors = self
            .connectors
            .into_iter()
            .filter(|c| seen.insert(c.name()))
            .collect();

        Ok(Cedola {
            connectors,
            cfg: self.cfg,
        })
    }
}

pub fn tag_err(connector: &str, e: CedolaError) -> CedolaError {
    match e {
        e @ (CedolaError::NotFound { .. }
        | CedolaError::ProviderTimeout { .. }
        | CedolaError::Connector { .. }
        | CedolaError::AllProvidersFailed(_)) => e,
        other => CedolaError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Cedola {
    /// Start building a new `Cedola` instance.
    #[must_use]
    pub fn builder() -> CedolaBuilder {
        CedolaBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &CedolaConfig {
        &self.cfg
    }

    /// Wrap a provider future with the optional per-provider timeout.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cedola::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = %capability,
                timeout_ms = timeout.map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Option<Duration>,
        fut: Fut,
    ) -> Result<T, CedolaError>
    where
        Fut: core::future::Future<Output = Result<T, CedolaError>>,
    {
        match timeout {
            Some(t) => (tokio::time::timeout(t, fut).await).unwrap_or_else(|_| {
                Err(CedolaError::provider_timeout(
                    connector_name,
                    capability.as_str(),
                ))
            }),
            None => fut.await,
        }
    }

    pub(crate) fn ordered(&self) -> Vec<Arc<dyn CedolaConnector>> {
        self.connectors.clone()
    }

    /// Try eligible connectors in registration order and return the first success.
    ///
    /// - `call` returns `None` for connectors that do not apply (unsupported kind or role).
    /// - Errors are tagged with the connector name and collapsed via [`collapse_errors`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cedola::core::fetch_single",
            skip(self, call),
            fields(symbol = %inst.symbol(), capability = %capability),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        inst: &Instrument,
        capability: Capability,
        call: F,
    ) -> Result<T, CedolaError>
    where
        T: Send,
        F: Fn(Arc<dyn CedolaConnector>, Instrument) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, CedolaError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<CedolaError> = Vec::new();

        for c in self.ordered() {
            if let Some(fut) = call(c.clone(), inst.clone()) {
                attempted_any = true;
                match Self::provider_call_with_timeout(
                    c.name(),
                    capability,
                    self.cfg.provider_timeout,
                    fut,
                )
                .await
                {
                    Ok(v) => return Ok(v),
                    Err(e) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(connector = c.name(), error = %e, "provider call failed");
                        errors.push(tag_err(c.name(), e));
                    }
                }
            }
        }

        Err(collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(format!("{} for {}", capability, inst.symbol())),
        ))
    }
}
