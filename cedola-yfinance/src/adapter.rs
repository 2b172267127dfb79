#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use cedola_core::{CedolaError, Interval};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use yf::core::HistoryService;
use yf::core::services::HistoryRequest;
use yfinance_rs as yf;

use crate::YfConnector;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// A span of daily bars to request from the Yahoo chart endpoint.
///
/// `from` is inclusive and `until` exclusive, both at midnight UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartQuery {
    /// First day requested.
    pub from: NaiveDate,
    /// Day after the last one requested.
    pub until: NaiveDate,
    /// Ask for dividend and split events alongside the bars.
    pub with_events: bool,
    /// Ask for split/dividend adjusted prices.
    pub adjusted: bool,
}

impl ChartQuery {
    /// Every dividend event from the epoch through `today`, unadjusted.
    #[must_use]
    pub fn dividends_through(today: NaiveDate) -> Self {
        Self {
            from: DateTime::<Utc>::UNIX_EPOCH.date_naive(),
            until: today.succ_opt().unwrap_or(today),
            with_events: true,
            adjusted: false,
        }
    }

    /// Adjusted daily bars covering `[start, end]`.
    ///
    /// # Errors
    /// `InvalidArg` when `start > end` or `end` is the last representable date.
    pub fn closes(start: NaiveDate, end: NaiveDate) -> Result<Self, CedolaError> {
        if start > end {
            return Err(CedolaError::InvalidArg(format!(
                "close range starts after it ends: {start} > {end}"
            )));
        }
        let until = end
            .checked_add_signed(TimeDelta::days(1))
            .ok_or_else(|| CedolaError::InvalidArg(format!("end date out of range: {end}")))?;
        Ok(Self {
            from: start,
            until,
            with_events: false,
            adjusted: true,
        })
    }

    fn request(self) -> HistoryRequest {
        let ts = |d: NaiveDate| d.and_time(NaiveTime::MIN).and_utc().timestamp();
        HistoryRequest {
            range: None,
            period: Some((ts(self.from), ts(self.until))),
            interval: Interval::D1,
            include_prepost: false,
            include_actions: self.with_events,
            auto_adjust: self.adjusted,
            keepna: false,
        }
    }
}

/// Daily chart source for one symbol.
#[async_trait]
pub trait YfChart: Send + Sync {
    /// Fetch the bars and events `query` selects.
    async fn chart(&self, symbol: &str, query: ChartQuery)
    -> Result<yf::HistoryResponse, CedolaError>;
}

/// Company or fund description for one symbol.
#[async_trait]
pub trait YfCompany: Send + Sync {
    /// Load the display profile of `symbol`.
    async fn describe(&self, symbol: &str) -> Result<yf::profile::Profile, CedolaError>;
}

/// Live Yahoo Finance session shared by both endpoints.
#[derive(Clone)]
pub struct YahooSession {
    client: yf::YfClient,
}

impl YahooSession {
    /// Open a session over a cookie-enabled HTTP client with a browser user agent.
    ///
    /// # Errors
    /// Returns `Other` if the HTTP client or the Yahoo client cannot be built.
    pub fn open() -> Result<Self, CedolaError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .map_err(|e| CedolaError::Other(format!("http client: {e}")))?;
        let client = yf::YfClient::builder()
            .custom_client(http)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CedolaError::Other(format!("yahoo client: {e}")))?;
        Ok(Self { client })
    }
}

fn tag(what: &str, symbol: &str, e: &yf::YfError) -> CedolaError {
    let context = format!("{what} for {symbol}");
    let msg = match e {
        yf::YfError::NotFound { .. } => return CedolaError::not_found(context),
        yf::YfError::RateLimited { .. } => format!("rate limit: {context}"),
        yf::YfError::ServerError { status, .. } => format!("server error {status}: {context}"),
        yf::YfError::Status { status, .. } => format!("status {status}: {context}"),
        other => other.to_string(),
    };
    CedolaError::connector(YfConnector::NAME, msg)
}

#[async_trait]
impl YfChart for YahooSession {
    async fn chart(
        &self,
        symbol: &str,
        query: ChartQuery,
    ) -> Result<yf::HistoryResponse, CedolaError> {
        self.client
            .fetch_full_history(symbol, query.request())
            .await
            .map_err(|e| tag("chart", symbol, &e))
    }
}

#[async_trait]
impl YfCompany for YahooSession {
    async fn describe(&self, symbol: &str) -> Result<yf::profile::Profile, CedolaError> {
        yf::profile::load_profile(&self.client, symbol)
            .await
            .map_err(|e| tag("profile", symbol, &e))
    }
}

#[cfg(feature = "test-adapters")]
struct FromFn<F>(F);

#[cfg(feature = "test-adapters")]
#[async_trait]
impl<F> YfChart for FromFn<F>
where
    F: Fn(&str, ChartQuery) -> Result<yf::HistoryResponse, CedolaError> + Send + Sync,
{
    async fn chart(
        &self,
        symbol: &str,
        query: ChartQuery,
    ) -> Result<yf::HistoryResponse, CedolaError> {
        (self.0)(symbol, query)
    }
}

#[cfg(feature = "test-adapters")]
#[async_trait]
impl<F> YfCompany for FromFn<F>
where
    F: Fn(&str) -> Result<yf::profile::Profile, CedolaError> + Send + Sync,
{
    async fn describe(&self, symbol: &str) -> Result<yf::profile::Profile, CedolaError> {
        (self.0)(symbol)
    }
}

/// Chart source answering from a closure (tests only).
#[cfg(feature = "test-adapters")]
pub fn chart_fn<F>(f: F) -> Arc<dyn YfChart>
where
    F: Fn(&str, ChartQuery) -> Result<yf::HistoryResponse, CedolaError> + Send + Sync + 'static,
{
    Arc::new(FromFn(f))
}

/// Profile source answering from a closure (tests only).
#[cfg(feature = "test-adapters")]
pub fn company_fn<F>(f: F) -> Arc<dyn YfCompany>
where
    F: Fn(&str) -> Result<yf::profile::Profile, CedolaError> + Send + Sync + 'static,
{
    Arc::new(FromFn(f))
}

/// Chart source that reports every call as unsupported (tests only).
#[cfg(feature = "test-adapters")]
#[must_use]
pub fn no_chart() -> Arc<dyn YfChart> {
    chart_fn(|_, _| Err(CedolaError::unsupported("chart")))
}

/// Profile source that reports every call as unsupported (tests only).
#[cfg(feature = "test-adapters")]
#[must_use]
pub fn no_company() -> Arc<dyn YfCompany> {
    company_fn(|_| Err(CedolaError::unsupported("profile")))
}
