//! Rate-limited request gateway.
//!
//! CryptoCompare meters historic, price and news calls against per-window
//! budgets tracked on the server side. This module decides admissibility
//! for every outgoing call from a freshly fetched budget report; nothing
//! is counted or cached client-side, so the decision is always derived
//! from what the server last said.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cryptocompare_api_client::gateway::{CallKind, RateGateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = RateGateway::new();
//!     if gateway.is_admissible(CallKind::Price).await? {
//!         println!("price budget available");
//!     }
//!     Ok(())
//! }
//! ```

mod snapshot;

pub use snapshot::{CallKind, ENFORCED_WINDOWS, RateSnapshot, TimeWindow, WindowCounts};

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::endpoints::{MIN_API_BASE_URL, SITE_API_BASE_URL, STATS_BASE_URL, stats};
use crate::error::CryptoCompareError;

/// Default timeout applied to every HTTP round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The rate-limited request gateway.
///
/// Every endpoint method funnels through [`RateGateway::get_json`], which
/// checks the server-reported remaining budget before issuing the data
/// request. The gateway holds no mutable state between calls; cloning it
/// is cheap and all clones share one connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use cryptocompare_api_client::gateway::RateGateway;
/// use std::time::Duration;
///
/// let gateway = RateGateway::builder()
///     .timeout(Duration::from_secs(5))
///     .user_agent("my-app/1.0")
///     .build();
/// ```
#[derive(Clone)]
pub struct RateGateway {
    http_client: ClientWithMiddleware,
    min_api_url: String,
    site_api_url: String,
    stats_url: String,
    timeout: Duration,
}

impl RateGateway {
    /// Create a gateway with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new gateway builder.
    pub fn builder() -> RateGatewayBuilder {
        RateGatewayBuilder::new()
    }

    /// Base URL for the min-api market data endpoints.
    pub fn min_api_url(&self) -> &str {
        &self.min_api_url
    }

    /// Base URL for the main site data endpoints.
    pub fn site_api_url(&self) -> &str {
        &self.site_api_url
    }

    /// Base URL for the API usage statistics endpoints.
    pub fn stats_url(&self) -> &str {
        &self.stats_url
    }

    /// Timeout applied to each HTTP round trip.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the current remaining-call report.
    ///
    /// One GET against the aggregate rate limit endpoint, covering every
    /// time window at once. Network failure surfaces as
    /// [`CryptoCompareError::Connectivity`], a malformed report as
    /// [`CryptoCompareError::Deserialization`].
    pub async fn fetch_rate_snapshot(&self) -> crate::Result<RateSnapshot> {
        let url = format!("{}{}", self.stats_url, stats::RATE_LIMIT);
        let response = self.http_client.get(&url).send().await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            CryptoCompareError::Deserialization(format!(
                "Failed to parse rate limit report: {}. Body: {}",
                e, body
            ))
        })
    }

    /// Whether a call of the given kind may proceed right now.
    ///
    /// [`CallKind::Other`] is admitted without any lookup. For metered
    /// kinds, one fresh report is fetched and every enforced window must
    /// show a remaining count above zero. The check mutates nothing, so
    /// concurrent callers can race each other past the same report; the
    /// budget is only ever reserved server-side.
    pub async fn is_admissible(&self, kind: CallKind) -> crate::Result<bool> {
        if kind == CallKind::Other {
            return Ok(true);
        }

        let snapshot = self.fetch_rate_snapshot().await?;
        let admissible = snapshot.has_budget();
        tracing::debug!(%kind, admissible, "checked remaining call budget");
        Ok(admissible)
    }

    /// Issue a budget-checked GET and return the raw response.
    ///
    /// The single entry point used by all endpoint methods: denial maps to
    /// [`CryptoCompareError::OutOfCalls`] without touching the data
    /// endpoint, and any network failure in either round trip maps to
    /// [`CryptoCompareError::Connectivity`]. The budget check and the data
    /// request are two separate round trips; the window between them is
    /// not reserved.
    pub async fn get_json(&self, url: &str, kind: CallKind) -> crate::Result<reqwest::Response> {
        if !self.is_admissible(kind).await? {
            return Err(CryptoCompareError::OutOfCalls { kind });
        }

        tracing::debug!(%kind, url, "issuing API request");
        let response = self.http_client.get(url).send().await?;
        Ok(response)
    }
}

impl Default for RateGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RateGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateGateway")
            .field("min_api_url", &self.min_api_url)
            .field("site_api_url", &self.site_api_url)
            .field("stats_url", &self.stats_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for [`RateGateway`].
pub struct RateGatewayBuilder {
    min_api_url: String,
    site_api_url: String,
    stats_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl RateGatewayBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            min_api_url: MIN_API_BASE_URL.to_string(),
            site_api_url: SITE_API_BASE_URL.to_string(),
            stats_url: STATS_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the min-api base URL (useful for testing with a mock server).
    pub fn min_api_url(mut self, url: impl Into<String>) -> Self {
        self.min_api_url = url.into();
        self
    }

    /// Set the site API base URL (useful for testing with a mock server).
    pub fn site_api_url(mut self, url: impl Into<String>) -> Self {
        self.site_api_url = url.into();
        self
    }

    /// Set the statistics base URL (useful for testing with a mock server).
    pub fn stats_url(mut self, url: impl Into<String>) -> Self {
        self.stats_url = url.into();
        self
    }

    /// Set the timeout for each HTTP round trip.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the gateway.
    pub fn build(self) -> RateGateway {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("cryptocompare-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("cryptocompare-api-client"));
        headers.insert(USER_AGENT, header_value);

        // Build the HTTP client with middleware. The fallback drops the
        // custom headers but must keep the timeout.
        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .unwrap_or_else(|_| {
                reqwest::Client::builder()
                    .timeout(self.timeout)
                    .build()
                    .unwrap_or_default()
            });

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        RateGateway {
            http_client,
            min_api_url: self.min_api_url,
            site_api_url: self.site_api_url,
            stats_url: self.stats_url,
            timeout: self.timeout,
        }
    }
}

impl Default for RateGatewayBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let gateway = RateGateway::new();
        assert_eq!(gateway.min_api_url(), MIN_API_BASE_URL);
        assert_eq!(gateway.site_api_url(), SITE_API_BASE_URL);
        assert_eq!(gateway.stats_url(), STATS_BASE_URL);
        assert_eq!(gateway.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_builder_overrides() {
        let gateway = RateGateway::builder()
            .min_api_url("http://localhost:9000/data")
            .site_api_url("http://localhost:9000/api/data")
            .stats_url("http://localhost:9000/stats")
            .timeout(Duration::from_millis(250))
            .build();
        assert_eq!(gateway.min_api_url(), "http://localhost:9000/data");
        assert_eq!(gateway.site_api_url(), "http://localhost:9000/api/data");
        assert_eq!(gateway.stats_url(), "http://localhost:9000/stats");
        assert_eq!(gateway.timeout(), Duration::from_millis(250));
    }
}
