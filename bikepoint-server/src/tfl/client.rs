//! TfL BikePoint HTTP client.

use super::error::TflError;
use super::types::BikePoint;

/// Default base URL for the TfL unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the BikePoint client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TflConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the TfL BikePoint API.
///
/// The API is unauthenticated for anonymous use; no key handling is
/// needed. Requests are never retried.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: String,
}

impl TflClient {
    /// Create a new BikePoint client with the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Search bike points by free-text name.
    ///
    /// The endpoint matches loosely and may return any number of records.
    pub async fn search(&self, query: &str) -> Result<Vec<BikePoint>, TflError> {
        let url = format!("{}/BikePoint/Search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TflError::Json {
            message: e.to_string(),
        })
    }

    /// Fetch the full record for a bike point by id.
    ///
    /// Unlike search results, this record carries the live property list
    /// (bike and dock counts).
    pub async fn get_bike_point(&self, id: &str) -> Result<BikePoint, TflError> {
        let url = format!("{}/BikePoint/{}", self.base_url, id);

        let response = self.http.get(&url).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TflError::Json {
            message: e.to_string(),
        })
    }

    /// Probe the API base address.
    ///
    /// Succeeds on any response at all; only transport failures are
    /// errors. The readiness endpoint uses this to decide health.
    pub async fn ping(&self) -> Result<reqwest::StatusCode, TflError> {
        let response = self.http.get(&self.base_url).send().await?;
        Ok(response.status())
    }
}
