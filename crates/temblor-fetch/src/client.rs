//! HTTP client for the earthquake feed.

use std::time::Duration;

use temblor_types::{QuakeQuery, TemblorError, TimeWindow};
use thiserror::Error;

use crate::geojson::FeatureCollection;
use crate::params;

/// Query endpoint of the USGS FDSN event service.
pub const QUERY_ENDPOINT: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

/// Maximum number of response-body characters echoed into error messages.
const DETAIL_LIMIT: usize = 300;

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Query endpoint URL.
    pub endpoint: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: QUERY_ENDPOINT.to_string(),
            timeout: Duration::from_secs(20),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("temblor/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching from the feed.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not complete (connectivity or timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed answered with an error status.
    #[error("Feed returned HTTP {status}: {detail}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Excerpt of the response body (the feed returns helpful text).
        detail: String,
    },

    /// The response body did not match the expected GeoJSON shape.
    #[error("Malformed feed response: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FetchError> for TemblorError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Http(e) => Self::Network(e.to_string()),
            FetchError::Status { status, detail } => Self::Response { status, detail },
            FetchError::Json(e) => Self::Malformed(e.to_string()),
        }
    }
}

/// HTTP client for the event service.
///
/// One query maps to exactly one request: there is no retry, backoff, or
/// caching. A failed attempt surfaces immediately to the caller.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl FeedClient {
    /// Creates a new feed client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues the single feed request for `query` over `window`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot complete, the feed
    /// answers with a non-success status, or the body does not
    /// deserialize as a feature collection.
    pub async fn fetch(
        &self,
        query: &QuakeQuery,
        window: &TimeWindow,
    ) -> Result<FeatureCollection, FetchError> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&params::query_pairs(query, window))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                detail: truncated_body(response).await,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Reads at most [`DETAIL_LIMIT`] characters of the body for error
/// reporting.
async fn truncated_body(response: reqwest::Response) -> String {
    let text = response.text().await.unwrap_or_default();
    text.chars().take(DETAIL_LIMIT).collect()
}
