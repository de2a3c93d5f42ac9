//! Error types for temblor.

use thiserror::Error;

/// Result type alias for temblor operations.
pub type Result<T> = std::result::Result<T, TemblorError>;

/// Errors that can occur while querying and processing the earthquake feed.
#[derive(Error, Debug)]
pub enum TemblorError {
    /// A user-supplied query control was invalid.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The request could not complete (connectivity or timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The feed answered with an error status.
    #[error("Feed returned HTTP {status}: {detail}")]
    Response {
        /// HTTP status code.
        status: u16,
        /// Excerpt of the response body (the feed returns helpful text).
        detail: String,
    },

    /// The response body did not match the expected GeoJSON shape.
    #[error("Malformed feed response: {0}")]
    Malformed(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error for invalid query controls.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Lookback window must cover at least one hour.
    #[error("Invalid lookback: hours must be greater than zero")]
    NonPositiveLookback,

    /// Result limit must be positive.
    #[error("Invalid limit: must be greater than zero")]
    NonPositiveLimit,

    /// Result limit exceeds the feed maximum.
    #[error("Invalid limit: {0} exceeds the feed maximum of 20000")]
    LimitTooLarge(u32),

    /// Minimum magnitude must be zero or positive, and finite.
    #[error("Invalid minimum magnitude: {0}")]
    InvalidMinMagnitude(f64),
}
