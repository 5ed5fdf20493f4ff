//! Error types for summary generation.

use thiserror::Error;

/// Errors raised while talking to the text generation endpoint.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SummaryError {
    /// No API key configured.
    #[error("no API key configured")]
    MissingApiKey,

    /// Request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// Failed to encode the request or decode the response.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<reqwest::Error> for SummaryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for summary operations.
pub type Result<T> = std::result::Result<T, SummaryError>;
