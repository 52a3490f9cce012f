//! Error types for the search client.

use thiserror::Error;

/// Errors that can occur while fetching a catalog.
///
/// These are kept distinct for logging. The fetcher collapses all of them
/// into one user-visible message.
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid service URL
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    /// Service is offline or unreachable
    #[error("Service unreachable: {0}")]
    ServerUnreachable(String),

    /// Request did not finish within the configured timeout
    #[error("Search timed out after {0:?}")]
    Timeout(std::time::Duration),
}

impl SearchError {
    /// Whether retrying the same query later could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::ServerError { status, .. } => *status == 429 || *status >= 500,
            Self::ServerUnreachable(_) | Self::Timeout(_) => true,
            Self::ParseError(_) | Self::InvalidUrl(_) => false,
        }
    }
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
