//! Error types for the search module.

use thiserror::Error;

/// Errors that can occur during a video search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Query was missing or blank after trimming.
    #[error("query must not be empty")]
    InvalidQuery,

    /// Provider returned zero items for the query.
    #[error("no videos found for query: {0}")]
    NoResults(String),

    /// Outbound HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// HTTP client configuration error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Provider returned a non-success status.
    #[error("YouTube API returned status {status}: {detail}")]
    UpstreamStatus {
        /// HTTP status code from the provider.
        status: u16,
        /// Provider error detail, best effort.
        detail: String,
    },

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SearchError {
    /// Whether the error is caused by caller input rather than the provider.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidQuery)
    }
}
