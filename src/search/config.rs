//! Configuration for the search service.

use std::time::Duration;

use crate::search::error::SearchError;
use crate::search::types::{DurationFilter, SearchOrder};

/// Environment variable holding the YouTube Data API key.
pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Configuration for the search service.
///
/// The defaults bias toward long-form explainer content: results are
/// ordered by view count, filtered to videos over 20 minutes, and the
/// query is suffixed with "explained tutorial".
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// YouTube Data API key.
    pub api_key: String,
    /// Maximum results requested from the provider (`maxResults`).
    pub max_results: usize,
    /// Provider-side result ordering.
    pub order: SearchOrder,
    /// Optional provider-side duration filter.
    pub duration: Option<DurationFilter>,
    /// Optional suffix appended to every query to bias results.
    pub query_suffix: Option<String>,
    /// Interface language for relevance (`relevanceLanguage`).
    pub relevance_language: String,
    /// Request timeout.
    pub request_timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl SearchConfig {
    /// Create a config with default filters for the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            max_results: 5,
            order: SearchOrder::ViewCount,
            duration: Some(DurationFilter::Long),
            query_suffix: Some("explained tutorial".to_string()),
            relevance_language: "en".to_string(),
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Read the config from the process environment.
    ///
    /// # Errors
    /// Returns an error if `YOUTUBE_API_KEY` is not set.
    pub fn from_env() -> Result<Self, SearchError> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| SearchError::Config(format!("{API_KEY_VAR} is not set")))?;
        Ok(Self::new(api_key))
    }

    /// Set the maximum number of results.
    #[must_use]
    pub const fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    /// Set the provider-side ordering.
    #[must_use]
    pub const fn with_order(mut self, order: SearchOrder) -> Self {
        self.order = order;
        self
    }

    /// Set or clear the duration filter.
    #[must_use]
    pub fn with_duration(mut self, duration: Option<DurationFilter>) -> Self {
        self.duration = duration;
        self
    }

    /// Set or clear the query suffix.
    #[must_use]
    pub fn with_query_suffix(mut self, suffix: Option<String>) -> Self {
        self.query_suffix = suffix;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// The query actually sent upstream, with the suffix applied.
    #[must_use]
    pub fn effective_query(&self, query: &str) -> String {
        match &self.query_suffix {
            Some(suffix) => format!("{query} {suffix}"),
            None => query.to_string(),
        }
    }
}
