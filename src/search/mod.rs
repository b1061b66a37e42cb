//! Video search for the relay.
//!
//! Owns the outbound HTTP client and the fixed filtering parameter set.
//! Ranking, relevance, and filtering are entirely delegated to the
//! provider's query parameters; no local reordering happens here.

pub mod config;
pub mod error;
pub mod types;
pub mod youtube;

pub use config::SearchConfig;
pub use error::SearchError;
pub use types::{DurationFilter, SearchOrder, VideoResult};

/// Search service coordinating outbound provider calls.
pub struct SearchService {
    config: SearchConfig,
    client: reqwest::Client,
}

impl SearchService {
    /// Create a new search service with the given configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| SearchError::HttpClient(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Search for videos matching `query`.
    ///
    /// Rejects blank queries before any outbound call. Makes exactly one
    /// provider call per invocation; no retry, no caching.
    ///
    /// # Errors
    /// Returns `InvalidQuery` for a blank query, `NoResults` when the
    /// provider returns zero items, and an upstream error otherwise.
    pub async fn search(&self, query: &str) -> Result<Vec<VideoResult>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::InvalidQuery);
        }

        let effective = self.config.effective_query(query);
        tracing::debug!("searching videos for: {effective}");

        youtube::search(&self.client, &effective, &self.config).await
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }
}
