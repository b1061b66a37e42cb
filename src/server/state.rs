//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::search::{SearchConfig, SearchError, SearchService};

/// Shared application state.
pub struct AppState {
    /// Video search service.
    pub search: SearchService,
}

impl AppState {
    /// Create state with the given search configuration.
    ///
    /// # Errors
    /// Returns an error if the search service cannot be created.
    pub fn new(config: SearchConfig) -> Result<Arc<Self>, SearchError> {
        let search = SearchService::new(config)?;
        Ok(Arc::new(Self { search }))
    }

    /// Create state from the process environment.
    ///
    /// # Errors
    /// Returns an error if the API key is missing or the search service
    /// cannot be created.
    pub fn from_env() -> Result<Arc<Self>, SearchError> {
        Self::new(SearchConfig::from_env()?)
    }
}
