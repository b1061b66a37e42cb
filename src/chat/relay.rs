//! HTTP transport to a running relay server.

use async_trait::async_trait;

use crate::search::{SearchError, VideoResult};
use crate::server::routes::{ErrorBody, SearchResponse};

use super::VideoSearch;

/// Relay client over `GET /api/search`.
pub struct HttpRelay {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRelay {
    /// Create a relay client for the given base URL,
    /// e.g. `http://127.0.0.1:3000`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl VideoSearch for HttpRelay {
    async fn search(&self, query: &str) -> Result<Vec<VideoResult>, SearchError> {
        let url = format!("{}/api/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if status == reqwest::StatusCode::BAD_REQUEST {
                return Err(SearchError::InvalidQuery);
            }
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(SearchError::NoResults(query.to_string()));
            }
            let detail = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.details.unwrap_or(body.error))
                .unwrap_or_default();
            return Err(SearchError::UpstreamStatus {
                status: status.as_u16(),
                detail,
            });
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.videos.into_iter().map(VideoResult::from).collect())
    }
}
