//! HTTP route handlers for the relay API.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::search::{SearchError, VideoResult};

use super::state::AppState;

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/search", get(video_search))
        .fallback_service(ServeDir::new("static"))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "clipscout",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Query string for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The free-text query.
    pub query: Option<String>,
}

/// Successful search response.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ranked videos, provider order preserved.
    pub videos: Vec<VideoDto>,
}

/// Wire shape of a single video result.
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoDto {
    /// Opaque video identifier.
    #[serde(rename = "videoId")]
    pub video_id: String,
    /// Video title.
    pub title: String,
    /// Description snippet.
    pub description: String,
    /// Thumbnail URL.
    pub thumbnail: String,
}

impl From<VideoResult> for VideoDto {
    fn from(v: VideoResult) -> Self {
        Self {
            video_id: v.id,
            title: v.title,
            description: v.description,
            thumbnail: v.thumbnail_url,
        }
    }
}

impl From<VideoDto> for VideoResult {
    fn from(v: VideoDto) -> Self {
        Self {
            id: v.video_id,
            title: v.title,
            description: v.description,
            thumbnail_url: v.thumbnail,
        }
    }
}

/// Structured error payload returned for every failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
    /// Best-effort upstream detail, present on 500 only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// An API error carrying its HTTP status and response body.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status to return.
    pub status: StatusCode,
    /// JSON body to return.
    pub body: ErrorBody,
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidQuery => Self {
                status: StatusCode::BAD_REQUEST,
                body: ErrorBody {
                    error: "Query parameter is required".to_string(),
                    details: None,
                },
            },
            SearchError::NoResults(query) => {
                tracing::info!("no videos found for: {query}");
                Self {
                    status: StatusCode::NOT_FOUND,
                    body: ErrorBody {
                        error: "No educational videos found".to_string(),
                        details: None,
                    },
                }
            }
            other => {
                tracing::error!("search failed: {other}");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: ErrorBody {
                        error: "Failed to search YouTube".to_string(),
                        details: Some(other.to_string()),
                    },
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Handle video search requests.
async fn video_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.query.as_deref().unwrap_or("").trim().to_string();
    if query.is_empty() {
        return Err(ApiError::from(SearchError::InvalidQuery));
    }

    let results = state.search.search(&query).await?;

    Ok(Json(SearchResponse {
        videos: results.into_iter().map(VideoDto::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::search::SearchConfig;

    async fn request(uri: &str) -> (StatusCode, ErrorBody) {
        let state = AppState::new(SearchConfig::new("test-key")).expect("state builds");
        let app = create_router(state);
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body = serde_json::from_slice(&bytes).expect("error body parses");
        (status, body)
    }

    #[tokio::test]
    async fn test_missing_query_param_returns_400() {
        let (status, body) = request("/api/search").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Query parameter is required");
    }

    #[tokio::test]
    async fn test_blank_query_param_returns_400() {
        let (status, body) = request("/api/search?query=%20%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Query parameter is required");
    }

    #[tokio::test]
    async fn test_health_check() {
        let state = AppState::new(SearchConfig::new("test-key")).expect("state builds");
        let app = create_router(state);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_invalid_query_maps_to_400() {
        let err = ApiError::from(SearchError::InvalidQuery);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error, "Query parameter is required");
        assert!(err.body.details.is_none());
    }

    #[test]
    fn test_no_results_maps_to_404() {
        let err = ApiError::from(SearchError::NoResults("gravity".to_string()));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.body.error, "No educational videos found");
        assert!(err.body.details.is_none());
    }

    #[test]
    fn test_upstream_failure_maps_to_500_with_detail() {
        let err = ApiError::from(SearchError::UpstreamStatus {
            status: 403,
            detail: "quota exceeded".to_string(),
        });
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.error, "Failed to search YouTube");
        assert_eq!(
            err.body.details.as_deref(),
            Some("YouTube API returned status 403: quota exceeded")
        );
    }

    #[test]
    fn test_error_body_omits_absent_details() {
        let body = ErrorBody {
            error: "Query parameter is required".to_string(),
            details: None,
        };
        let json = serde_json::to_value(&body).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({ "error": "Query parameter is required" })
        );
    }

    #[test]
    fn test_video_dto_wire_names() {
        let dto = VideoDto::from(VideoResult {
            id: "abc123".to_string(),
            title: "Gravity Explained".to_string(),
            description: "A deep dive.".to_string(),
            thumbnail_url: "https://i.ytimg.com/vi/abc123/mqdefault.jpg".to_string(),
        });
        let json = serde_json::to_value(&dto).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "videoId": "abc123",
                "title": "Gravity Explained",
                "description": "A deep dive.",
                "thumbnail": "https://i.ytimg.com/vi/abc123/mqdefault.jpg"
            })
        );
    }
}
