//! YouTube Data API v3 search client.

use crate::search::config::SearchConfig;
use crate::search::error::SearchError;
use crate::search::types::VideoResult;

/// YouTube Data API search endpoint.
const SEARCH_API_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Search YouTube with the configured fixed parameter set.
///
/// Makes exactly one outbound call. The provider's result order is
/// preserved as-is.
///
/// # Errors
/// Returns an error if the request fails, the provider reports a
/// non-success status, or the provider returns zero items.
pub async fn search(
    client: &reqwest::Client,
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<VideoResult>, SearchError> {
    let url = build_url(query, config)?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(SearchError::UpstreamStatus {
            status,
            detail: extract_error_detail(&body),
        });
    }

    let json: serde_json::Value = response.json().await?;
    let results = parse_search_response(&json, config.max_results);

    if results.is_empty() {
        return Err(SearchError::NoResults(query.to_string()));
    }

    Ok(results)
}

/// Build the API URL with the fixed query parameters.
fn build_url(query: &str, config: &SearchConfig) -> Result<url::Url, SearchError> {
    let mut url = url::Url::parse(SEARCH_API_URL)?;

    {
        let mut params = url.query_pairs_mut();
        params.append_pair("part", "snippet");
        params.append_pair("type", "video");
        params.append_pair("q", query);
        params.append_pair("maxResults", &config.max_results.to_string());
        params.append_pair("order", config.order.as_param());
        params.append_pair("videoEmbeddable", "true");
        params.append_pair("relevanceLanguage", &config.relevance_language);
        params.append_pair("safeSearch", "strict");

        if let Some(duration) = config.duration {
            params.append_pair("videoDuration", duration.as_param());
        }

        params.append_pair("key", &config.api_key);
    }

    Ok(url)
}

/// Parse the provider's search response, preserving item order.
///
/// Items without a video id (channel or playlist hits) are skipped.
fn parse_search_response(json: &serde_json::Value, cap: usize) -> Vec<VideoResult> {
    let mut results = Vec::new();

    if let Some(items) = json.get("items").and_then(|i| i.as_array()) {
        for item in items {
            if results.len() >= cap {
                break;
            }

            let id = item
                .get("id")
                .and_then(|i| i.get("videoId"))
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();

            if id.is_empty() {
                continue;
            }

            let snippet = item.get("snippet");

            let title = snippet
                .and_then(|s| s.get("title"))
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();

            let description = snippet
                .and_then(|s| s.get("description"))
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();

            let thumbnail_url = snippet
                .and_then(|s| s.get("thumbnails"))
                .and_then(|t| {
                    t.get("medium")
                        .or_else(|| t.get("high"))
                        .or_else(|| t.get("default"))
                })
                .and_then(|t| t.get("url"))
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();

            results.push(VideoResult {
                id,
                title,
                description,
                thumbnail_url,
            });
        }
    }

    results
}

/// Pull the human-readable message out of a provider error body.
fn extract_error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.chars().take(256).collect())
}
