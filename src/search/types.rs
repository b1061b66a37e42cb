//! Core types for video search results.

use serde::{Deserialize, Serialize};

/// A single video returned by the search provider.
///
/// Produced fresh per request, never mutated, never persisted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VideoResult {
    /// Opaque provider video identifier.
    pub id: String,
    /// Video title.
    pub title: String,
    /// Description snippet.
    pub description: String,
    /// Thumbnail image URL.
    pub thumbnail_url: String,
}

impl VideoResult {
    /// Watch page URL for this video.
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    /// Embeddable player URL for this video.
    #[must_use]
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.id)
    }
}

/// Result ordering applied provider-side; never recomputed locally.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SearchOrder {
    /// Most relevant first.
    Relevance,
    /// Most viewed first (default).
    #[default]
    ViewCount,
}

impl SearchOrder {
    /// Value of the provider's `order` parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::ViewCount => "viewCount",
        }
    }
}

/// Duration filter applied provider-side.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DurationFilter {
    /// Under 4 minutes.
    Short,
    /// Between 4 and 20 minutes.
    Medium,
    /// Longer than 20 minutes.
    Long,
}

impl DurationFilter {
    /// Value of the provider's `videoDuration` parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}
