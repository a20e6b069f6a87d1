//! Resolved news article structures served to the frontend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source of a news article, derived from the article URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsSource {
    /// Display name of the source (e.g., "Coindesk")
    pub name: String,
    /// URL of the source's website
    pub url: String,
    /// URL to the source's favicon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
}

/// A news article after field-alias resolution
///
/// The upstream feed does not commit to a field layout, so every field here
/// is the result of picking the first present alias from the raw record.
/// Title and description fall back to placeholder strings; everything else
/// stays optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Article title (placeholder applied when the upstream omits one)
    pub title: String,
    /// Brief summary/excerpt (placeholder applied when absent)
    pub description: String,
    /// Article URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Article thumbnail/image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Publication date, when the upstream supplied a parseable one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Relative-time rendering of `published_at` ("3 hours ago")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_ago: Option<String>,
    /// Source information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<NewsSource>,
}

/// News feed response served to the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsFeed {
    /// Articles after filtering and truncation
    pub articles: Vec<NewsArticle>,
    /// Number of articles that matched the query, before truncation
    pub total_count: usize,
    /// Search query that produced this feed, when one was active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Display message for an empty feed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
