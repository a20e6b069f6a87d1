//! News Service
//!
//! Runs the feed pipeline: fetch the daily payload, normalize the envelope,
//! filter records by title against the search query, truncate to the display
//! cap, and attach the empty-state message when nothing survives.

use chrono::Utc;
use serde_json::Value;
use tracing::{info, instrument};

use coinlens_core::NewsFeed;
use coinlens_news::{extract_articles, CryptoNewsClient, NewsError, RawArticle};

/// Configuration for NewsService
#[derive(Debug, Clone)]
pub struct NewsServiceConfig {
    /// Result cap in simplified/compact display mode
    pub simplified_limit: usize,
    /// Result cap in the full display mode
    pub full_limit: usize,
}

impl Default for NewsServiceConfig {
    fn default() -> Self {
        Self {
            simplified_limit: 6,
            full_limit: 100,
        }
    }
}

/// News service for the dashboard feed
pub struct NewsService {
    news: CryptoNewsClient,
    config: NewsServiceConfig,
}

impl NewsService {
    /// Create a new NewsService
    pub fn new(news: CryptoNewsClient, config: NewsServiceConfig) -> Self {
        Self { news, config }
    }

    /// Fetch and build the news feed for a search query and display mode
    ///
    /// An empty or malformed payload is not an error: it produces an empty
    /// feed carrying the display message.
    #[instrument(skip(self))]
    pub async fn get_news(
        &self,
        query: &str,
        simplified: bool,
    ) -> Result<NewsFeed, NewsServiceError> {
        let payload = self.news.fetch_daily().await?;
        let feed = build_feed(&payload, query, simplified, &self.config);

        info!(
            "News feed built: {} matched, {} returned, query={:?}",
            feed.total_count,
            feed.articles.len(),
            feed.query
        );

        Ok(feed)
    }
}

/// Build a feed from a raw payload: normalize, filter, truncate
fn build_feed(
    payload: &Value,
    query: &str,
    simplified: bool,
    config: &NewsServiceConfig,
) -> NewsFeed {
    let now = Utc::now();

    let matched: Vec<RawArticle> = extract_articles(payload)
        .into_iter()
        .map(RawArticle::from_value)
        .filter(|article| matches_query(article.resolved_title().unwrap_or_default(), query))
        .collect();

    let total_count = matched.len();
    let limit = if simplified {
        config.simplified_limit
    } else {
        config.full_limit
    };

    let articles: Vec<_> = matched
        .into_iter()
        .take(limit)
        .map(|article| article.into_article(now))
        .collect();

    let message = articles.is_empty().then(|| empty_feed_message(query));
    let trimmed = query.trim();
    let query = (!trimmed.is_empty()).then(|| query.to_string());

    NewsFeed {
        articles,
        total_count,
        query,
        message,
    }
}

/// Whether a title matches a free-text query
///
/// A blank query matches everything. Otherwise every whitespace-separated
/// token of the query must appear in the title as a case-insensitive
/// substring, each checked independently. No stemming, no ranking.
pub fn matches_query(title: &str, query: &str) -> bool {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return true;
    }

    let title = title.to_lowercase();
    trimmed
        .to_lowercase()
        .split_whitespace()
        .all(|token| title.contains(token))
}

/// Display message for an empty feed
///
/// Which branch fires depends only on whether a search was active.
pub fn empty_feed_message(query: &str) -> String {
    if query.trim().is_empty() {
        "No news available".to_string()
    } else {
        format!("No articles found with \"{}\" in the title.", query)
    }
}

/// Errors that can occur in NewsService
#[derive(Debug, thiserror::Error)]
pub enum NewsServiceError {
    #[error("News error: {0}")]
    News(#[from] NewsError),
}
