//! Raw article record and field-alias resolution
//!
//! Upstream providers disagree on field names: a title may arrive as
//! `title`, `name`, or `headline`, and so on for every other field. The raw
//! record carries the whole union as optional fields; resolvers pick the
//! first present alias in a fixed priority order.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use coinlens_core::{format_relative_time, NewsArticle, NewsSource};

/// Title shown when no title alias is present
pub const NO_TITLE_PLACEHOLDER: &str = "No Title Available";
/// Description shown when no description alias is present
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description available";

/// A news record as the upstream actually sends it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawArticle {
    pub title: Option<String>,
    pub name: Option<String>,
    pub headline: Option<String>,

    pub description: Option<String>,
    pub excerpt: Option<String>,
    pub summary: Option<String>,

    pub url: Option<String>,
    pub link: Option<String>,

    pub thumbnail: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "datePublished")]
    pub date_published: Option<String>,
}

impl RawArticle {
    /// Decode a record from a normalized envelope element
    ///
    /// Elements that are not objects (or carry wrongly-typed fields) decode
    /// to the all-absent record; placeholders apply downstream. The element
    /// count and order of the envelope are always preserved.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// First present title alias: `title`, `name`, `headline`
    pub fn resolved_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .or(self.headline.as_deref())
    }

    /// First present description alias: `description`, `excerpt`, `summary`
    pub fn resolved_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or(self.excerpt.as_deref())
            .or(self.summary.as_deref())
    }

    /// First present link alias: `url`, `link`
    pub fn resolved_link(&self) -> Option<&str> {
        self.url.as_deref().or(self.link.as_deref())
    }

    /// First present image alias: `thumbnail`, `image`, `urlToImage`
    pub fn resolved_image(&self) -> Option<&str> {
        self.thumbnail
            .as_deref()
            .or(self.image.as_deref())
            .or(self.url_to_image.as_deref())
    }

    /// First present timestamp alias, parsed
    ///
    /// Accepts RFC 3339 and RFC 2822; anything else is treated as absent.
    pub fn resolved_published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self
            .created_at
            .as_deref()
            .or(self.published_at.as_deref())
            .or(self.date.as_deref())
            .or(self.date_published.as_deref())?;

        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_rfc2822(raw))
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Resolve into the display-ready article
    pub fn into_article(self, now: DateTime<Utc>) -> NewsArticle {
        let published_at = self.resolved_published_at();

        NewsArticle {
            title: self
                .resolved_title()
                .unwrap_or(NO_TITLE_PLACEHOLDER)
                .to_string(),
            description: self
                .resolved_description()
                .unwrap_or(NO_DESCRIPTION_PLACEHOLDER)
                .to_string(),
            source: self.resolved_link().map(extract_source),
            image_url: self.resolved_image().map(String::from),
            url: self.resolved_link().map(String::from),
            published_at,
            published_ago: published_at.map(|dt| format_relative_time(dt, now)),
        }
    }
}

/// Extract source information from an article URL
fn extract_source(article_url: &str) -> NewsSource {
    let parsed = url::Url::parse(article_url).ok();

    let host = parsed
        .as_ref()
        .and_then(|u| u.host_str())
        .unwrap_or("Unknown");

    // First host label, www stripped, capitalized for display
    let label = host.strip_prefix("www.").unwrap_or(host);
    let label = label.split('.').next().unwrap_or(label);
    let name = match label.chars().next() {
        Some(first) => format!("{}{}", first.to_uppercase(), &label[first.len_utf8()..]),
        None => label.to_string(),
    };

    let base_url = parsed
        .as_ref()
        .map(|u| format!("{}://{}", u.scheme(), u.host_str().unwrap_or("")))
        .unwrap_or_else(|| article_url.to_string());

    NewsSource {
        name,
        url: base_url.clone(),
        favicon_url: Some(format!("{}/favicon.ico", base_url)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_alias_priority() {
        let article = RawArticle::from_value(json!({
            "headline": "from headline",
            "name": "from name",
            "title": "from title",
        }));
        assert_eq!(article.resolved_title(), Some("from title"));

        let article = RawArticle::from_value(json!({
            "headline": "from headline",
            "name": "from name",
        }));
        assert_eq!(article.resolved_title(), Some("from name"));

        let article = RawArticle::from_value(json!({ "headline": "from headline" }));
        assert_eq!(article.resolved_title(), Some("from headline"));
    }

    #[test]
    fn test_placeholders_apply_on_resolution() {
        let now = Utc::now();
        let article = RawArticle::from_value(json!({})).into_article(now);
        assert_eq!(article.title, NO_TITLE_PLACEHOLDER);
        assert_eq!(article.description, NO_DESCRIPTION_PLACEHOLDER);
        assert!(article.url.is_none());
        assert!(article.published_at.is_none());
        assert!(article.published_ago.is_none());
    }

    #[test]
    fn test_non_object_element_decodes_to_default() {
        let article = RawArticle::from_value(json!("not a record"));
        assert!(article.resolved_title().is_none());

        let article = RawArticle::from_value(json!(42));
        assert!(article.resolved_link().is_none());
    }

    #[test]
    fn test_timestamp_parsing() {
        let article = RawArticle::from_value(json!({
            "publishedAt": "2025-06-15T09:00:00Z",
        }));
        let parsed = article.resolved_published_at().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-06-15T09:00:00+00:00");

        // RFC 2822, common in feed-derived payloads
        let article = RawArticle::from_value(json!({
            "date": "Sun, 15 Jun 2025 09:00:00 GMT",
        }));
        assert!(article.resolved_published_at().is_some());

        let article = RawArticle::from_value(json!({ "createdAt": "yesterday-ish" }));
        assert!(article.resolved_published_at().is_none());
    }

    #[test]
    fn test_timestamp_alias_priority() {
        let article = RawArticle::from_value(json!({
            "publishedAt": "2025-06-14T00:00:00Z",
            "createdAt": "2025-06-15T00:00:00Z",
        }));
        let parsed = article.resolved_published_at().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-06-15T00:00:00+00:00");
    }

    #[test]
    fn test_into_article_resolves_all_fields() {
        let now: DateTime<Utc> = "2025-06-15T12:00:00Z".parse().unwrap();
        let article = RawArticle::from_value(json!({
            "name": "Bitcoin hits high",
            "excerpt": "A strong week for BTC",
            "link": "https://www.coindesk.com/markets/2025/06/15/btc",
            "image": "https://img.example.com/btc.png",
            "publishedAt": "2025-06-15T09:00:00Z",
        }))
        .into_article(now);

        assert_eq!(article.title, "Bitcoin hits high");
        assert_eq!(article.description, "A strong week for BTC");
        assert_eq!(
            article.url.as_deref(),
            Some("https://www.coindesk.com/markets/2025/06/15/btc")
        );
        assert_eq!(
            article.image_url.as_deref(),
            Some("https://img.example.com/btc.png")
        );
        assert_eq!(article.published_ago.as_deref(), Some("3 hours ago"));
        let source = article.source.unwrap();
        assert_eq!(source.name, "Coindesk");
        assert_eq!(source.url, "https://www.coindesk.com");
    }

    #[test]
    fn test_extract_source() {
        let source = extract_source("https://www.reuters.com/article/test");
        assert_eq!(source.name, "Reuters");
        assert_eq!(source.url, "https://www.reuters.com");

        let source = extract_source("https://bloomberg.com/news/test");
        assert_eq!(source.name, "Bloomberg");
    }
}
