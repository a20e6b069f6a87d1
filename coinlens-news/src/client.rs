//! RapidAPI crypto news client
//!
//! Issues a single parameterless read against the cryptocurrency-news
//! upstream. The response shape is not fixed by contract, so the body is
//! returned as raw JSON for the envelope normalizer to unwrap.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::NewsError;

/// Base URL for the crypto news API
const NEWS_API_BASE: &str = "https://cryptocurrency-news2.p.rapidapi.com";
/// RapidAPI host header value for the news API
const NEWS_API_HOST: &str = "cryptocurrency-news2.p.rapidapi.com";

/// Crypto news API client
#[derive(Clone)]
pub struct CryptoNewsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl CryptoNewsClient {
    /// Create a new crypto news client
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: NEWS_API_BASE.to_string(),
            api_key,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the daily news feed
    ///
    /// No parameters, no pagination, no retry. Returns the raw payload;
    /// callers normalize it with [`crate::envelope::extract_articles`].
    #[instrument(skip(self))]
    pub async fn fetch_daily(&self) -> Result<Value, NewsError> {
        let url = format!("{}/v1/cryptodaily", self.base_url);

        debug!("Fetching crypto news from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", NEWS_API_HOST)
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))
    }
}
