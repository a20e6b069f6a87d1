//! Coinranking API client

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};

use coinlens_core::LensError;

use crate::types::{CoinsData, CoinsResponse};

/// Base URL for the coinranking API
const COINS_API_BASE: &str = "https://coinranking1.p.rapidapi.com";
/// RapidAPI host header value for the coinranking API
const COINS_API_HOST: &str = "coinranking1.p.rapidapi.com";

/// Coinranking API client
#[derive(Clone)]
pub struct CoinRankingClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl CoinRankingClient {
    /// Create a new coinranking client
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: COINS_API_BASE.to_string(),
            api_key,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List coins with global market stats
    #[instrument(skip(self))]
    pub async fn list_coins(&self) -> Result<CoinsData, LensError> {
        let url = format!("{}/coins", self.base_url);

        debug!("Fetching coins from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", COINS_API_HOST)
            .send()
            .await
            .map_err(|e| LensError::network(format!("Failed to fetch coins: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LensError::api(format!(
                "Coinranking API error ({}): {}",
                status, body
            )));
        }

        let coins_response: CoinsResponse = response
            .json()
            .await
            .map_err(|e| LensError::parse(format!("Failed to parse coins response: {}", e)))?;

        Ok(coins_response.data)
    }
}
