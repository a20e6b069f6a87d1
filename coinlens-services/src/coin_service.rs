//! Coin Service
//!
//! Thin wrapper over the coinranking client: one listing call with an
//! optional client-side result cap. Rank order is whatever upstream sent.

use tracing::{info, instrument};

use coinlens_coins::{CoinRankingClient, CoinsData};
use coinlens_core::LensResult;

/// Coin listing service
pub struct CoinService {
    coins: CoinRankingClient,
}

impl CoinService {
    /// Create a new CoinService
    pub fn new(coins: CoinRankingClient) -> Self {
        Self { coins }
    }

    /// List coins, optionally truncated
    #[instrument(skip(self))]
    pub async fn list_coins(&self, limit: Option<usize>) -> LensResult<CoinsData> {
        let mut data = self.coins.list_coins().await?;

        if let Some(limit) = limit {
            data.coins.truncate(limit);
        }

        info!("Coin listing fetched: {} coins", data.coins.len());
        Ok(data)
    }
}
