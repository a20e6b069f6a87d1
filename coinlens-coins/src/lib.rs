//! Coin data client for the Coinlens dashboard
//!
//! Sibling data source to the news feed: fetches the coin listing from the
//! RapidAPI coinranking upstream. Not consumed by the news filtering core.

pub mod client;
pub mod types;

pub use client::CoinRankingClient;
pub use types::{Coin, CoinStats, CoinsData, CoinsResponse};
