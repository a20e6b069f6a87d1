//! Business logic services for the Coinlens dashboard
//!
//! Sits between the upstream API clients and the HTTP surface: the news
//! service runs the fetch, normalize, filter, and truncate pipeline; the
//! coin service wraps the coin listing.

pub mod coin_service;
pub mod news_service;

pub use coin_service::CoinService;
pub use news_service::{NewsService, NewsServiceConfig, NewsServiceError};
