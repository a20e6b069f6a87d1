//! Crypto news client for the Coinlens dashboard
//!
//! This crate fetches the daily crypto news feed from the RapidAPI
//! cryptocurrency-news upstream and normalizes its response: the envelope
//! shape is not guaranteed, and individual records use inconsistent field
//! names across providers.

pub mod client;
pub mod envelope;
pub mod error;
pub mod types;

pub use client::CryptoNewsClient;
pub use envelope::extract_articles;
pub use error::NewsError;
pub use types::RawArticle;
