//! Core types for the Coinlens crypto dashboard
//!
//! This crate defines the shared data structures used across the dashboard
//! backend: resolved news articles, the feed envelope served to the frontend,
//! and the workspace-wide error type.

pub mod article;
pub mod error;
pub mod time;

pub use article::{NewsArticle, NewsFeed, NewsSource};
pub use error::{LensError, LensResult};
pub use time::format_relative_time;
