//! Error types for the dashboard backend

use thiserror::Error;

/// Workspace-wide error type
#[derive(Error, Debug)]
pub enum LensError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LensError {
    pub fn api(msg: impl Into<String>) -> Self {
        LensError::Api(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        LensError::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        LensError::Parse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        LensError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        LensError::Internal(msg.into())
    }
}

/// Result type alias for dashboard operations
pub type LensResult<T> = Result<T, LensError>;
