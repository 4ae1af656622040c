//! Error types for the package tree pipeline.

use thiserror::Error;

/// Errors raised while loading, projecting, or rendering a package tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The raw tree is absent or its root is not a usable directory.
    #[error("invalid input tree: {0}")]
    InvalidInput(String),

    #[error("directory depth limit of {limit} exceeded at '{path}'")]
    DepthLimitExceeded { path: String, limit: usize },

    /// The snapshot document could not be decoded.
    #[error("snapshot decode failed: {0}")]
    Snapshot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for TreeError {
    fn from(err: serde_json::Error) -> Self {
        TreeError::Snapshot(err.to_string())
    }
}

impl From<config::ConfigError> for TreeError {
    fn from(err: config::ConfigError) -> Self {
        TreeError::ConfigError(err.to_string())
    }
}
