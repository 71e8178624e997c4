//! Error types for the preference layer.

use thiserror::Error;

/// Errors from preference parsing and persistence.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("invalid color string: {0:?}")]
    InvalidColor(String),

    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from compiling a user filter string.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid filter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
