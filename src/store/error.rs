//! Storage errors

use thiserror::Error;

/// Errors from the key-value medium or from decoding stored state
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored board state exists but cannot be used
    #[error("Corrupt board state: {0}")]
    CorruptState(String),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}
