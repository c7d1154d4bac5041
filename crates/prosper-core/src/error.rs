//! Error types for prosper-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Trader state decode failed: {0}")]
    TraderStateDecode(#[source] serde_json::Error),

    #[error("Trader state encode failed: {0}")]
    TraderStateEncode(#[source] serde_json::Error),

    #[error("Unsupported trader state version {found} (expected {expected})")]
    UnsupportedTraderStateVersion { found: u32, expected: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
