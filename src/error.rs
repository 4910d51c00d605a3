//! ScrubClaw error types

use thiserror::Error;

/// ScrubClaw error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pattern compilation error
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Pseudonym storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Alignment error
    #[error("Alignment error: {0}")]
    Alignment(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for ScrubClaw operations
pub type Result<T> = std::result::Result<T, Error>;
