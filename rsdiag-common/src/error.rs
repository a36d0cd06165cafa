//! Common error types for RSDiag

use thiserror::Error;

/// Common result type for RSDiag operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the RSDiag crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bootstrap configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parse error in the bootstrap configuration file
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON (de)serialization error for diagnostic snapshots
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
