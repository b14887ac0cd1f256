//! Error types for history store operations

use thiserror::Error;

/// History store error types
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from the persistence backend
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while persisting history
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No usable data directory for the default history location
    #[error("Could not determine data directory")]
    NoDataDir,
}

/// Result type alias for history store operations
pub type Result<T> = std::result::Result<T, Error>;
