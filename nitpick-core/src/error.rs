//! Error types for nitpick

use thiserror::Error;

/// Result type alias for nitpick operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for nitpick operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid request input
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Completion service failure (transport, status, or response shape)
    #[error("Completion service error: {0}")]
    Completion(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Completion(err.to_string())
    }
}
