//! Shared error types for the application

use thiserror::Error;

/// Main error type for lexiscreen operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors (invalid weight table, malformed config file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid caller-supplied input (missing sub-test, degenerate range)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Wrapped external errors
    #[error(transparent)]
    External(#[from] anyhow::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
