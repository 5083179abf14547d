use std::io;
use thiserror::Error;

/// Custom error type for consolekit
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Progress must be between 0 and 1, got {0}")]
    Range(f64),

    #[error("Yielded value must be numeric, got {0}")]
    ValueKind(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for consolekit
pub type Result<T> = std::result::Result<T, ConsoleError>;

impl ConsoleError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        ConsoleError::Configuration(msg.into())
    }

    /// Create a value kind error from a description of the offending value
    pub fn value_kind<S: Into<String>>(found: S) -> Self {
        ConsoleError::ValueKind(found.into())
    }

    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ConsoleError::InvalidArgument(msg.into())
    }

    pub fn key_not_found<S: Into<String>>(key: S) -> Self {
        ConsoleError::KeyNotFound(key.into())
    }

    pub fn terminal<S: Into<String>>(msg: S) -> Self {
        ConsoleError::Terminal(msg.into())
    }
}
