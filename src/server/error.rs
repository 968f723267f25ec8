//! Server error types

use thiserror::Error;

/// Errors that can stop the static server
#[derive(Error, Debug)]
pub enum ServerError {
    /// Binding or accepting failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid CORS origin in the configuration
    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),

    /// Server loop terminated abnormally
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;
