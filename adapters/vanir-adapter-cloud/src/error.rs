//! Error types for the cloud adapter.

use thiserror::Error;

/// Errors from the cloud job service.
#[derive(Debug, Error)]
pub enum CloudError {
    /// The service rejected the request.
    #[error("Service error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error body from the service.
        message: String,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Payload could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Workspace configuration is unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for cloud operations.
pub type CloudResult<T> = Result<T, CloudError>;
