//! Error types for the backend abstraction layer.

use thiserror::Error;

/// Errors that can occur when talking to an execution backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// No backend is registered for the requested target.
    #[error("Unknown execution target: {0}")]
    UnknownTarget(String),

    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Job submission was rejected by the service.
    #[error("Job submission failed: {0}")]
    SubmissionFailed(String),

    /// The program payload was rejected before submission.
    #[error("Invalid program: {0}")]
    InvalidProgram(String),

    /// Network error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Output stream error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic backend error.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for backend operations.
pub type HalResult<T> = Result<T, HalError>;
