//! Job handle types.
//!
//! A [`JobHandle`] is created by `submit()` and consumed immediately by the
//! result reporter; the driver never retains it. It carries the remote job
//! identifier plus enough context to render a human-friendly reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a submitted job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    /// Create a new job ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Reference to a submitted remote execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobHandle {
    /// The job identifier assigned by the backend.
    pub id: JobId,
    /// Target the job was submitted to.
    pub target: String,
    /// Human-navigable link to the job's status page, when the backend
    /// can construct one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_uri: Option<String>,
    /// Time the job was accepted.
    pub submitted_at: DateTime<Utc>,
}

impl JobHandle {
    /// Create a handle for a freshly submitted job.
    pub fn new(id: impl Into<JobId>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
            friendly_uri: None,
            submitted_at: Utc::now(),
        }
    }

    /// Attach a friendly status URI.
    pub fn with_friendly_uri(mut self, uri: impl Into<String>) -> Self {
        self.friendly_uri = Some(uri.into());
        self
    }
}

/// Outcome of validating a program against a backend.
///
/// A negative outcome is a normal result, not an error: the driver reports
/// it and exits non-zero without raising.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Whether the backend accepted the program.
    pub valid: bool,
    /// Diagnostic text from the backend, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationOutcome {
    /// A successful validation with no diagnostic.
    pub fn success() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failed validation with a diagnostic message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Attach a diagnostic message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Check whether the program was accepted.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
