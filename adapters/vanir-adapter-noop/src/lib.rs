//! Vanir no-op sentinel backend.
//!
//! The reserved target `nothing` resolves to this backend. It accepts every
//! program without inspection and "submits" by minting a synthetic job
//! handle, making no external call of any kind. It exists so that the
//! submission pipeline can be exercised end to end — dry runs, live runs,
//! output modes — with no workspace, credentials, or network.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use vanir_hal::{
    ExecutionBackend, HalResult, JobHandle, ProgramInfo, ProgramInput, ValidationOutcome,
};

/// Reserved target identifier for the no-op backend.
pub const NOOP_TARGET: &str = "nothing";

/// Backend that validates everything and submits nothing.
pub struct NoopBackend {
    /// Fixed job id to return from `submit`, for deterministic tests.
    job_id: Option<String>,
}

impl NoopBackend {
    /// Create a no-op backend that mints a fresh UUID per submission.
    pub fn new() -> Self {
        Self { job_id: None }
    }

    /// Create a no-op backend that always returns `job_id`.
    pub fn with_job_id(job_id: impl Into<String>) -> Self {
        Self {
            job_id: Some(job_id.into()),
        }
    }
}

impl Default for NoopBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExecutionBackend for NoopBackend {
    fn name(&self) -> &str {
        NOOP_TARGET
    }

    async fn validate(
        &self,
        program: &ProgramInfo,
        _input: &ProgramInput,
    ) -> HalResult<ValidationOutcome> {
        debug!("No-op validation of '{}'", program.name);
        Ok(ValidationOutcome::success())
    }

    async fn submit(
        &self,
        program: &ProgramInfo,
        _input: &ProgramInput,
        shots: u32,
    ) -> HalResult<JobHandle> {
        let id = self
            .job_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        debug!(
            "No-op submission of '{}' ({} shots): {}",
            program.name, shots, id
        );
        Ok(JobHandle::new(id, NOOP_TARGET))
    }
}
