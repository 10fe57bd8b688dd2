//! Execution backend trait.
//!
//! The [`ExecutionBackend`] trait is the capability interface between the
//! submission driver and a remote (or local) execution service:
//!
//! ```text
//!   validate() ──→ ValidationOutcome      (dry run)
//!   submit()   ──→ JobHandle              (live run)
//! ```
//!
//! ## Design principles
//!
//! - **Async-native**: both operations represent network round-trips and
//!   are the driver's only suspension points.
//! - **Thread-safe**: `Send + Sync` bound enables shared ownership.
//! - **Stateless**: a backend is bound to one workspace/target pair at
//!   construction and is not mutated afterwards.
//! - **No cancellation**: once `submit()` is invoked it runs to completion
//!   or fails. Cancellation would be a new capability on this trait, not an
//!   implicit behavior.
//!
//! Timeouts and retry policy belong to the backend implementation; the
//! driver enforces neither.

use async_trait::async_trait;

use crate::error::HalResult;
use crate::job::{JobHandle, ValidationOutcome};
use crate::program::{ProgramInfo, ProgramInput};
use crate::workspace::WorkspaceConfig;

/// Capability interface to an execution backend.
///
/// # Contract
///
/// - `validate()` MUST NOT create a remote job. A rejected program is a
///   normal negative outcome (`valid == false`), not an `Err`.
/// - `submit()` MUST return a handle whose identifier can be used to look
///   the job up later. Transport and authentication failures surface as
///   `Err` and are never retried here.
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    /// Target identifier this backend is bound to.
    fn name(&self) -> &str;

    /// Check the program against backend constraints without running it.
    async fn validate(
        &self,
        program: &ProgramInfo,
        input: &ProgramInput,
    ) -> HalResult<ValidationOutcome>;

    /// Submit the program for execution.
    async fn submit(
        &self,
        program: &ProgramInfo,
        input: &ProgramInput,
        shots: u32,
    ) -> HalResult<JobHandle>;
}

/// Factory for backends constructed from a workspace and target pair.
pub trait BackendFactory: ExecutionBackend + Sized {
    /// Create a backend bound to `target` within `workspace`.
    fn from_workspace(workspace: WorkspaceConfig, target: &str) -> HalResult<Self>;
}
