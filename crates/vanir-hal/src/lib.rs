//! Vanir execution backend abstraction layer.
//!
//! This crate defines the capability interface between the submission
//! driver and the execution services it talks to:
//!
//! - The [`ExecutionBackend`] trait — `validate` and `submit`, the only two
//!   operations the submission core needs.
//! - [`WorkspaceConfig`] and [`Credential`] — the opaque identity context
//!   required to reach a remote backend.
//! - [`BackendRegistry`] — provider-keyed factory lookup for target
//!   identifiers of the form `provider.device`.
//! - Job and program types consumed and produced by the trait.
//!
//! # Example: implementing a backend
//!
//! ```ignore
//! use vanir_hal::{
//!     ExecutionBackend, HalResult, JobHandle, ProgramInfo, ProgramInput,
//!     ValidationOutcome,
//! };
//! use async_trait::async_trait;
//!
//! struct MyBackend {
//!     target: String,
//! }
//!
//! #[async_trait]
//! impl ExecutionBackend for MyBackend {
//!     fn name(&self) -> &str {
//!         &self.target
//!     }
//!
//!     async fn validate(
//!         &self,
//!         program: &ProgramInfo,
//!         input: &ProgramInput,
//!     ) -> HalResult<ValidationOutcome> {
//!         Ok(ValidationOutcome::success())
//!     }
//!
//!     async fn submit(
//!         &self,
//!         program: &ProgramInfo,
//!         input: &ProgramInput,
//!         shots: u32,
//!     ) -> HalResult<JobHandle> {
//!         // Hand the program to the service, return its job id.
//!         # todo!()
//!     }
//! }
//! ```

pub mod backend;
pub mod error;
pub mod job;
pub mod program;
pub mod registry;
pub mod workspace;

pub use backend::{BackendFactory, ExecutionBackend};
pub use error::{HalError, HalResult};
pub use job::{JobHandle, JobId, ValidationOutcome};
pub use program::{ProgramInfo, ProgramInput};
pub use registry::BackendRegistry;
pub use workspace::{Credential, WorkspaceConfig};
