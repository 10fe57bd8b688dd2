//! Vanir remote cloud backend.
//!
//! Implements [`vanir_hal::ExecutionBackend`] against the hosted job
//! service. A [`CloudBackend`] is bound to one workspace/target pair at
//! construction; `validate` checks a job definition without creating a job,
//! `submit` creates one and returns its handle.
//!
//! The adapter deliberately stops at submission. Status polling, result
//! retrieval, and cancellation are not part of the submission core's
//! capability surface.
//!
//! # Example
//!
//! ```ignore
//! use vanir_adapter_cloud::CloudBackend;
//! use vanir_hal::{Credential, ExecutionBackend, WorkspaceConfig};
//!
//! let workspace = WorkspaceConfig::from_parts(
//!     Some("my-subscription"),
//!     Some("my-rg"),
//!     Some("my-workspace"),
//! )?
//! .with_credential(Credential::Token("...".into()));
//!
//! let backend = CloudBackend::new(workspace, "ionq.simulator")?;
//! let handle = backend.submit(&program, &input, 500).await?;
//! println!("{}", handle.id);
//! ```

pub mod backend;
pub mod client;
pub mod error;

pub use backend::CloudBackend;
pub use client::{CloudClient, DEFAULT_BASE_URI, JobRequest, SubmitResponse, ValidateResponse};
pub use error::{CloudError, CloudResult};
