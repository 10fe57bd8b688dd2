//! Vanir job-submission driver.
//!
//! Given a compiled program, bound input arguments, and submission
//! settings, this crate resolves a target execution backend, validates the
//! program against it or submits it for execution, and reports the result:
//!
//! - [`SubmissionSettings`] — immutable per-invocation configuration.
//! - [`TargetResolver`] — target identifier → backend, with an explicit
//!   [`Resolution::NotFound`] outcome for unknown targets.
//! - [`SubmissionDriver`] — the orchestration and exit-code logic.
//! - [`ResultReporter`] — job reference rendering ([`OutputMode`]).
//!
//! # Example
//!
//! ```ignore
//! use vanir_hal::{ProgramInfo, ProgramInput};
//! use vanir_submit::{SubmissionDriver, SubmissionSettings};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let program = ProgramInfo::new("bell", serde_json::json!({ "ir": "..." }));
//!     let input = ProgramInput::new();
//!     let settings = SubmissionSettings::new("nothing").dry_run();
//!
//!     let mut driver = SubmissionDriver::stdio();
//!     let code = driver.run(&program, &input, &settings).await?;
//!     std::process::exit(code);
//! }
//! ```

pub mod driver;
pub mod report;
pub mod resolver;
pub mod settings;

pub use driver::{EXIT_FAILURE, EXIT_SUCCESS, SubmissionDriver};
pub use report::ResultReporter;
pub use resolver::{Resolution, TargetResolver};
pub use settings::{OutputMode, SubmissionSettings};
