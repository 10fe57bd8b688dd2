//! Submission driver.
//!
//! The one component with real control flow: resolve the target, then
//! either validate (dry run) or submit (live run), then report.
//!
//! ```text
//!   resolve() ──→ NotFound ──→ error line, exit 1
//!        │
//!        └──→ Found ──┬── dry run ──→ validate() ──→ banner, exit 0/1
//!                     └── live run ──→ submit() ──→ report handle, exit 0
//! ```
//!
//! Failure semantics: an unknown target and a failed validation are normal,
//! reported outcomes carried in the exit code. A failure inside `submit()`
//! (network, authentication, remote rejection) propagates as `Err` to the
//! process boundary untouched.

use std::io::Write;

use console::Style;
use tracing::debug;

use vanir_hal::{HalResult, ProgramInfo, ProgramInput};

use crate::report::{self, ResultReporter};
use crate::resolver::{Resolution, TargetResolver};
use crate::settings::SubmissionSettings;

/// Process exit code for a successful outcome.
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit code for unknown targets and failed validations.
pub const EXIT_FAILURE: i32 = 1;

/// Orchestrates resolution, validation or submission, and reporting.
///
/// Generic over its output and error streams so the full pipeline is
/// testable against in-memory buffers; [`SubmissionDriver::stdio`] binds
/// the real process streams.
pub struct SubmissionDriver<O: Write, E: Write> {
    resolver: TargetResolver,
    out: O,
    err: E,
}

impl SubmissionDriver<std::io::Stdout, std::io::Stderr> {
    /// Driver over the process's standard streams with the built-in
    /// provider registry.
    pub fn stdio() -> Self {
        Self::new(TargetResolver::new(), std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write, E: Write> SubmissionDriver<O, E> {
    /// Create a driver with explicit resolver and streams.
    pub fn new(resolver: TargetResolver, out: O, err: E) -> Self {
        Self { resolver, out, err }
    }

    /// Consume the driver, returning its output and error streams.
    pub fn into_streams(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Run one submission and return the process exit code.
    ///
    /// Exactly one of `validate` and `submit` is invoked per call, selected
    /// by the dry-run flag; an unknown target invokes neither.
    pub async fn run(
        &mut self,
        program: &ProgramInfo,
        input: &ProgramInput,
        settings: &SubmissionSettings,
    ) -> HalResult<i32> {
        let backend = match self.resolver.resolve(settings)? {
            Resolution::Found(backend) => backend,
            Resolution::NotFound => {
                report::report_unknown_target(&mut self.err, settings.target.as_deref())?;
                return Ok(EXIT_FAILURE);
            }
        };

        if settings.dry_run {
            debug!("Dry run: validating against {}", backend.name());
            let outcome = backend.validate(program, input).await?;

            let ok = Style::new().for_stdout().green().bold();
            let bad = Style::new().for_stdout().red().bold();
            if outcome.is_valid() {
                writeln!(
                    self.out,
                    "{} Program is valid for target {}.",
                    ok.apply_to("✓"),
                    backend.name()
                )?;
            } else {
                writeln!(
                    self.out,
                    "{} Program failed validation for target {}.",
                    bad.apply_to("✗"),
                    backend.name()
                )?;
            }

            if let Some(message) = outcome.message.as_deref() {
                if !message.trim().is_empty() {
                    writeln!(self.out, "{message}")?;
                }
            }

            Ok(if outcome.is_valid() {
                EXIT_SUCCESS
            } else {
                EXIT_FAILURE
            })
        } else {
            debug!("Live run: submitting to {}", backend.name());
            // Suspension point. Errors propagate to the process boundary.
            let handle = backend.submit(program, input, settings.shots).await?;

            ResultReporter::report(&mut self.out, &handle, settings.output)?;
            Ok(EXIT_SUCCESS)
        }
    }
}
