//! Submit command implementation.
//!
//! Builds the submission settings from the parsed flags, binds input
//! parameters, and hands everything to the driver. The returned exit code
//! is the driver's: 0 for an accepted submission or a clean dry run, 1 for
//! an unknown target or a failed validation.

use std::io::{self, Write};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use vanir_hal::ProgramInput;
use vanir_submit::{OutputMode, SubmissionDriver, SubmissionSettings, TargetResolver};

use super::common::load_program;

/// Parsed arguments for the submit command.
pub struct SubmitArgs {
    pub program: String,
    pub target: Option<String>,
    pub subscription: Option<String>,
    pub resource_group: Option<String>,
    pub workspace: Option<String>,
    pub storage: Option<String>,
    pub token: Option<String>,
    pub base_uri: Option<String>,
    pub shots: u32,
    pub output: OutputMode,
    pub dry_run: bool,
    pub params: Vec<String>,
}

/// Execute the submit command, returning the process exit code.
pub async fn execute(args: SubmitArgs) -> Result<i32> {
    let program = load_program(&args.program)?;
    let input = ProgramInput::from_pairs(args.params.iter().map(String::as_str))?;

    let settings = SubmissionSettings {
        target: args.target,
        subscription: args.subscription,
        resource_group: args.resource_group,
        workspace: args.workspace,
        storage: args.storage,
        token: args.token,
        base_uri: args.base_uri,
        shots: args.shots,
        output: args.output,
        dry_run: args.dry_run,
    };

    // Spinner on stderr while the submission round-trips; hidden off-tty.
    let spinner = if settings.dry_run {
        None
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("static spinner template"),
        );
        spinner.set_message("Submitting job...");
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(spinner)
    };

    // The driver writes into buffers that are forwarded only after the
    // spinner is cleared, so a spinner redraw can never clobber the
    // driver's output on either stream.
    let mut driver = SubmissionDriver::new(TargetResolver::new(), Vec::new(), Vec::new());
    let result = driver.run(&program, &input, &settings).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let (out, err) = driver.into_streams();
    io::stdout().write_all(&out)?;
    io::stderr().write_all(&err)?;

    Ok(result?)
}
