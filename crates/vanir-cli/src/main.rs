//! Vanir Command-Line Interface
//!
//! The main entry point for the `vanir` CLI tool: submit compiled quantum
//! programs to cloud execution targets, validate them without running, and
//! inspect the available providers.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{submit, targets, version};
use vanir_submit::OutputMode;

/// Vanir - submit quantum programs to cloud execution backends
#[derive(Parser)]
#[command(name = "vanir")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a compiled program to an execution target
    Submit {
        /// Compiled program file (JSON payload)
        program: String,

        /// Execution target (provider.device, or "nothing")
        #[arg(short, long)]
        target: Option<String>,

        /// Subscription identifier
        #[arg(long, env = "VANIR_SUBSCRIPTION")]
        subscription: Option<String>,

        /// Resource group within the subscription
        #[arg(long, env = "VANIR_RESOURCE_GROUP")]
        resource_group: Option<String>,

        /// Workspace name
        #[arg(short, long, env = "VANIR_WORKSPACE")]
        workspace: Option<String>,

        /// Storage connection string for large payloads
        #[arg(long, env = "VANIR_STORAGE", hide_env_values = true)]
        storage: Option<String>,

        /// Bearer token; omit to use the ambient credential path
        #[arg(long, env = "VANIR_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Base endpoint URI override
        #[arg(long)]
        base_uri: Option<String>,

        /// Number of shots
        #[arg(short, long, default_value = "500")]
        shots: u32,

        /// Output mode for the job reference (id, friendly-uri)
        #[arg(short, long, default_value = "id")]
        output: OutputMode,

        /// Validate against the target without creating a job
        #[arg(long)]
        dry_run: bool,

        /// Bind an input argument (repeatable)
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// List available execution providers
    Targets,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Submit {
            program,
            target,
            subscription,
            resource_group,
            workspace,
            storage,
            token,
            base_uri,
            shots,
            output,
            dry_run,
            params,
        } => {
            submit::execute(submit::SubmitArgs {
                program,
                target,
                subscription,
                resource_group,
                workspace,
                storage,
                token,
                base_uri,
                shots,
                output,
                dry_run,
                params,
            })
            .await
        }

        Commands::Targets => {
            targets::execute();
            Ok(0)
        }

        Commands::Version => {
            version::execute();
            Ok(0)
        }
    };

    // Handle errors
    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    }
}
