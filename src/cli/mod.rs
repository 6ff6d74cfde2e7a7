//! CLI interface and argument parsing

pub mod commands;

use clap::{Parser, Subcommand};
use std::future::Future;

/// Exit code when the run is cancelled by a signal
pub const EXIT_INTERRUPTED: i32 = 130;

/// Exit code for errors no command mapped to a more specific code
pub const EXIT_FATAL: i32 = 5;

/// GEMtractor client - submit jobs to the GEMtractor execute API
#[derive(Parser, Debug)]
#[command(name = "gemtractor-client")]
#[command(version, about, long_about = None)]
#[command(author = "GEMtractor Client Contributors")]
pub struct Cli {
    /// Path to configuration file; built-in defaults when omitted
    #[arg(short, long, env = "GEMTRACTOR_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "GEMTRACTOR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit the job and print the service response
    Execute(commands::execute::ExecuteArgs),

    /// Query the service status endpoint
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Write a sample configuration file
    Init(commands::init::InitArgs),
}

/// Runs `command` until it finishes or `shutdown` resolves
///
/// When `shutdown` wins, the command future is dropped, which aborts any
/// in-flight request, and [`EXIT_INTERRUPTED`] is returned.
pub async fn run_until_shutdown<F, S>(command: F, shutdown: S) -> i32
where
    F: Future<Output = anyhow::Result<i32>>,
    S: Future<Output = ()>,
{
    tokio::select! {
        result = command => match result {
            Ok(code) => code,
            Err(e) => {
                tracing::error!(error = %e, "Command execution failed");
                eprintln!("Error: {e}");
                EXIT_FATAL
            }
        },
        _ = shutdown => {
            tracing::warn!("Interrupted, request aborted");
            eprintln!("Interrupted");
            EXIT_INTERRUPTED
        }
    }
}
