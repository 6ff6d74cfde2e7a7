//! Execute command implementation
//!
//! This module implements the `execute` command, which submits one job to
//! the GEMtractor execute endpoint and prints the response.

use crate::config::{load_config_or_default, ClientConfig};
use crate::core::JobSubmitter;
use crate::domain::ClientError;
use crate::log_error_with_context;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the execute command
#[derive(Args, Debug, Default)]
pub struct ExecuteArgs {
    /// Model file to submit (overrides job.input_path)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Execute endpoint URL (overrides job.endpoint_url)
    #[arg(short, long, env = "GEMTRACTOR_URL")]
    pub url: Option<String>,

    /// Write the response body to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds (overrides job.timeout_seconds)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Exit with an error when the service answers with a non-success status
    #[arg(long)]
    pub fail_on_http_error: bool,

    /// Print the job JSON instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl ExecuteArgs {
    /// Execute the job submission
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let config = match self.resolve_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Error: {e}");
                return Ok(e.exit_code());
            }
        };

        tracing::info!(
            network_type = %config.export.network_type,
            network_format = %config.export.network_format,
            filter_entries = config.filter.len(),
            dry_run = config.application.dry_run,
            "Job configured"
        );

        let submitter = match JobSubmitter::from_config(config) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(e.exit_code());
            }
        };

        let result = match self.output {
            Some(ref path) => {
                let mut buffer = Vec::new();
                let result = submitter.run(&mut buffer).await;
                if !buffer.is_empty() {
                    std::fs::write(path, &buffer)?;
                    tracing::info!(path = %path.display(), bytes = buffer.len(), "Response written");
                }
                result
            }
            None => {
                let mut stdout = std::io::stdout();
                let result = submitter.run(&mut stdout).await;
                stdout.flush()?;
                result
            }
        };

        match result {
            Ok(_) => Ok(0),
            Err(e) => {
                log_error_with_context!(&e, "Job submission failed");
                eprintln!("Error: {e}");
                Ok(e.exit_code())
            }
        }
    }

    /// Config file (or defaults), then environment, then command-line flags
    pub fn resolve_config(&self, config_path: Option<&str>) -> Result<ClientConfig, ClientError> {
        let mut config = load_config_or_default(config_path)?;
        self.apply_overrides(&mut config);

        config.validate().map_err(|e| {
            ClientError::Configuration(format!("Configuration validation failed: {}", e))
        })?;

        Ok(config)
    }

    fn apply_overrides(&self, config: &mut ClientConfig) {
        if let Some(ref input) = self.input {
            config.job.input_path = input.clone();
        }
        if let Some(ref url) = self.url {
            config.job.endpoint_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.job.timeout_seconds = Some(timeout);
        }
        if self.fail_on_http_error {
            config.job.fail_on_http_error = true;
        }
        if self.dry_run {
            config.application.dry_run = true;
        }
    }
}
