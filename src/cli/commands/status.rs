//! Status command implementation
//!
//! This module implements the `status` command, which asks the service's
//! status endpoint whether it is up.

use crate::config::load_config_or_default;
use crate::core::JobSubmitter;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug, Default)]
pub struct StatusArgs {
    /// Execute endpoint URL; the status endpoint is derived from it
    #[arg(short, long, env = "GEMTRACTOR_URL")]
    pub url: Option<String>,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(e.exit_code());
            }
        };

        if let Some(ref url) = self.url {
            config.job.endpoint_url = url.clone();
        }

        let submitter = match JobSubmitter::from_config(config) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(e.exit_code());
            }
        };

        let mut stdout = std::io::stdout();
        match submitter.check_status(&mut stdout).await {
            Ok(response) if response.is_success() => {
                println!();
                Ok(0)
            }
            Ok(response) => {
                println!();
                eprintln!("Service responded with HTTP {}", response.status);
                Ok(4)
            }
            Err(e) => {
                eprintln!("Error: {e}");
                Ok(e.exit_code())
            }
        }
    }
}
