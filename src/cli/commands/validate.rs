//! Validate config command implementation
//!
//! This module implements the `validate-config` command for checking a
//! configuration file without submitting anything.

use crate::config::load_config_or_default;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let source = config_path.unwrap_or("<built-in defaults>");
        tracing::info!(config_path = %source, "Validating configuration");

        println!("🔍 Validating configuration: {source}");
        println!();

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Model File: {}", config.job.input_path);
        println!("  Endpoint: {}", config.job.endpoint_url);
        match config.job.timeout_seconds {
            Some(secs) => println!("  Timeout: {secs}s"),
            None => println!("  Timeout: none"),
        }
        println!("  Fail On HTTP Error: {}", config.job.fail_on_http_error);
        println!("  Network Type: {}", config.export.network_type);
        println!("  Network Format: {}", config.export.network_format);
        println!("  Species Filter: {:?}", config.filter.species);
        println!("  Reactions Filter: {:?}", config.filter.reactions);
        println!("  Enzymes Filter: {:?}", config.filter.enzymes);
        println!(
            "  Enzyme Complexes Filter: {:?}",
            config.filter.enzyme_complexes
        );
        println!();
        Ok(0)
    }
}
