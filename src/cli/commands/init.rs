//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "gemtractor.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Point job.input_path at your SBML model");
                println!("  2. Adjust [export] and [filter] to your needs");
                println!(
                    "  3. Validate configuration: gemtractor-client --config {} validate-config",
                    self.output
                );
                println!(
                    "  4. Submit the job: gemtractor-client --config {} execute",
                    self.output
                );
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration reproducing the reference job
    pub fn generate_config() -> String {
        r#"# GEMtractor client configuration
#
# Values of the form ${VAR_NAME} are replaced from the environment.
# Any key can also be overridden with GEMTRACTOR_<SECTION>_<KEY>.

[application]
# trace, debug, info, warn, error
log_level = "info"
# Print the job JSON instead of sending it
dry_run = false

[job]
input_path = "../src/test/gene-filter-example-2.xml"
endpoint_url = "https://gemtractor.bio.informatik.uni-rostock.de/api/execute"
# Request timeout; no timeout when omitted
# timeout_seconds = 120
# Exit non-zero on non-2xx responses (the body is printed either way)
fail_on_http_error = false

[export]
# en (enzymes), rn (reactions), mn (metabolites)
network_type = "en"
# sbml, dot, graphml, gml, csv
network_format = "dot"
# Optional flags; the service picks its own defaults when omitted
# remove_reaction_enzymes_removed = true
# remove_reaction_missing_species = false
# discard_fake_enzymes = false

[filter]
species = ["a", "d"]
reactions = ["r2"]
enzymes = ["gene_abc", "gene_x"]
# Genes of a complex are joined with " + "
enzyme_complexes = ["b + c", "x + Y", "b_098 + r_abc"]

[logging]
local_enabled = false
local_path = "./logs"
# daily, hourly, never
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, ClientConfig};
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_matches_defaults() {
        let config: ClientConfig = toml::from_str(&InitArgs::generate_config()).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[tokio::test]
    async fn test_init_writes_loadable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gemtractor.toml");
        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(load_config(&path).is_ok());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gemtractor.toml");
        fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# existing");

        let forced = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(forced.execute().await.unwrap(), 0);
    }
}
