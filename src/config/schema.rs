//! Configuration schema types
//!
//! Every value the client needs for a run lives in [`ClientConfig`]. The
//! defaults reproduce the reference job against the public GEMtractor
//! instance, so a run without a configuration file still does something useful.

use crate::domain::{ExportOptions, FilterCriteria};
use serde::{Deserialize, Serialize};

/// Default model file, relative to the working directory
pub const DEFAULT_INPUT_PATH: &str = "../src/test/gene-filter-example-2.xml";

/// Public GEMtractor execute endpoint
pub const DEFAULT_ENDPOINT_URL: &str =
    "https://gemtractor.bio.informatik.uni-rostock.de/api/execute";

/// Main client configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Where to read the model and where to send it
    #[serde(default)]
    pub job: JobConfig,

    /// Export options embedded in the job
    #[serde(default)]
    pub export: ExportOptions,

    /// Filter criteria embedded in the job
    #[serde(default)]
    pub filter: FilterCriteria,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.job.validate()?;
        self.filter.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (print the job instead of sending it)
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Job submission settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfig {
    /// Path of the model file whose text becomes the job's `file`
    #[serde(default = "default_input_path")]
    pub input_path: String,

    /// URL of the execute endpoint
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,

    /// Treat non-success HTTP statuses as errors (the body is still printed)
    #[serde(default)]
    pub fail_on_http_error: bool,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            endpoint_url: default_endpoint_url(),
            timeout_seconds: None,
            fail_on_http_error: false,
        }
    }
}

impl JobConfig {
    fn validate(&self) -> Result<(), String> {
        if self.input_path.trim().is_empty() {
            return Err("job.input_path cannot be empty".to_string());
        }

        let url = url::Url::parse(&self.endpoint_url)
            .map_err(|e| format!("Invalid job.endpoint_url '{}': {}", self.endpoint_url, e))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "job.endpoint_url must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.timeout_seconds == Some(0) {
            return Err("job.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }

    /// URL of the service's status endpoint, a sibling of the execute endpoint
    pub fn status_url(&self) -> Result<String, String> {
        let mut url = url::Url::parse(&self.endpoint_url)
            .map_err(|e| format!("Invalid job.endpoint_url '{}': {}", self.endpoint_url, e))?;

        // `…/api/execute/` names the same endpoint as `…/api/execute`
        let trimmed = url.path().trim_end_matches('/').to_string();
        url.set_path(&trimmed);

        url.join("status")
            .map(|u| u.to_string())
            .map_err(|e| format!("Cannot derive status URL: {e}"))
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_input_path() -> String {
    DEFAULT_INPUT_PATH.to_string()
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NetworkFormat, NetworkType};

    #[test]
    fn test_default_config_is_reference_job() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.job.input_path, DEFAULT_INPUT_PATH);
        assert_eq!(config.job.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.job.timeout_seconds, None);
        assert!(!config.job.fail_on_http_error);
        assert_eq!(config.export.network_type, NetworkType::En);
        assert_eq!(config.export.network_format, NetworkFormat::Dot);
        assert_eq!(config.filter, FilterCriteria::default());
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_job_config_rejects_bad_urls() {
        let mut config = JobConfig::default();

        config.endpoint_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.endpoint_url = "ftp://example.com/api/execute".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("http or https"));
    }

    #[test]
    fn test_job_config_rejects_zero_timeout() {
        let config = JobConfig {
            timeout_seconds: Some(0),
            ..JobConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_job_config_rejects_empty_input_path() {
        let config = JobConfig {
            input_path: "  ".to_string(),
            ..JobConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_status_url_derivation() {
        let config = JobConfig::default();
        assert_eq!(
            config.status_url().unwrap(),
            "https://gemtractor.bio.informatik.uni-rostock.de/api/status"
        );

        let local = JobConfig {
            endpoint_url: "http://127.0.0.1:8000/api/execute".to_string(),
            ..JobConfig::default()
        };
        assert_eq!(local.status_url().unwrap(), "http://127.0.0.1:8000/api/status");
    }

    #[test]
    fn test_status_url_ignores_trailing_slash() {
        let config = JobConfig {
            endpoint_url: "http://127.0.0.1:8000/api/execute/".to_string(),
            ..JobConfig::default()
        };
        assert_eq!(config.status_url().unwrap(), "http://127.0.0.1:8000/api/status");

        let doubled = JobConfig {
            endpoint_url: "http://127.0.0.1:8000/api/execute//".to_string(),
            ..JobConfig::default()
        };
        assert_eq!(doubled.status_url().unwrap(), "http://127.0.0.1:8000/api/status");
    }

    #[test]
    fn test_invalid_enzyme_complex_fails_validation() {
        let mut config = ClientConfig::default();
        config.filter.enzyme_complexes = vec!["lonely_gene".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.contains("lonely_gene"));
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        config.local_enabled = true;
        config.local_path = String::new();
        assert!(config.validate().is_err());
    }
}
