//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ClientConfig;
use crate::domain::errors::ClientError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ClientConfig
/// 4. Applies environment variable overrides (GEMTRACTOR_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, if parsing or substitution
/// fails, or if the resulting configuration is invalid.
///
/// # Examples
///
/// ```no_run
/// use gemtractor_client::config::loader::load_config;
///
/// let config = load_config("gemtractor.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ClientConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ClientError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ClientError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ClientConfig = toml::from_str(&contents)
        .map_err(|e| ClientError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(&mut config)?;
    Ok(config)
}

/// Builds the configuration used when no file is given
///
/// Starts from the built-in defaults, then applies the same
/// environment overrides and validation as [`load_config`].
pub fn load_default_config() -> Result<ClientConfig> {
    let mut config = ClientConfig::default();
    finish(&mut config)?;
    Ok(config)
}

/// Loads `path` when given, the defaults otherwise
pub fn load_config_or_default(path: Option<&str>) -> Result<ClientConfig> {
    match path {
        Some(p) => load_config(p),
        None => load_default_config(),
    }
}

fn finish(config: &mut ClientConfig) -> Result<()> {
    apply_env_overrides(config)?;

    config.validate().map_err(|e| {
        ClientError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ClientError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        // Don't process env vars in comments
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(ClientError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using GEMTRACTOR_* prefix
///
/// Environment variables follow the pattern: GEMTRACTOR_<SECTION>_<KEY>
/// For example: GEMTRACTOR_JOB_ENDPOINT_URL, GEMTRACTOR_EXPORT_NETWORK_FORMAT
fn apply_env_overrides(config: &mut ClientConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("GEMTRACTOR_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("GEMTRACTOR_APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_env("GEMTRACTOR_APPLICATION_DRY_RUN", &val)?;
    }

    // Job overrides
    if let Ok(val) = std::env::var("GEMTRACTOR_JOB_INPUT_PATH") {
        config.job.input_path = val;
    }
    if let Ok(val) = std::env::var("GEMTRACTOR_JOB_ENDPOINT_URL") {
        config.job.endpoint_url = val;
    }
    if let Ok(val) = std::env::var("GEMTRACTOR_JOB_TIMEOUT_SECONDS") {
        config.job.timeout_seconds = Some(parse_env("GEMTRACTOR_JOB_TIMEOUT_SECONDS", &val)?);
    }
    if let Ok(val) = std::env::var("GEMTRACTOR_JOB_FAIL_ON_HTTP_ERROR") {
        config.job.fail_on_http_error = parse_env("GEMTRACTOR_JOB_FAIL_ON_HTTP_ERROR", &val)?;
    }

    // Export overrides
    if let Ok(val) = std::env::var("GEMTRACTOR_EXPORT_NETWORK_TYPE") {
        config.export.network_type = val.parse().map_err(ClientError::Configuration)?;
    }
    if let Ok(val) = std::env::var("GEMTRACTOR_EXPORT_NETWORK_FORMAT") {
        config.export.network_format = val.parse().map_err(ClientError::Configuration)?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("GEMTRACTOR_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_env("GEMTRACTOR_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("GEMTRACTOR_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

/// Parses an override value, naming the variable when it is malformed
fn parse_env<T>(name: &str, val: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    val.trim().parse().map_err(|e| {
        ClientError::Configuration(format!("Invalid value '{val}' for {name}: {e}"))
    })
}
