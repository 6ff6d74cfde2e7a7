//! Logging and observability
//!
//! Structured logging with `tracing`:
//! - Human-readable console output on stderr
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use gemtractor_client::logging::init_logging;
//! use gemtractor_client::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a job submission
///
/// # Example
///
/// ```no_run
/// use gemtractor_client::log_submission_start;
///
/// log_submission_start!("https://example.org/api/execute", "model.xml");
/// ```
#[macro_export]
macro_rules! log_submission_start {
    ($endpoint:expr, $input_path:expr) => {
        tracing::info!(
            endpoint = %$endpoint,
            input_path = %$input_path,
            "Submitting job"
        );
    };
}

/// Log the completion of a job submission
///
/// # Example
///
/// ```no_run
/// use gemtractor_client::log_submission_complete;
/// use std::time::Duration;
///
/// log_submission_complete!(200u16, 1024usize, Duration::from_millis(350));
/// ```
#[macro_export]
macro_rules! log_submission_complete {
    ($status:expr, $bytes:expr, $duration:expr) => {
        tracing::info!(
            status = $status,
            response_bytes = $bytes,
            duration_ms = $duration.as_millis() as u64,
            "Job completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use gemtractor_client::log_error_with_context;
/// use gemtractor_client::domain::ClientError;
///
/// let error = ClientError::Transport("connection refused".to_string());
/// log_error_with_context!(&error, "Job submission failed");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
