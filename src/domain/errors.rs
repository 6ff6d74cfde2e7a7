//! Domain error types
//!
//! This module defines the error hierarchy for the GEMtractor client.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main client error type
///
/// Every failure in a run surfaces as one of these variants. Nothing is
/// recovered locally; the CLI maps each variant to an exit code.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The model file is missing, unreadable or not valid UTF-8.
    /// Raised before any network activity.
    #[error("Cannot read model file {path}: {reason}")]
    FileAccess { path: String, reason: String },

    /// Connection could not be established or broke mid-request
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    /// Only raised when strict status checking is enabled.
    #[error("Service responded with HTTP {status} ({body_len} bytes)")]
    RemoteApplication { status: u16, body_len: usize },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors outside of reading the model file
    #[error("I/O error: {0}")]
    Io(String),
}

impl ClientError {
    /// Builds a [`ClientError::FileAccess`] from an I/O failure on `path`
    pub fn file_access(path: impl AsRef<std::path::Path>, err: &std::io::Error) -> Self {
        let reason = match err.kind() {
            std::io::ErrorKind::NotFound => "file not found".to_string(),
            std::io::ErrorKind::PermissionDenied => "permission denied".to_string(),
            std::io::ErrorKind::InvalidData => "file is not valid UTF-8 text".to_string(),
            _ => err.to_string(),
        };
        ClientError::FileAccess {
            path: path.as_ref().display().to_string(),
            reason,
        }
    }

    /// Process exit code for this error
    ///
    /// 2 configuration, 3 file access, 4 transport or remote status, 5 anything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            ClientError::Configuration(_) | ClientError::Validation(_) => 2,
            ClientError::FileAccess { .. } => 3,
            ClientError::Transport(_) | ClientError::RemoteApplication { .. } => 4,
            ClientError::Serialization(_) | ClientError::Io(_) => 5,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::Configuration(format!("TOML parse error: {err}"))
    }
}
