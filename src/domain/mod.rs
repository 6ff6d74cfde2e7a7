//! Domain models and types for the GEMtractor client.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Job payload** ([`Job`], [`ExportOptions`], [`FilterCriteria`])
//! - **Export enums** ([`NetworkType`], [`NetworkFormat`])
//! - **Error types** ([`ClientError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use gemtractor_client::domain::{ExportOptions, FilterCriteria, Job};
//!
//! # fn example() -> gemtractor_client::domain::Result<()> {
//! let job = Job::new(ExportOptions::default(), FilterCriteria::default(), "<model/>");
//! let body = job.to_json()?;
//! assert!(body.contains("\"network_format\":\"dot\""));
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod job;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::ClientError;
pub use job::{ExportOptions, FilterCriteria, Job, NetworkFormat, NetworkType};
pub use result::Result;
