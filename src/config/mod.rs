//! Configuration management for the GEMtractor client.
//!
//! # Overview
//!
//! The client reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `GEMTRACTOR_<SECTION>_<KEY>` environment overrides
//! - Defaults that reproduce the reference job when no file is given
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - log level and dry run
//! - [`JobConfig`] - model path, endpoint URL, timeout, strict status checking
//! - [`ExportOptions`](crate::domain::ExportOptions) - network type and format
//! - [`FilterCriteria`](crate::domain::FilterCriteria) - species, reactions, enzymes, enzyme complexes
//! - [`LoggingConfig`] - optional JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [job]
//! input_path = "${MODEL_DIR}/gene-filter-example-2.xml"
//! endpoint_url = "https://gemtractor.bio.informatik.uni-rostock.de/api/execute"
//!
//! [export]
//! network_type = "en"
//! network_format = "dot"
//!
//! [filter]
//! species = ["a", "d"]
//! reactions = ["r2"]
//! enzymes = ["gene_abc", "gene_x"]
//! enzyme_complexes = ["b + c", "x + Y", "b_098 + r_abc"]
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, load_default_config};
pub use schema::{ApplicationConfig, ClientConfig, JobConfig, LoggingConfig};
