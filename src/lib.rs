// GEMtractor Client - job submission CLI for the GEMtractor API
// Copyright (c) 2025 GEMtractor Client Contributors
// Licensed under the MIT License

//! # GEMtractor Client
//!
//! A client for the GEMtractor web service, which trims genome-scale
//! metabolic models and exports them as enzyme, reaction or metabolite
//! networks.
//!
//! ## Overview
//!
//! One run reads a local SBML model, wraps it in a JSON job together with
//! export options and filter criteria, POSTs the job to the service's
//! `api/execute` endpoint and writes the response body unmodified.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The job submitter
//! - [`adapters`] - The transport capability and its reqwest implementation
//! - [`domain`] - Job payload types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gemtractor_client::config::load_config;
//! use gemtractor_client::core::JobSubmitter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("gemtractor.toml")?;
//!     let submitter = JobSubmitter::from_config(config)?;
//!
//!     let mut stdout = std::io::stdout();
//!     let outcome = submitter.run(&mut stdout).await?;
//!
//!     eprintln!("HTTP {:?}, {} bytes", outcome.status, outcome.bytes_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Testing Without a Network
//!
//! [`core::JobSubmitter`] is generic over [`adapters::Transport`], so tests
//! can plug in a transport that records requests instead of sending them.
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`], whose error type
//! [`domain::ClientError`] separates file access, transport and
//! configuration failures.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
