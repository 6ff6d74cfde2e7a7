//! Core logic for the GEMtractor client.
//!
//! # Workflow
//!
//! 1. **Read**: load the model file named by `job.input_path`
//! 2. **Build**: assemble the [`Job`](crate::domain::Job) from export options and filter criteria
//! 3. **Serialize**: encode the job as JSON
//! 4. **Send**: POST it to `job.endpoint_url` through a [`Transport`](crate::adapters::Transport)
//! 5. **Print**: write the response body, unmodified, to the output sink
//!
//! Exactly one request is issued per run and it completes before the output
//! is written.

pub mod submitter;

pub use submitter::{JobSubmitter, SubmissionOutcome};
