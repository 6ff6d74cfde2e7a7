//! Job submission
//!
//! [`JobSubmitter`] performs one run: read the model file, build the job,
//! serialize it, POST it, and write the response body to the output sink.

use crate::adapters::{HttpTransport, OutboundRequest, Transport, TransportResponse};
use crate::config::ClientConfig;
use crate::domain::{ClientError, Job, Result};
use crate::{log_submission_complete, log_submission_start};
use std::io::Write;
use std::time::{Duration, Instant};

/// What a run did, for logging and exit-code decisions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    /// HTTP status of the response; `None` for a dry run
    pub status: Option<u16>,

    /// Bytes written to the output sink
    pub bytes_written: usize,

    /// Wall time from file read to output write
    pub duration: Duration,
}

impl SubmissionOutcome {
    pub fn is_dry_run(&self) -> bool {
        self.status.is_none()
    }
}

/// Submits a single job to the execute endpoint
///
/// # Example
///
/// ```rust,no_run
/// use gemtractor_client::config::ClientConfig;
/// use gemtractor_client::core::JobSubmitter;
///
/// # async fn example() -> gemtractor_client::domain::Result<()> {
/// let submitter = JobSubmitter::from_config(ClientConfig::default())?;
/// let mut stdout = std::io::stdout();
/// submitter.run(&mut stdout).await?;
/// # Ok(())
/// # }
/// ```
pub struct JobSubmitter<T: Transport> {
    config: ClientConfig,
    transport: T,
}

impl JobSubmitter<HttpTransport> {
    /// Creates a submitter backed by [`HttpTransport`]
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.job.timeout_seconds)?;
        Ok(Self::new(config, transport))
    }
}

impl<T: Transport> JobSubmitter<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Reads the model file and assembles the job
    ///
    /// # Errors
    ///
    /// [`ClientError::FileAccess`] when the file is missing, unreadable or
    /// not UTF-8 text.
    pub async fn build_job(&self) -> Result<Job> {
        let path = &self.config.job.input_path;
        let model = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ClientError::file_access(path, &e))?;

        tracing::debug!(path = %path, bytes = model.len(), "Read model file");

        Ok(Job::new(
            self.config.export.clone(),
            self.config.filter.clone(),
            model,
        ))
    }

    /// Runs the job and writes the response body to `out`
    ///
    /// The body is written unmodified whatever the HTTP status. With
    /// `job.fail_on_http_error` set, a non-success status is reported as
    /// [`ClientError::RemoteApplication`] after the body has been written.
    /// In dry run mode the serialized job is written instead and nothing is sent.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<SubmissionOutcome> {
        let start = Instant::now();
        let job_config = &self.config.job;

        log_submission_start!(&job_config.endpoint_url, &job_config.input_path);

        let job = self.build_job().await?;
        let body = job.to_json()?;

        if self.config.application.dry_run {
            tracing::info!(body_bytes = body.len(), "Dry run, job not sent");
            write_all(out, &body)?;
            return Ok(SubmissionOutcome {
                status: None,
                bytes_written: body.len(),
                duration: start.elapsed(),
            });
        }

        let request = OutboundRequest::post_json(&job_config.endpoint_url, body);
        let response = self.transport.send(&request).await?;

        write_all(out, &response.body)?;

        let outcome = SubmissionOutcome {
            status: Some(response.status),
            bytes_written: response.body.len(),
            duration: start.elapsed(),
        };
        log_submission_complete!(response.status, outcome.bytes_written, outcome.duration);

        if !response.is_success() {
            tracing::warn!(status = response.status, "Service returned a non-success status");
            if job_config.fail_on_http_error {
                return Err(ClientError::RemoteApplication {
                    status: response.status,
                    body_len: response.body.len(),
                });
            }
        }

        Ok(outcome)
    }

    /// Queries the service's status endpoint and writes the body to `out`
    pub async fn check_status<W: Write>(&self, out: &mut W) -> Result<TransportResponse> {
        let url = self
            .config
            .job
            .status_url()
            .map_err(ClientError::Configuration)?;

        tracing::info!(url = %url, "Checking service status");

        let response = self.transport.send(&OutboundRequest::get(url)).await?;
        write_all(out, &response.body)?;
        Ok(response)
    }
}

fn write_all<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
