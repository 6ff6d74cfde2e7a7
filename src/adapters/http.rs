//! reqwest-backed transport
//!
//! [`HttpTransport`] owns one `reqwest::Client`. The client and its pooled
//! connection are released when the transport is dropped, including on error
//! paths and when an interrupted run drops the in-flight future.

use super::transport::{Method, OutboundRequest, Transport, TransportResponse};
use crate::domain::{ClientError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// HTTP transport for the GEMtractor API
///
/// # Example
///
/// ```no_run
/// use gemtractor_client::adapters::{HttpTransport, OutboundRequest, Transport};
///
/// # async fn example() -> gemtractor_client::domain::Result<()> {
/// let transport = HttpTransport::new(None)?;
/// let response = transport
///     .send(&OutboundRequest::get(
///         "https://gemtractor.bio.informatik.uni-rostock.de/api/status",
///     ))
///     .await?;
/// println!("{}", response.body);
/// # Ok(())
/// # }
/// ```
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new transport
    ///
    /// # Arguments
    ///
    /// * `timeout_seconds` - whole-request timeout; `None` waits indefinitely
    pub fn new(timeout_seconds: Option<u64>) -> Result<Self> {
        let mut client_builder = ClientBuilder::new()
            .user_agent(concat!("gemtractor-client/", env!("CARGO_PKG_VERSION")));

        if let Some(secs) = timeout_seconds {
            client_builder = client_builder
                .timeout(Duration::from_secs(secs))
                .connect_timeout(Duration::from_secs(secs.min(30)));
        }

        let client = client_builder
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<TransportResponse> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(ref body) = request.body {
            builder = builder.body(body.clone());
        }

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            body_bytes = request.body.as_ref().map(|b| b.len()).unwrap_or(0),
            "Sending request"
        );

        let resp = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Transport(format!("Request to {} timed out: {e}", request.url))
            } else {
                ClientError::Transport(format!("Request to {} failed: {e}", request.url))
            }
        })?;

        let status = resp.status().as_u16();
        let bytes = resp.bytes().await.map_err(|e| {
            ClientError::Transport(format!("Failed to read response body: {e}"))
        })?;

        // Invalid sequences become U+FFFD rather than failing the run
        let body = String::from_utf8_lossy(&bytes).into_owned();

        tracing::debug!(status = status, body_bytes = bytes.len(), "Received response");

        Ok(TransportResponse { status, body })
    }
}
