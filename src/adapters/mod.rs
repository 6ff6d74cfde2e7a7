//! External system integrations.
//!
//! - [`transport`] - the [`Transport`] capability and its request/response types
//! - [`http`] - [`HttpTransport`], the reqwest implementation used by the CLI
//!
//! Tests substitute their own [`Transport`] to observe what would be sent
//! without touching the network.

pub mod http;
pub mod transport;

pub use http::HttpTransport;
pub use transport::{Method, OutboundRequest, Transport, TransportResponse, JSON_CONTENT_TYPE};
