//! Transport layer for the Golmar G2Call+ cloud service
//!
//! Provides HTTPS communication with the fixed vendor endpoints. The
//! [`CloudTransport`] trait is the seam between the session logic and the
//! network; production code uses [`HttpsTransport`], tests script their own
//! implementation.

pub mod error;
pub mod https;

pub use error::{Error, Result};
pub use https::HttpsTransport;

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

/// Body of an outbound call
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// XML envelope (login endpoint)
    Xml(String),

    /// JSON command (control endpoint)
    Json(serde_json::Value),
}

/// One outbound POST to a vendor endpoint
///
/// Every vendor call is a POST; the variation is in attached credentials
/// and body.
#[derive(Debug, Clone)]
pub struct CloudRequest {
    /// Endpoint URL
    pub url: String,

    /// Per-call timeout
    pub timeout: Duration,

    /// Transport session cookie value (sent as `jsessionid=<value>`)
    pub cookie: Option<String>,

    /// Bearer token (sent as `Authorization: Bearer <token>`)
    pub bearer: Option<String>,

    /// Marks the browser-style control calls (`X-Requested-With`)
    pub xml_http_request: bool,

    /// Request body, if any
    pub body: Option<RequestBody>,
}

impl CloudRequest {
    /// Create a bodiless request
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
            cookie: None,
            bearer: None,
            xml_http_request: false,
            body: None,
        }
    }

    /// Attach the session cookie
    pub fn with_cookie(mut self, cookie: Option<String>) -> Self {
        self.cookie = cookie;
        self
    }

    /// Attach the bearer token
    pub fn with_bearer(mut self, bearer: Option<String>) -> Self {
        self.bearer = bearer;
        self
    }

    /// Mark as an XMLHttpRequest-style call
    pub fn with_xml_http_request(mut self) -> Self {
        self.xml_http_request = true;
        self
    }

    /// Attach a body
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }
}

/// Response from a vendor endpoint
#[derive(Debug, Clone)]
pub struct CloudResponse {
    /// HTTP status code
    pub status: u16,

    /// Declared content type (raw header value, may carry parameters)
    pub content_type: String,

    /// `jsessionid` value from `Set-Cookie`, when the endpoint issued one
    pub session_cookie: Option<String>,

    /// Response body
    pub body: Bytes,
}

impl CloudResponse {
    /// True for HTTP 200
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Transport trait for the vendor cloud
#[async_trait]
pub trait CloudTransport: Send + Sync {
    /// Execute one POST and collect the full response
    async fn post(&self, request: CloudRequest) -> Result<CloudResponse>;
}
