//! HTTPS transport over reqwest

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap};
use tracing::trace;

use g2call_core::constants::{SESSION_COOKIE, USER_AGENT};

use crate::{error::*, CloudRequest, CloudResponse, CloudTransport, RequestBody};

/// HTTPS transport for the vendor cloud endpoints
///
/// Certificate verification is disabled: the vendor serves certificates
/// that do not validate against public roots, and the stock app accepts
/// them. Inherited compatibility behavior, not a local choice.
pub struct HttpsTransport {
    client: reqwest::Client,
}

impl HttpsTransport {
    /// Create a transport with the fixed vendor user agent
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl CloudTransport for HttpsTransport {
    async fn post(&self, request: CloudRequest) -> Result<CloudResponse> {
        let mut builder = self
            .client
            .post(&request.url)
            .timeout(request.timeout);

        builder = if request.xml_http_request {
            builder
                .header(header::ACCEPT, "application/json, text/plain, */*")
                .header("X-Requested-With", "XMLHttpRequest")
        } else {
            builder.header(header::ACCEPT, "*/*")
        };

        if let Some(cookie) = &request.cookie {
            builder = builder.header(header::COOKIE, format!("{SESSION_COOKIE}={cookie}"));
        }
        if let Some(bearer) = &request.bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {bearer}"));
        }

        match request.body {
            Some(RequestBody::Xml(xml)) => {
                builder = builder
                    .header(header::CONTENT_TYPE, "application/xml")
                    .body(xml);
            }
            Some(RequestBody::Json(json)) => {
                builder = builder.json(&json);
            }
            None => {}
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout
            } else {
                Error::Request(e)
            }
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let session_cookie = extract_session_cookie(response.headers());

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout
            } else {
                Error::Request(e)
            }
        })?;

        trace!(
            status,
            %content_type,
            body_len = body.len(),
            "received response from {}",
            request.url
        );

        Ok(CloudResponse {
            status,
            content_type,
            session_cookie,
            body,
        })
    }
}

/// Pull the session cookie value out of the Set-Cookie headers
fn extract_session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|raw| {
            let (name, rest) = raw.split_once('=')?;
            if !name.trim().eq_ignore_ascii_case(SESSION_COOKIE) {
                return None;
            }
            let value = rest.split(';').next().unwrap_or_default().trim();
            (!value.is_empty()).then(|| value.to_string())
        })
}
