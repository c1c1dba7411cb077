//! Login reply classification
//!
//! The login endpoint answers with varying content types depending on
//! backend mood: an XML envelope, a JSON object, or a binary blob. Each
//! declared type maps to exactly one [`LoginReply`] variant so the retry
//! policy can dispatch on a closed set instead of nested conditionals.

use bytes::Bytes;
use serde_json::Value;

use crate::envelope;
use crate::error::Result;

/// Classified login response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginReply {
    /// `application/xml` or `text/xml` body
    XmlEnvelope(String),

    /// `application/json` body (parsed)
    JsonBody(Value),

    /// `application/octet-stream` with an empty body — transient backend
    /// hiccup, the login should be retried
    EmptyBinary,

    /// `application/octet-stream` with payload; logged and tolerated,
    /// carries no token
    OpaqueBinary(usize),

    /// Any other declared content type — hard failure
    Unrecognized {
        content_type: String,
    },
}

impl LoginReply {
    /// Classify a 200 response by its declared content type
    ///
    /// A body declared as JSON that does not parse is an error, matching
    /// the strictness of the backend contract; every other input maps to
    /// a variant.
    pub fn classify(content_type: &str, body: &Bytes) -> Result<Self> {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        match mime.as_str() {
            "application/xml" | "text/xml" => Ok(LoginReply::XmlEnvelope(
                String::from_utf8_lossy(body).into_owned(),
            )),
            "application/json" => {
                let value: Value = serde_json::from_slice(body)?;
                Ok(LoginReply::JsonBody(value))
            }
            "application/octet-stream" => {
                if body.is_empty() {
                    Ok(LoginReply::EmptyBinary)
                } else {
                    Ok(LoginReply::OpaqueBinary(body.len()))
                }
            }
            _ => Ok(LoginReply::Unrecognized {
                content_type: content_type.to_string(),
            }),
        }
    }

    /// Bearer token carried by this reply, if any
    ///
    /// Only the XML and JSON variants can carry a token; its absence in
    /// those variants is tolerated by the caller.
    pub fn token(&self) -> Option<String> {
        match self {
            LoginReply::XmlEnvelope(xml) => envelope::extract_token(xml),
            LoginReply::JsonBody(value) => value
                .get("token")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        }
    }

    /// True when the reply signals a transient failure worth retrying
    pub fn is_transient(&self) -> bool {
        matches!(self, LoginReply::EmptyBinary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_xml() {
        let body = Bytes::from_static(b"<envelope><token>t1</token></envelope>");
        let reply = LoginReply::classify("application/xml", &body).unwrap();
        assert_eq!(reply.token(), Some("t1".to_string()));
        assert!(!reply.is_transient());
    }

    #[test]
    fn test_classify_xml_with_charset() {
        let body = Bytes::from_static(b"<envelope/>");
        let reply = LoginReply::classify("application/xml; charset=utf-8", &body).unwrap();
        assert!(matches!(reply, LoginReply::XmlEnvelope(_)));
    }

    #[test]
    fn test_classify_json_with_token() {
        let body = Bytes::from_static(br#"{"token": "abc123"}"#);
        let reply = LoginReply::classify("application/json", &body).unwrap();
        assert_eq!(reply.token(), Some("abc123".to_string()));
    }

    #[test]
    fn test_classify_json_without_token() {
        let body = Bytes::from_static(br#"{"status": "ok"}"#);
        let reply = LoginReply::classify("application/json", &body).unwrap();
        assert_eq!(reply.token(), None);
    }

    #[test]
    fn test_classify_malformed_json_fails() {
        let body = Bytes::from_static(b"{not json");
        assert!(LoginReply::classify("application/json", &body).is_err());
    }

    #[test]
    fn test_classify_empty_binary() {
        let reply = LoginReply::classify("application/octet-stream", &Bytes::new()).unwrap();
        assert_eq!(reply, LoginReply::EmptyBinary);
        assert!(reply.is_transient());
        assert_eq!(reply.token(), None);
    }

    #[test]
    fn test_classify_opaque_binary() {
        let body = Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef]);
        let reply = LoginReply::classify("application/octet-stream", &body).unwrap();
        assert_eq!(reply, LoginReply::OpaqueBinary(4));
        assert!(!reply.is_transient());
    }

    #[test]
    fn test_classify_unrecognized() {
        let body = Bytes::from_static(b"<html></html>");
        let reply = LoginReply::classify("text/html", &body).unwrap();
        assert_eq!(
            reply,
            LoginReply::Unrecognized {
                content_type: "text/html".to_string()
            }
        );
        assert_eq!(reply.token(), None);
    }

    #[test]
    fn test_xml_without_token_is_tolerated() {
        let body = Bytes::from_static(b"<envelope><status>ok</status></envelope>");
        let reply = LoginReply::classify("text/xml", &body).unwrap();
        assert_eq!(reply.token(), None);
        assert!(!reply.is_transient());
    }
}
