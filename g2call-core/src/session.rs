//! Session state shared between the session manager and lock controllers
//!
//! A session tracks the three artifacts the cloud hands out:
//! - Transport session cookie (jsessionid)
//! - Application bearer token
//! - Device ids discovered at initialization

use std::sync::Arc;

use parking_lot::RwLock;

/// Shared session state handle
///
/// Owned by one session manager per configuration entry and cloned into
/// every lock controller that needs the cookie. Clones are cheap and share
/// the same underlying state (Arc internally). Any of the fields may stay
/// unset when the backend returns a malformed response; downstream calls
/// tolerate that and fail per-command instead.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug, Default)]
struct SessionInner {
    /// Transport cookie issued by the auth endpoint
    cookie: RwLock<Option<String>>,

    /// Bearer token issued by the login endpoint
    token: RwLock<Option<String>>,

    /// Device ids in server order
    device_ids: RwLock<Vec<String>>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Current transport cookie value
    pub fn cookie(&self) -> Option<String> {
        self.inner.cookie.read().clone()
    }

    /// Replace the transport cookie, discarding any prior value
    pub fn set_cookie(&self, cookie: Option<String>) {
        *self.inner.cookie.write() = cookie;
    }

    /// Current bearer token
    pub fn token(&self) -> Option<String> {
        self.inner.token.read().clone()
    }

    /// Replace the bearer token
    pub fn set_token(&self, token: Option<String>) {
        *self.inner.token.write() = token;
    }

    /// Discovered device ids, in server order
    pub fn device_ids(&self) -> Vec<String> {
        self.inner.device_ids.read().clone()
    }

    /// Replace the device id list
    pub fn set_device_ids(&self, ids: Vec<String>) {
        *self.inner.device_ids.write() = ids;
    }

    /// True once a bearer token has been captured
    pub fn is_authenticated(&self) -> bool {
        self.inner.token.read().is_some()
    }
}
