//! Cloud account credentials

use std::fmt;

use crate::error::{Error, Result};

/// Golmar cloud account credentials
///
/// Supplied once at setup and immutable for the lifetime of the session
/// manager. Both fields are mandatory; empty values are rejected here so a
/// misconfigured entry never reaches the wire.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create credentials, rejecting empty fields
    ///
    /// # Examples
    ///
    /// ```
    /// use g2call_types::Credentials;
    ///
    /// let creds = Credentials::new("user@example.com", "secret").unwrap();
    /// assert_eq!(creds.username(), "user@example.com");
    ///
    /// assert!(Credentials::new("", "secret").is_err());
    /// ```
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let password = password.into();

        if username.trim().is_empty() {
            return Err(Error::Validation("username must not be empty".into()));
        }
        if password.trim().is_empty() {
            return Err(Error::Validation("password must not be empty".into()));
        }

        Ok(Self { username, password })
    }

    /// Account name (e-mail address on most installations)
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Account password (sent in clear text inside the login envelope,
    /// inherited vendor-protocol behavior)
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Password must never end up in logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
