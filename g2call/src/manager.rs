//! Session manager
//!
//! Holds the account credentials and the session artifacts, and performs
//! the three sequential cloud calls: session refresh, login, device
//! enumeration. The host scheduler re-runs only the session refresh.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use g2call_core::constants::{
    AUTH_TIMEOUT, AUTH_URL, CONTROL_TIMEOUT, CONTROL_URL, LOGIN_RETRY_DELAY, LOGIN_URL,
    MAX_LOGIN_ATTEMPTS,
};
use g2call_core::{command, envelope, LoginReply, Session};
use g2call_transport::{CloudRequest, CloudTransport, RequestBody};
use g2call_types::Credentials;

use crate::error::{Error, Result};
use crate::host::{Notifier, PeriodicJob, NOTIFICATION_TITLE};

/// Session manager for one configuration entry
///
/// Owns the credentials and the shared [`Session`] state. Lock controllers
/// receive a clone of the session handle, never a copy of the credentials.
///
/// Known limitation, carried over deliberately: the periodic refresh keeps
/// only the transport cookie alive. The bearer token is captured once at
/// initialization and never re-validated, so a backend whose token expires
/// before the cookie will start rejecting door commands until the host
/// reloads the integration. Hosts that want to re-authenticate on their own
/// cadence can call [`SessionManager::login`] again.
pub struct SessionManager {
    credentials: Credentials,
    session: Session,
    transport: Arc<dyn CloudTransport>,
    notifier: Arc<dyn Notifier>,
}

impl SessionManager {
    /// Create a manager with an empty session
    pub fn new(
        credentials: Credentials,
        transport: Arc<dyn CloudTransport>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            credentials,
            session: Session::new(),
            transport,
            notifier,
        }
    }

    /// Shared session state handle
    pub fn session(&self) -> Session {
        self.session.clone()
    }

    /// Run the full startup sequence: refresh, login, device discovery
    ///
    /// Strictly sequential; the first failure aborts and propagates. There
    /// is no recoverable partial-success state.
    pub async fn initialize(&self) -> Result<()> {
        self.refresh_session().await?;
        self.login().await?;
        self.fetch_device_ids().await?;
        Ok(())
    }

    /// Refresh the transport session cookie
    ///
    /// On success the stored cookie is whatever the backend issued,
    /// including nothing at all when the response carried no cookie. On
    /// any failure a notification is raised and the error propagates as a
    /// recoverable update failure.
    pub async fn refresh_session(&self) -> Result<()> {
        let request = CloudRequest::new(AUTH_URL, AUTH_TIMEOUT);

        let response = match self.transport.post(request).await {
            Ok(response) => response,
            Err(err) => {
                error!("session refresh transport failure: {err}");
                self.notifier.notify(
                    NOTIFICATION_TITLE,
                    "Failed to refresh session for Golmar G2Call+",
                );
                return Err(err.into());
            }
        };

        if !response.is_ok() {
            error!("session refresh rejected with status {}", response.status);
            self.session.set_cookie(None);
            self.notifier.notify(
                NOTIFICATION_TITLE,
                "Failed to refresh session for Golmar G2Call+",
            );
            return Err(Error::SessionRefreshFailed {
                status: response.status,
            });
        }

        if response.session_cookie.is_none() {
            // tolerated; downstream calls will fail per-command instead
            warn!("session refresh succeeded but carried no cookie");
        }
        self.session.set_cookie(response.session_cookie);
        info!("session refreshed successfully");
        Ok(())
    }

    /// Log in and capture the bearer token
    ///
    /// The backend answers 200 with varying content types; each one maps
    /// to a [`LoginReply`] variant. An empty binary body is a transient
    /// hiccup retried after a short pause, at most
    /// [`MAX_LOGIN_ATTEMPTS`] attempts total.
    pub async fn login(&self) -> Result<()> {
        let body = envelope::login_envelope(&self.credentials);

        for attempt in 1..=MAX_LOGIN_ATTEMPTS {
            let request = CloudRequest::new(LOGIN_URL, CONTROL_TIMEOUT)
                .with_cookie(self.session.cookie())
                .with_body(RequestBody::Xml(body.clone()));

            let response = self.transport.post(request).await?;

            if !response.is_ok() {
                error!("login rejected with status {}", response.status);
                return Err(Error::UnexpectedLoginReply {
                    status: response.status,
                    content_type: response.content_type,
                });
            }

            let reply = LoginReply::classify(&response.content_type, &response.body)?;
            match reply {
                LoginReply::XmlEnvelope(_) | LoginReply::JsonBody(_) => {
                    match reply.token() {
                        Some(token) => {
                            info!("bearer token captured on attempt {attempt}");
                            self.session.set_token(Some(token));
                        }
                        None => {
                            warn!("login response carried no token");
                        }
                    }
                    return Ok(());
                }
                LoginReply::EmptyBinary => {
                    warn!(
                        "empty binary login response (attempt {attempt}/{MAX_LOGIN_ATTEMPTS})"
                    );
                    if attempt < MAX_LOGIN_ATTEMPTS {
                        tokio::time::sleep(LOGIN_RETRY_DELAY).await;
                    }
                }
                LoginReply::OpaqueBinary(len) => {
                    warn!("binary login response of {len} bytes, no token captured");
                    return Ok(());
                }
                LoginReply::Unrecognized { content_type } => {
                    error!("unexpected login content type {content_type:?}");
                    return Err(Error::UnexpectedLoginReply {
                        status: response.status,
                        content_type,
                    });
                }
            }
        }

        error!("login failed after {MAX_LOGIN_ATTEMPTS} attempts with empty responses");
        Err(Error::LoginRetriesExhausted {
            attempts: MAX_LOGIN_ATTEMPTS,
        })
    }

    /// Enumerate controllable devices
    ///
    /// Stores the ordered id list in the session and returns it. An empty
    /// list is a failure: a working account always exposes at least one
    /// intercom unit.
    pub async fn fetch_device_ids(&self) -> Result<Vec<String>> {
        let request = CloudRequest::new(CONTROL_URL, CONTROL_TIMEOUT)
            .with_cookie(self.session.cookie())
            .with_bearer(self.session.token())
            .with_xml_http_request();

        let response = self.transport.post(request).await?;

        if !response.is_ok() {
            error!(
                "device enumeration rejected with status {}",
                response.status
            );
            self.notifier
                .notify(NOTIFICATION_TITLE, "Failed to retrieve device IDs");
            return Err(Error::DeviceListFailed {
                status: response.status,
            });
        }

        let ids = command::parse_device_ids(&response.body)?;
        if ids.is_empty() {
            error!("device list response contained no devices");
            return Err(Error::NoDevicesFound);
        }

        info!("device IDs retrieved: {ids:?}");
        self.session.set_device_ids(ids.clone());
        Ok(ids)
    }
}

#[async_trait]
impl PeriodicJob for SessionManager {
    fn name(&self) -> &str {
        "golmar session refresh"
    }

    async fn run(&self) -> Result<()> {
        self.refresh_session().await
    }
}
