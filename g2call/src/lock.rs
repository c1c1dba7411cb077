//! Lock entities
//!
//! One controller per lock channel per device. The locked flag is
//! optimistic client-side bookkeeping: it flips on a successful open and
//! is never reconciled with server truth. There is no re-lock command in
//! the vendor protocol.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use g2call_core::constants::{CONTROL_TIMEOUT, CONTROL_URL};
use g2call_core::{CommandResult, OpenDoorRequest, Session};
use g2call_transport::{CloudRequest, CloudTransport, RequestBody};
use g2call_types::LockChannel;

use crate::error::{Error, Result};
use crate::host::{Notifier, NOTIFICATION_TITLE};

/// One controllable door relay on one intercom device
///
/// Shares the session handle with the session manager; commands are only
/// meaningful while the referenced device id remains in the discovered
/// list. Nothing detects device removal.
pub struct LockController {
    session: Session,
    transport: Arc<dyn CloudTransport>,
    notifier: Arc<dyn Notifier>,
    device_id: String,
    channel: LockChannel,
    name: String,
    locked: AtomicBool,
}

impl LockController {
    /// Create a controller for one channel of one device
    pub fn new(
        session: Session,
        transport: Arc<dyn CloudTransport>,
        notifier: Arc<dyn Notifier>,
        device_id: impl Into<String>,
        channel: LockChannel,
    ) -> Self {
        let device_id = device_id.into();
        let name = format!("{} - {}", device_id, channel.door_name());

        Self {
            session,
            transport,
            notifier,
            device_id,
            channel,
            name,
            locked: AtomicBool::new(true),
        }
    }

    /// Display name, `"<device id> - Front Door"` style
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Device this relay belongs to
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Relay channel
    pub fn channel(&self) -> LockChannel {
        self.channel
    }

    /// Optimistic lock state
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }

    /// Send one door-open command
    ///
    /// HTTP 200 with result code 0 marks the lock open. Any other outcome
    /// leaves the state untouched and raises exactly one notification,
    /// carrying the backend message when one is supplied.
    pub async fn open(&self) -> Result<()> {
        match self.send_open().await {
            Ok(()) => {
                info!("{} opened successfully", self.name);
                self.locked.store(false, Ordering::Release);
                Ok(())
            }
            Err(err) => {
                let message = match &err {
                    Error::CommandRejected { message, .. } => message.clone(),
                    other => other.to_string(),
                };
                error!("failed to open {}: {message}", self.name);
                self.notifier.notify(
                    NOTIFICATION_TITLE,
                    &format!("Failed to open {}: {}", self.name, message),
                );
                Err(err)
            }
        }
    }

    async fn send_open(&self) -> Result<()> {
        let payload = OpenDoorRequest::new(&self.device_id, self.channel);
        let body = serde_json::to_value(&payload).map_err(g2call_core::Error::InvalidJson)?;

        let request = CloudRequest::new(CONTROL_URL, CONTROL_TIMEOUT)
            .with_cookie(self.session.cookie())
            .with_body(RequestBody::Json(body));

        let response = self.transport.post(request).await?;

        // failure bodies may carry a message; parse best-effort either way
        let result = CommandResult::parse(&response.body).ok();

        if response.is_ok() {
            if let Some(result) = &result {
                if result.is_success() {
                    return Ok(());
                }
            }
        }

        let message = result
            .and_then(|r| r.message)
            .unwrap_or_else(|| "Unknown error".to_string());

        Err(Error::CommandRejected {
            status: response.status,
            message,
        })
    }
}
