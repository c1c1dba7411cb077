//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Protocol error: {0}")]
    Core(#[from] g2call_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] g2call_transport::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] g2call_types::Error),

    #[error("Session refresh failed (status {status})")]
    SessionRefreshFailed { status: u16 },

    #[error("Unexpected login response (status {status}, content type {content_type:?})")]
    UnexpectedLoginReply { status: u16, content_type: String },

    #[error("Login failed after {attempts} attempts due to empty binary responses")]
    LoginRetriesExhausted { attempts: usize },

    #[error("No device IDs found")]
    NoDevicesFound,

    #[error("Device ID retrieval failed (status {status})")]
    DeviceListFailed { status: u16 },

    #[error("Door command rejected (status {status}): {message}")]
    CommandRejected { status: u16, message: String },
}

impl Error {
    /// Check if a later retry might succeed
    ///
    /// Everything the cloud can do to us is transient from the host's
    /// point of view; the coordinator reschedules instead of tearing the
    /// integration down. Only a bad configuration needs operator action.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}
