//! Control-endpoint payloads and responses

use serde::{Deserialize, Serialize};
use g2call_types::LockChannel;

use crate::constants::{door, OPEN_DOOR_COMMAND};
use crate::error::Result;

/// Door-open command body
///
/// # Wire format
///
/// ```json
/// {
///   "password": "...",
///   "deviceId": "...",
///   "content": {"password": "...", "door": 1, "locknumber": 2},
///   "command": "set.device.opendoor"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct OpenDoorRequest {
    pub password: String,

    #[serde(rename = "deviceId")]
    pub device_id: String,

    pub content: OpenDoorContent,

    pub command: String,
}

/// Inner content block of the door command
#[derive(Debug, Clone, Serialize)]
pub struct OpenDoorContent {
    pub password: String,
    pub door: u8,
    pub locknumber: u8,
}

impl OpenDoorRequest {
    /// Build a door-open command for one lock channel
    pub fn new(device_id: impl Into<String>, channel: LockChannel) -> Self {
        Self {
            password: door::COMMAND_PASSWORD.to_string(),
            device_id: device_id.into(),
            content: OpenDoorContent {
                password: door::DEVICE_PASSWORD.to_string(),
                door: door::DOOR,
                locknumber: channel.number(),
            },
            command: OPEN_DOOR_COMMAND.to_string(),
        }
    }
}

/// Result envelope returned by the control endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CommandResult {
    /// Vendor result code; 0 means accepted
    #[serde(default)]
    pub result: Option<i64>,

    /// Human-readable failure reason, when the backend supplies one
    #[serde(default)]
    pub message: Option<String>,
}

impl CommandResult {
    /// Parse a control-endpoint response body
    pub fn parse(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// True when the command was accepted
    pub fn is_success(&self) -> bool {
        self.result == Some(0)
    }
}

/// Device enumeration response: `{"content": {"main-devlist": [...]}}`
#[derive(Debug, Deserialize)]
struct DeviceListResponse {
    #[serde(default)]
    content: DeviceListContent,
}

#[derive(Debug, Default, Deserialize)]
struct DeviceListContent {
    #[serde(rename = "main-devlist", default)]
    main_devlist: Vec<DeviceEntry>,
}

#[derive(Debug, Deserialize)]
struct DeviceEntry {
    #[serde(rename = "deviceId")]
    device_id: String,
}

/// Extract device ids from an enumeration response, in server order
///
/// An empty list is returned as-is; deciding that no devices is a failure
/// belongs to the caller.
pub fn parse_device_ids(body: &[u8]) -> Result<Vec<String>> {
    let response: DeviceListResponse = serde_json::from_slice(body)?;
    Ok(response
        .content
        .main_devlist
        .into_iter()
        .map(|entry| entry.device_id)
        .collect())
}
