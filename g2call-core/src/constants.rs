//! Vendor cloud constants
//!
//! Everything here is fixed by the vendor backend; none of it is operator
//! configurable.

use std::time::Duration;

/// Auth endpoint (downstream duplex) — issues the transport session cookie
pub const AUTH_URL: &str = "https://r1-2.qvcloud.net/auth/user;jus_duplex=down";

/// Login endpoint (upstream duplex) — accepts the login envelope
pub const LOGIN_URL: &str = "https://r1-2.qvcloud.net/auth/user;jus_duplex=up";

/// Control endpoint — device enumeration and door commands
pub const CONTROL_URL: &str =
    "https://tdkopenapir1.qvcloud.net/openapi-tdk/devctr/synccontrol/singledev";

/// User agent string the backend expects on every call
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/93.0.4577.82 Safari/537.36";

/// Name of the transport session cookie
pub const SESSION_COOKIE: &str = "jsessionid";

/// Envelope protocol flag
pub const ENVELOPE_FLAG: &str = "tdkcloud";

/// Envelope protocol version
pub const ENVELOPE_VERSION: &str = "1.10";

/// Client identity fields in the envelope header (blank for the stock app)
pub mod client {
    /// Client id
    pub const ID: &str = "";

    /// Client type (2 = mobile app)
    pub const TYPE: u8 = 2;

    /// OEM identifier
    pub const OEM: &str = "";

    /// App identifier
    pub const APP: &str = "";
}

/// Opaque password fields carried in the door command body
pub mod door {
    /// Outer command password field
    pub const COMMAND_PASSWORD: &str = "encrypted_password_here";

    /// Device password field inside the command content
    pub const DEVICE_PASSWORD: &str = "hashed_device_password";

    /// Door selector (always 1; the relay is picked by locknumber)
    pub const DOOR: u8 = 1;
}

/// Door-open command identifier
pub const OPEN_DOOR_COMMAND: &str = "set.device.opendoor";

/// Timeout for the session refresh call
pub const AUTH_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for login and control calls
pub const CONTROL_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum login attempts when the backend answers with an empty binary body
pub const MAX_LOGIN_ATTEMPTS: usize = 3;

/// Pause between login retries
pub const LOGIN_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Cadence of the periodic cookie refresh
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30 * 60);
