//! Lock channel definitions

use std::fmt;

use crate::error::{Error, Result};

/// Door relay channel on an intercom unit
///
/// Every device exposes the same fixed pair of relays; the wire protocol
/// addresses them by number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LockChannel {
    Front = 1,
    Back = 2,
}

impl LockChannel {
    /// Both channels, in relay order
    pub const ALL: [LockChannel; 2] = [LockChannel::Front, LockChannel::Back];

    /// Relay number as sent on the wire
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Human-readable door name, used when building entity display names
    pub fn door_name(self) -> &'static str {
        match self {
            LockChannel::Front => "Front Door",
            LockChannel::Back => "Back Door",
        }
    }

    /// Parse a relay number
    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1 => Ok(LockChannel::Front),
            2 => Ok(LockChannel::Back),
            other => Err(Error::UnknownChannel(other)),
        }
    }
}

impl fmt::Display for LockChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.door_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_numbers() {
        assert_eq!(LockChannel::Front.number(), 1);
        assert_eq!(LockChannel::Back.number(), 2);
    }

    #[test]
    fn test_from_number() {
        assert_eq!(LockChannel::from_number(1).unwrap(), LockChannel::Front);
        assert_eq!(LockChannel::from_number(2).unwrap(), LockChannel::Back);
        assert!(LockChannel::from_number(3).is_err());
    }

    #[test]
    fn test_door_names() {
        assert_eq!(LockChannel::Front.to_string(), "Front Door");
        assert_eq!(LockChannel::Back.to_string(), "Back Door");
    }
}
