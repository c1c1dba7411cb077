//! # g2call-core
//!
//! Protocol layer for the Golmar G2Call+ cloud service.
//!
//! This crate provides the I/O-free protocol pieces:
//! - Fixed endpoint and header constants
//! - Login envelope construction and token extraction
//! - Login reply classification
//! - Control-endpoint payloads and response parsing
//! - Shared session state

pub mod command;
pub mod constants;
pub mod envelope;
pub mod error;
pub mod reply;
pub mod session;

pub use command::{CommandResult, OpenDoorRequest};
pub use error::{Error, Result};
pub use reply::LoginReply;
pub use session::Session;
