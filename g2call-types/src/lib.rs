//! Type definitions for g2call

pub mod credentials;
pub mod error;
pub mod lock;

pub use credentials::Credentials;
pub use error::{Error, Result};
pub use lock::LockChannel;
