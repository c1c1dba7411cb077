//! # g2call
//!
//! Rust client for the Golmar G2Call+ cloud intercom service.
//!
//! ## Features
//!
//! - Session negotiation against the fixed vendor endpoints
//! - Periodic transport-cookie refresh via a host-supplied scheduler
//! - Device discovery and one lock controller per door relay
//! - Async/await API using Tokio
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use g2call::{Credentials, HttpsTransport, Notifier, SessionManager};
//!
//! struct StderrNotifier;
//!
//! impl Notifier for StderrNotifier {
//!     fn notify(&self, title: &str, message: &str) {
//!         eprintln!("{title}: {message}");
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> g2call::Result<()> {
//!     let credentials = Credentials::new("user@example.com", "secret")?;
//!     let transport = Arc::new(HttpsTransport::new()?);
//!
//!     let manager = SessionManager::new(credentials, transport, Arc::new(StderrNotifier));
//!     manager.initialize().await?;
//!
//!     println!("devices: {:?}", manager.session().device_ids());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod host;
pub mod lock;
pub mod manager;
pub mod setup;

#[cfg(test)]
pub(crate) mod testutil;

// Re-exports
pub use error::{Error, Result};
pub use host::{EntityRegistry, Notifier, PeriodicJob, PeriodicRunner, TokioRunner};
pub use lock::LockController;
pub use manager::SessionManager;
pub use setup::setup;

// Re-export types
pub use g2call_core::Session;
pub use g2call_transport::{CloudTransport, HttpsTransport};
pub use g2call_types::{Credentials, LockChannel};
