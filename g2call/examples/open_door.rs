//! Door control example
//!
//! Logs in with the credentials from G2CALL_USERNAME / G2CALL_PASSWORD and
//! opens the front door of the first discovered device.

use std::sync::Arc;

use g2call::{Credentials, HttpsTransport, LockChannel, LockController, Notifier, SessionManager};

struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }
}

#[tokio::main]
async fn main() -> g2call::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let username = std::env::var("G2CALL_USERNAME").unwrap_or_else(|_| "user@example.com".into());
    let password = std::env::var("G2CALL_PASSWORD").unwrap_or_else(|_| "password".into());

    let credentials = Credentials::new(username, password)?;
    let transport = Arc::new(HttpsTransport::new()?);
    let notifier = Arc::new(StderrNotifier);

    let manager = SessionManager::new(credentials, transport.clone(), notifier.clone());
    manager.initialize().await?;

    let session = manager.session();
    let device_ids = session.device_ids();
    println!("Discovered devices: {device_ids:?}");

    if let Some(device_id) = device_ids.first() {
        let lock = LockController::new(
            session.clone(),
            transport,
            notifier,
            device_id.clone(),
            LockChannel::Front,
        );

        println!("Opening {}...", lock.name());
        lock.open().await?;
        println!("Done! locked={}", lock.is_locked());
    }

    Ok(())
}
