//! Integration entry point

use std::sync::Arc;

use tracing::info;

use g2call_core::constants::REFRESH_INTERVAL;
use g2call_transport::CloudTransport;
use g2call_types::{Credentials, LockChannel};

use crate::error::Result;
use crate::host::{EntityRegistry, Notifier, PeriodicRunner};
use crate::lock::LockController;
use crate::manager::SessionManager;

/// Initialize the integration for one configuration entry
///
/// Runs the startup sequence (session refresh, login, device discovery),
/// registers a front and a back lock controller for every discovered
/// device, then schedules the periodic cookie refresh with the host
/// runner. The first failing step aborts setup and propagates.
///
/// Returns the session manager so the host can drive ad-hoc refreshes.
pub async fn setup(
    credentials: Credentials,
    transport: Arc<dyn CloudTransport>,
    runner: &dyn PeriodicRunner,
    registry: &dyn EntityRegistry,
    notifier: Arc<dyn Notifier>,
) -> Result<Arc<SessionManager>> {
    let manager = Arc::new(SessionManager::new(
        credentials,
        transport.clone(),
        notifier.clone(),
    ));
    manager.initialize().await?;

    let session = manager.session();
    let device_ids = session.device_ids();

    for device_id in &device_ids {
        for channel in LockChannel::ALL {
            registry.register(LockController::new(
                session.clone(),
                transport.clone(),
                notifier.clone(),
                device_id.clone(),
                channel,
            ));
        }
    }

    info!(
        "registered {} lock entities for {} devices",
        device_ids.len() * LockChannel::ALL.len(),
        device_ids.len()
    );

    runner.schedule(REFRESH_INTERVAL, manager.clone());

    Ok(manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::testutil::{
        cookie_response, response, RecordingNotifier, RecordingRegistry, RecordingRunner,
        ScriptedTransport,
    };

    fn happy_script() -> Vec<g2call_transport::Result<g2call_transport::CloudResponse>> {
        vec![
            cookie_response(200, Some("SESSION-OK")),
            response(200, "application/json", br#"{"token": "jwt-ok"}"#),
            response(
                200,
                "application/json",
                br#"{"content":{"main-devlist":[{"deviceId":"D1"},{"deviceId":"D2"}]}}"#,
            ),
        ]
    }

    #[tokio::test]
    async fn test_setup_registers_two_locks_per_device() {
        let transport = Arc::new(ScriptedTransport::new(happy_script()));
        let runner = RecordingRunner::default();
        let registry = RecordingRegistry::default();
        let notifier = Arc::new(RecordingNotifier::default());
        let credentials = Credentials::new("alice@example.com", "s3cret").unwrap();

        let manager = setup(credentials, transport, &runner, &registry, notifier)
            .await
            .unwrap();

        assert_eq!(registry.count(), 4);
        assert_eq!(
            registry.names(),
            vec![
                "D1 - Front Door".to_string(),
                "D1 - Back Door".to_string(),
                "D2 - Front Door".to_string(),
                "D2 - Back Door".to_string(),
            ]
        );
        assert_eq!(runner.intervals(), vec![REFRESH_INTERVAL]);
        assert_eq!(
            manager.session().device_ids(),
            vec!["D1".to_string(), "D2".to_string()]
        );
    }

    #[tokio::test]
    async fn test_setup_aborts_on_refresh_failure() {
        let transport = Arc::new(ScriptedTransport::new(vec![cookie_response(503, None)]));
        let runner = RecordingRunner::default();
        let registry = RecordingRegistry::default();
        let notifier = Arc::new(RecordingNotifier::default());
        let credentials = Credentials::new("alice@example.com", "s3cret").unwrap();

        let result = setup(credentials, transport, &runner, &registry, notifier).await;

        assert!(result.is_err());
        assert_eq!(registry.count(), 0);
        assert!(runner.intervals().is_empty());
    }
}
