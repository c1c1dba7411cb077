//! Host platform capabilities
//!
//! The integration runs embedded in a home-automation host but never talks
//! to a concrete one. Three narrow capabilities cover everything it needs:
//! periodic scheduling, entity registration and user-visible notifications.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::lock::LockController;

/// Title used for every error notification
pub const NOTIFICATION_TITLE: &str = "Golmar Integration Error";

/// A unit of work the host scheduler runs on a fixed cadence
#[async_trait]
pub trait PeriodicJob: Send + Sync {
    /// Job name for logs
    fn name(&self) -> &str;

    /// Run one cycle
    async fn run(&self) -> Result<()>;
}

/// Scheduling capability supplied by the host
pub trait PeriodicRunner: Send + Sync {
    /// Run `job` every `interval` until the host shuts down
    fn schedule(&self, interval: Duration, job: Arc<dyn PeriodicJob>);
}

/// Entity lifecycle capability supplied by the host
pub trait EntityRegistry: Send + Sync {
    /// Hand a newly created lock entity over to the host
    fn register(&self, lock: LockController);
}

/// User-visible notification capability supplied by the host
pub trait Notifier: Send + Sync {
    /// Raise a persistent notification
    fn notify(&self, title: &str, message: &str);
}

/// Tokio-backed runner for hosts without a scheduler of their own
///
/// A failing cycle is logged and the cadence keeps going; a broken refresh
/// is a degraded state, not a shutdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRunner;

impl PeriodicRunner for TokioRunner {
    fn schedule(&self, interval: Duration, job: Arc<dyn PeriodicJob>) {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            // the first tick completes immediately; the job already ran at setup
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if let Err(error) = job.run().await {
                    warn!("periodic job '{}' failed: {error}", job.name());
                }
            }
        });
    }
}
