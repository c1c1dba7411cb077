//! Scripted doubles for exercising the integration without a network

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use g2call_transport::{
    CloudRequest, CloudResponse, CloudTransport, Error as TransportError,
    Result as TransportResult,
};

use crate::host::{EntityRegistry, Notifier, PeriodicJob, PeriodicRunner};
use crate::lock::LockController;

/// Transport that replays a scripted list of outcomes and records every
/// request it saw. Once the script runs dry it answers with timeouts.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<TransportResult<CloudResponse>>>,
    requests: Mutex<Vec<CloudRequest>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<TransportResult<CloudResponse>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CloudRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CloudTransport for ScriptedTransport {
    async fn post(&self, request: CloudRequest) -> TransportResult<CloudResponse> {
        self.requests.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TransportError::Timeout))
    }
}

/// Scripted 200/err response with a body and content type
pub fn response(
    status: u16,
    content_type: &str,
    body: &[u8],
) -> TransportResult<CloudResponse> {
    Ok(CloudResponse {
        status,
        content_type: content_type.to_string(),
        session_cookie: None,
        body: Bytes::copy_from_slice(body),
    })
}

/// Auth-endpoint style response carrying (or omitting) a session cookie
pub fn cookie_response(status: u16, cookie: Option<&str>) -> TransportResult<CloudResponse> {
    Ok(CloudResponse {
        status,
        content_type: String::new(),
        session_cookie: cookie.map(str::to_string),
        body: Bytes::new(),
    })
}

/// Octet-stream login reply
pub fn binary_response(body: &[u8]) -> TransportResult<CloudResponse> {
    response(200, "application/octet-stream", body)
}

/// Scripted transport-level failure
pub fn transport_error() -> TransportResult<CloudResponse> {
    Err(TransportError::Timeout)
}

/// Notifier that records every notification
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<(String, String)> {
        self.messages.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

/// Registry that collects created lock entities
#[derive(Default)]
pub struct RecordingRegistry {
    locks: Mutex<Vec<LockController>>,
}

impl RecordingRegistry {
    pub fn names(&self) -> Vec<String> {
        self.locks
            .lock()
            .unwrap()
            .iter()
            .map(|lock| lock.name().to_string())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.locks.lock().unwrap().len()
    }
}

impl EntityRegistry for RecordingRegistry {
    fn register(&self, lock: LockController) {
        self.locks.lock().unwrap().push(lock);
    }
}

/// Runner that records scheduled intervals instead of spawning anything
#[derive(Default)]
pub struct RecordingRunner {
    intervals: Mutex<Vec<Duration>>,
}

impl RecordingRunner {
    pub fn intervals(&self) -> Vec<Duration> {
        self.intervals.lock().unwrap().clone()
    }
}

impl PeriodicRunner for RecordingRunner {
    fn schedule(&self, interval: Duration, _job: std::sync::Arc<dyn PeriodicJob>) {
        self.intervals.lock().unwrap().push(interval);
    }
}
