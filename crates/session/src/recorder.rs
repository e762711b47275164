//! Recording transport for tests.
use super::*;
use bytes::Bytes;
use std::sync::Mutex;
use tokio::time::Instant;

/// Transport that remembers every send and message, with the virtual
/// time it happened at.
#[derive(Debug, Default)]
pub struct Recorder {
    sent: Mutex<Vec<(Instant, Kind, Bytes)>>,
    said: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn sent(&self) -> Vec<(Instant, Kind, Bytes)> {
        self.sent.lock().unwrap().clone()
    }
    pub fn payloads(&self) -> Vec<Bytes> {
        self.sent().into_iter().map(|(_, _, p)| p).collect()
    }
    pub fn said(&self) -> Vec<String> {
        self.said.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for Recorder {
    async fn send(&self, kind: Kind, payload: Bytes) {
        self.sent.lock().unwrap().push((Instant::now(), kind, payload));
    }
    async fn message(&self, text: String) {
        self.said.lock().unwrap().push(text);
    }
}

/// Lets every spawned task run until the runtime goes idle.
/// Requires a paused clock: the sleep only resolves once nothing else can make progress.
pub async fn drain() {
    tokio::time::sleep(std::time::Duration::from_millis(1)).await;
}
