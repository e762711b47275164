use super::*;
use bytes::Bytes;
use tokio::sync::mpsc::*;

/// Consumer for one kind of outbound action.
///
/// The interception layer pushes raw payloads into a bounded queue; this
/// loop drains it for the life of the process and appends whatever
/// arrives during the setup window to the registry.
///
/// - Unparseable payloads are logged and dropped
/// - Payloads outside the setup window are dropped silently
/// - Payloads past registry capacity are dropped
pub struct Capture {
    kind: Kind,
    session: Session,
    protocol: Protocol,
}

impl Capture {
    pub fn new(kind: Kind, session: Session, protocol: Protocol) -> Self {
        Self {
            kind,
            session,
            protocol,
        }
    }
    /// Starts the consumer loop and hands back the producer end of its queue.
    /// A full queue makes `send` wait rather than lose the event.
    pub fn spawn(self, depth: usize) -> Sender<Bytes> {
        let (tx, rx) = channel(depth.max(1));
        tokio::spawn(self.run(rx));
        tx
    }
    async fn run(self, mut getter: Receiver<Bytes>) {
        log::debug!("[capture {}] listening", self.kind);
        while let Some(payload) = getter.recv().await {
            self.ingest(payload).await;
        }
        log::info!("[capture {}] queue closed", self.kind);
    }
    /// Handles one raw payload. Returns the registry length after a successful append.
    pub async fn ingest(&self, payload: Bytes) -> Option<usize> {
        let dice = match self.protocol.identify(self.kind, &payload) {
            Ok(dice) => dice,
            Err(e) => {
                log::warn!("[capture {}] discarding payload: {}", self.kind, e);
                return None;
            }
        };
        let kind = self.kind;
        let record = ActionRecord::new(dice, payload);
        match self.session.with_lock(|s| s.capture(kind, record)).await {
            Ok(n) => {
                log::info!("[capture {}] dice {} captured ({})", kind, dice, n);
                Some(n)
            }
            Err(e @ CaptureError::Inactive(_)) => {
                log::trace!("[capture {}] dice {} ignored: {}", kind, dice, e);
                None
            }
            Err(e @ CaptureError::CapacityExceeded(_)) => {
                log::debug!("[capture {}] dice {} dropped: {}", kind, dice, e);
                None
            }
        }
    }
}
