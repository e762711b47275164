use super::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Switches the session between setup, replay and retract.
///
/// Replay and retract only hold the lock long enough to flip the mode and
/// snapshot the registry; the paced sends happen in a spawned task and the
/// caller gets its handle back immediately.
#[derive(Clone)]
pub struct Controller {
    session: Session,
    transport: Arc<dyn Transport>,
    pacing: Duration,
    synthesize: bool,
}

impl Controller {
    pub fn new(session: Session, transport: Arc<dyn Transport>, config: &Config) -> Self {
        Self {
            session,
            transport,
            pacing: config.pacing,
            synthesize: config.synthesize_retracts,
        }
    }
    /// Opens the setup window and clears everything captured or decoded.
    /// Captures already queued land after the clear if they reach the lock after it.
    pub async fn enter_setup(&self) {
        self.session.with_lock(State::setup).await;
        log::info!("[controller] setup started, all saved actions reset");
    }
    /// Replays captured throws.
    pub async fn begin_replay(&self) -> JoinHandle<usize> {
        self.begin(Kind::Throw).await
    }
    /// Replays captured retracts.
    pub async fn begin_retract(&self) -> JoinHandle<usize> {
        self.begin(Kind::Retract).await
    }
    async fn begin(&self, kind: Kind) -> JoinHandle<usize> {
        let synthesize = self.synthesize;
        let (epoch, records) = self
            .session
            .with_lock(|s| s.begin(kind, synthesize))
            .await;
        log::info!("[controller] {} replay started with {} records", kind, records.len());
        Replay::new(
            kind,
            epoch,
            self.pacing,
            records,
            self.session.clone(),
            self.transport.clone(),
        )
        .spawn()
    }
}
