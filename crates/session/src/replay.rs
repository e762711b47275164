use super::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// One paced pass over a registry snapshot.
///
/// Works from its own copy of the records, so a setup that clears the
/// registry mid-replay does not disturb it. There is no cancellation:
/// once spawned, every record is sent.
pub struct Replay {
    kind: Kind,
    epoch: u64,
    pacing: Duration,
    records: Vec<ActionRecord>,
    session: Session,
    transport: Arc<dyn Transport>,
}

impl Replay {
    pub fn new(
        kind: Kind,
        epoch: u64,
        pacing: Duration,
        records: Vec<ActionRecord>,
        session: Session,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            kind,
            epoch,
            pacing,
            records,
            session,
            transport,
        }
    }
    /// Runs the replay in its own task. Resolves to the number of records sent.
    pub fn spawn(self) -> JoinHandle<usize> {
        tokio::spawn(self.run())
    }
    async fn run(self) -> usize {
        let total = self.records.len();
        log::debug!("[replay {}] sending {} records", self.kind, total);
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.pacing).await;
            }
            self.transport.send(self.kind, record.payload().clone()).await;
            log::info!("[replay {}] sent {} ({}/{})", self.kind, record, i + 1, total);
        }
        let epoch = self.epoch;
        match self.session.with_lock(|s| s.settle(epoch)).await {
            true => log::info!("[replay {}] all {} records sent", self.kind, total),
            false => log::debug!("[replay {}] finished after mode changed", self.kind),
        }
        total
    }
}
