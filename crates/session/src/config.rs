use ezd_core::*;
use std::time::Duration;

/// Wire layout of throw payloads, which changed between client releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Revision {
    /// Payload is the bare decimal dice id.
    #[default]
    Plain,
    /// Payload carries a fixed-width tag before the dice id.
    Tagged,
}

/// Tunables for a session engine.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Maximum captured actions per kind.
    pub capacity: usize,
    /// Ingestion queue depth per kind.
    pub queue: usize,
    /// Delay between replayed sends.
    pub pacing: Duration,
    /// De-obfuscation factor applied to result values.
    pub factor: i64,
    /// Raw result value marking an acknowledgement-only event.
    pub sentinel: i64,
    /// Throw payload layout.
    pub revision: Revision,
    /// Retract every thrown dice when no retracts were captured.
    pub synthesize_retracts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: REGISTRY_CAPACITY,
            queue: QUEUE_CAPACITY,
            pacing: Duration::from_millis(REPLAY_PACING_MS),
            factor: OBFUSCATION_FACTOR,
            sentinel: ACK_SENTINEL,
            revision: Revision::default(),
            synthesize_retracts: false,
        }
    }
}
