use super::*;
use ezd_hand::Ranking;
use std::sync::Arc;

/// Turns inbound result events into a classified roll.
///
/// Each event carries a dice id and an obfuscated value. Values for dice
/// thrown during setup accumulate until every thrown dice has one; the
/// roll is then classified, announced, and the tally starts over.
#[derive(Clone)]
pub struct Decoder {
    session: Session,
    protocol: Protocol,
    sentinel: i64,
    transport: Arc<dyn Transport>,
}

impl Decoder {
    pub fn new(session: Session, transport: Arc<dyn Transport>, config: &Config) -> Self {
        Self {
            session,
            protocol: Protocol::from(config),
            sentinel: config.sentinel,
            transport,
        }
    }
    /// Handles one result payload.
    /// Returns the ranking when this event completed the roll.
    pub async fn on_result(&self, payload: &[u8]) -> Result<Option<Ranking>, ProtocolError> {
        let (dice, raw) = self
            .protocol
            .result(payload)
            .inspect_err(|e| log::warn!("[decoder] discarding result: {}", e))?;
        if raw == self.sentinel {
            log::trace!("[decoder] dice {} acknowledged", dice);
            return Ok(None);
        }
        let pips = self
            .protocol
            .decode(dice, raw)
            .inspect_err(|e| log::warn!("[decoder] discarding result: {}", e))?;
        match self.session.with_lock(|s| s.record(dice, pips)).await {
            Tally::Inactive(mode) => {
                log::trace!("[decoder] dice {} not tallied while {}", dice, mode);
                Ok(None)
            }
            Tally::Unknown(dice) => {
                log::debug!("[decoder] dice {} was not thrown during setup", dice);
                Ok(None)
            }
            Tally::Pending(n) => {
                log::debug!("[decoder] dice {} shows {}, {} to go", dice, pips, n);
                Ok(None)
            }
            Tally::Complete(hand) => {
                let ranking = hand.ranking();
                log::info!("[decoder] roll {} is {}", hand, ranking);
                self.transport.message(ranking.to_string()).await;
                Ok(Some(ranking))
            }
        }
    }
}
