use bytes::Bytes;
use ezd_core::Dice;

/// One captured outbound action.
/// The payload is kept verbatim so replay can resend it byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    dice: Dice,
    payload: Bytes,
}

impl ActionRecord {
    pub fn new(dice: Dice, payload: Bytes) -> Self {
        Self { dice, payload }
    }
    /// Builds the plain decimal payload for a dice, as the client itself would.
    pub fn synthesize(dice: Dice) -> Self {
        Self::new(dice, Bytes::from(dice.to_string()))
    }
    pub fn dice(&self) -> Dice {
        self.dice
    }
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }
}

impl std::fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "dice {}", self.dice)
    }
}
