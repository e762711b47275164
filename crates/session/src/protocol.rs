use super::*;
use ezd_core::*;

/// Errors raised while reading an inbound payload.
/// Always recoverable: the event is logged and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    NotText,
    MissingField(&'static str),
    NotNumeric(&'static str, String),
    Overflow(Dice, i64),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotText => write!(f, "payload is not ascii text"),
            Self::MissingField(field) => write!(f, "missing {}", field),
            Self::NotNumeric(field, s) => write!(f, "{} is not numeric: {:?}", field, s),
            Self::Overflow(dice, raw) => write!(f, "value {} overflows for dice {}", raw, dice),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Reads dice payloads and undoes the result obfuscation.
/// Centralizes the wire format so capture and decoding agree on it.
#[derive(Debug, Clone, Copy)]
pub struct Protocol {
    revision: Revision,
    factor: i64,
}

impl From<&Config> for Protocol {
    fn from(config: &Config) -> Self {
        Self {
            revision: config.revision,
            factor: config.factor,
        }
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl Protocol {
    /// Extracts the dice id from a captured outbound action.
    pub fn identify(&self, kind: Kind, payload: &[u8]) -> Result<Dice, ProtocolError> {
        let text = Self::text(payload)?;
        let text = match (kind, self.revision) {
            (Kind::Throw, Revision::Tagged) => text
                .get(THROW_TAG_WIDTH..)
                .ok_or(ProtocolError::MissingField("dice id"))?,
            _ => text,
        };
        Self::integer("dice id", text.trim())
    }
    /// Splits a result payload into dice id and raw (obfuscated) value.
    pub fn result(&self, payload: &[u8]) -> Result<(Dice, i64), ProtocolError> {
        let mut fields = Self::text(payload)?.split_whitespace();
        let dice = fields
            .next()
            .ok_or(ProtocolError::MissingField("dice id"))
            .and_then(|s| Self::integer("dice id", s))?;
        let raw = fields
            .next()
            .ok_or(ProtocolError::MissingField("value"))
            .and_then(|s| Self::integer("value", s))?;
        Ok((dice, raw))
    }
    /// Recovers the face value: raw - dice * factor.
    pub fn decode(&self, dice: Dice, raw: i64) -> Result<Pips, ProtocolError> {
        dice.checked_mul(self.factor)
            .and_then(|offset| raw.checked_sub(offset))
            .ok_or(ProtocolError::Overflow(dice, raw))
    }
    /// Inverse of decode; what the peer puts on the wire.
    pub fn encode(&self, dice: Dice, pips: Pips) -> i64 {
        pips + dice * self.factor
    }

    fn text(payload: &[u8]) -> Result<&str, ProtocolError> {
        std::str::from_utf8(payload)
            .ok()
            .filter(|s| s.is_ascii())
            .ok_or(ProtocolError::NotText)
    }
    fn integer(field: &'static str, s: &str) -> Result<i64, ProtocolError> {
        match s {
            "" => Err(ProtocolError::MissingField(field)),
            s => s
                .parse()
                .map_err(|_| ProtocolError::NotNumeric(field, s.to_string())),
        }
    }
}
