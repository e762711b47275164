use ezd_core::*;

/// A chat command recognized as an instruction to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Open the setup window.
    Setup,
    /// Replay captured throws.
    Roll,
    /// Replay captured retracts.
    Close,
}

impl Trigger {
    /// Finds a trigger phrase anywhere in an outgoing chat line.
    /// When several appear, close wins over setup, and setup over roll.
    pub fn recognize(text: &str) -> Option<Self> {
        [
            (TRIGGER_CLOSE, Trigger::Close),
            (TRIGGER_SETUP, Trigger::Setup),
            (TRIGGER_ROLL, Trigger::Roll),
        ]
        .into_iter()
        .find(|(phrase, _)| text.contains(phrase))
        .map(|(_, trigger)| trigger)
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Trigger::Setup => write!(f, "{}", TRIGGER_SETUP),
            Trigger::Roll => write!(f, "{}", TRIGGER_ROLL),
            Trigger::Close => write!(f, "{}", TRIGGER_CLOSE),
        }
    }
}
