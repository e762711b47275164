use bytes::Bytes;

/// Inbound events, already demultiplexed by the interception layer.
#[derive(Clone, Debug)]
pub enum Event {
    /// The client threw a dice.
    Throw(Bytes),
    /// The client turned a dice off.
    Retract(Bytes),
    /// The peer reported a dice value.
    Result(Bytes),
    /// The client is about to send a chat line.
    Chat(String),
}

/// What the interception layer should do with the original event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Let it through unchanged.
    Pass,
    /// Suppress it; the engine consumed it.
    Block,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Throw(p) => write!(f, "throw {:?}", p),
            Event::Retract(p) => write!(f, "retract {:?}", p),
            Event::Result(p) => write!(f, "result {:?}", p),
            Event::Chat(text) => write!(f, "chat {:?}", text),
        }
    }
}
