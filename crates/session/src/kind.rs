/// The two outbound dice commands the engine captures and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Throw a dice.
    Throw,
    /// Turn a dice off.
    Retract,
}

impl Kind {
    pub fn all() -> [Kind; 2] {
        [Kind::Throw, Kind::Retract]
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Kind::Throw => write!(f, "throw"),
            Kind::Retract => write!(f, "retract"),
        }
    }
}
