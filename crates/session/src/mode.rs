/// What the session is currently doing.
/// Only `Setup` accepts captured actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Setup,
    Replaying,
    Retracting,
}

impl Mode {
    pub fn is_capturing(&self) -> bool {
        matches!(self, Mode::Setup)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Mode::Idle => write!(f, "idle"),
            Mode::Setup => write!(f, "setup"),
            Mode::Replaying => write!(f, "replaying"),
            Mode::Retracting => write!(f, "retracting"),
        }
    }
}
