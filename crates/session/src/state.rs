use super::*;
use ezd_core::*;
use ezd_hand::Hand;
use std::collections::BTreeMap;

/// Effect of recording one decoded result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tally {
    /// The dice was not thrown during setup.
    Unknown(Dice),
    /// Results are not tallied in this mode.
    Inactive(Mode),
    /// Still waiting on this many thrown dice.
    Pending(usize),
    /// Every thrown dice has a value; the map has been drained into the hand.
    Complete(Hand),
}

/// Everything the session lock protects.
/// Capture, mode changes and result decoding all mutate this, never
/// concurrently; see [`Session::with_lock`].
#[derive(Debug)]
pub struct State {
    mode: Mode,
    epoch: u64,
    registry: Registry,
    results: BTreeMap<Dice, Pips>,
}

impl State {
    pub fn new(capacity: usize) -> Self {
        Self {
            mode: Mode::default(),
            epoch: 0,
            registry: Registry::new(capacity),
            results: BTreeMap::new(),
        }
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    pub fn results(&self) -> &BTreeMap<Dice, Pips> {
        &self.results
    }
}

impl State {
    /// Opens the setup window, discarding everything captured or decoded so far.
    pub fn setup(&mut self) {
        self.transition(Mode::Setup);
        self.registry.clear();
        self.results.clear();
    }
    /// Switches mode and returns the epoch the new mode lives in.
    pub fn transition(&mut self, mode: Mode) -> u64 {
        self.mode = mode;
        self.epoch += 1;
        self.epoch
    }
    /// Returns to Idle if nothing else has changed the mode since `epoch`.
    pub fn settle(&mut self, epoch: u64) -> bool {
        let current = self.epoch == epoch;
        if current {
            self.mode = Mode::Idle;
        }
        current
    }
    /// Appends a captured action if the setup window is open and there is room.
    pub fn capture(&mut self, kind: Kind, record: ActionRecord) -> Result<usize, CaptureError> {
        match self.mode.is_capturing() {
            true => self.registry.push(kind, record),
            false => Err(CaptureError::Inactive(self.mode)),
        }
    }
    /// Starts a replay of one kind: switches mode, drops any partial tally,
    /// and returns the epoch together with the records to send.
    pub fn begin(&mut self, kind: Kind, synthesize: bool) -> (u64, Vec<ActionRecord>) {
        let mode = match kind {
            Kind::Throw => Mode::Replaying,
            Kind::Retract => Mode::Retracting,
        };
        let epoch = self.transition(mode);
        self.results.clear();
        (epoch, self.plan(kind, synthesize))
    }
    /// Records to replay for a kind. Optionally retracts every thrown dice
    /// when no retract was captured.
    pub fn plan(&self, kind: Kind, synthesize: bool) -> Vec<ActionRecord> {
        match kind {
            Kind::Retract if synthesize && self.registry.len(Kind::Retract) == 0 => self
                .registry
                .records(Kind::Throw)
                .iter()
                .map(|r| ActionRecord::synthesize(r.dice()))
                .collect(),
            kind => self.registry.snapshot(kind),
        }
    }
    /// Stores a decoded value for a thrown dice and checks for a full roll.
    /// Hand throws answered during setup are not part of any roll.
    pub fn record(&mut self, dice: Dice, pips: Pips) -> Tally {
        if self.mode.is_capturing() {
            return Tally::Inactive(self.mode);
        }
        if !self.registry.contains(dice) {
            return Tally::Unknown(dice);
        }
        self.results.insert(dice, pips);
        let expected = self.registry.thrown().len();
        match expected.saturating_sub(self.results.len()) {
            0 => Tally::Complete(std::mem::take(&mut self.results).into_values().collect()),
            n => Tally::Pending(n),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(REGISTRY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ezd_hand::Ranking;

    fn armed(dice: &[Dice]) -> State {
        let mut state = State::default();
        state.setup();
        for d in dice {
            state.capture(Kind::Throw, ActionRecord::synthesize(*d)).unwrap();
        }
        state
    }
    fn rolled(dice: &[Dice]) -> State {
        let mut state = armed(dice);
        state.begin(Kind::Throw, false);
        state
    }

    #[test]
    fn capture_requires_setup() {
        let mut state = State::default();
        assert_eq!(
            state.capture(Kind::Throw, ActionRecord::synthesize(1)),
            Err(CaptureError::Inactive(Mode::Idle))
        );
        state.setup();
        assert_eq!(state.capture(Kind::Throw, ActionRecord::synthesize(1)), Ok(1));
        state.transition(Mode::Replaying);
        assert!(state.capture(Kind::Throw, ActionRecord::synthesize(2)).is_err());
        assert_eq!(state.registry().len(Kind::Throw), 1);
    }
    #[test]
    fn setup_always_resets() {
        let mut state = armed(&[10, 11]);
        state.capture(Kind::Retract, ActionRecord::synthesize(10)).unwrap();
        state.begin(Kind::Throw, false);
        state.record(10, 4);
        assert_eq!(state.results().len(), 1);
        state.setup();
        assert_eq!(state.mode(), Mode::Setup);
        assert!(state.registry().is_empty());
        assert!(state.results().is_empty());
        state.setup();
        assert!(state.registry().is_empty());
    }
    #[test]
    fn settle_only_from_current_epoch() {
        let mut state = State::default();
        let epoch = state.transition(Mode::Replaying);
        assert!(state.settle(epoch));
        assert_eq!(state.mode(), Mode::Idle);
        let stale = state.transition(Mode::Replaying);
        state.setup();
        assert!(!state.settle(stale));
        assert_eq!(state.mode(), Mode::Setup);
    }
    #[test]
    fn record_completes_a_full_roll() {
        let mut state = rolled(&[10, 11, 12, 13, 14]);
        assert_eq!(state.record(10, 3), Tally::Pending(4));
        assert_eq!(state.record(11, 3), Tally::Pending(3));
        assert_eq!(state.record(12, 3), Tally::Pending(2));
        assert_eq!(state.record(13, 5), Tally::Pending(1));
        match state.record(14, 6) {
            Tally::Complete(hand) => assert_eq!(hand.ranking(), Ranking::ThreeOAK),
            other => panic!("expected completion, got {:?}", other),
        }
        assert!(state.results().is_empty());
        assert_eq!(state.registry().len(Kind::Throw), 5);
    }
    #[test]
    fn record_completes_a_partial_setup() {
        let mut state = rolled(&[7, 8]);
        assert_eq!(state.record(7, 2), Tally::Pending(1));
        assert!(matches!(state.record(8, 2), Tally::Complete(_)));
    }
    #[test]
    fn repeated_dice_does_not_complete_early() {
        let mut state = rolled(&[1, 2]);
        assert_eq!(state.record(1, 6), Tally::Pending(1));
        assert_eq!(state.record(1, 5), Tally::Pending(1));
        assert_eq!(state.results().get(&1), Some(&5));
    }
    #[test]
    fn unknown_dice_is_ignored() {
        let mut state = rolled(&[1, 2]);
        assert_eq!(state.record(99, 6), Tally::Unknown(99));
        assert!(state.results().is_empty());
        assert_eq!(state.record(1, 6), Tally::Pending(1));
    }
    #[test]
    fn results_are_not_tallied_during_setup() {
        let mut state = armed(&[1]);
        assert_eq!(state.record(1, 6), Tally::Inactive(Mode::Setup));
        assert!(state.results().is_empty());
    }
    #[test]
    fn begin_drops_a_partial_tally() {
        let mut state = rolled(&[1, 2]);
        assert_eq!(state.record(1, 6), Tally::Pending(1));
        let (epoch, plan) = state.begin(Kind::Throw, false);
        assert!(state.results().is_empty());
        assert_eq!(state.mode(), Mode::Replaying);
        assert_eq!(plan.len(), 2);
        assert!(state.settle(epoch));
        assert_eq!(state.record(2, 6), Tally::Pending(1));
    }
    #[test]
    fn plan_synthesizes_retracts_from_throws() {
        let state = armed(&[3, 4]);
        assert!(state.plan(Kind::Retract, false).is_empty());
        let plan = state.plan(Kind::Retract, true);
        assert_eq!(plan, vec![ActionRecord::synthesize(3), ActionRecord::synthesize(4)]);
        assert_eq!(plan[0].payload().as_ref(), b"3");
    }
}
