use super::*;
use ezd_core::Dice;
use std::collections::BTreeSet;

/// Reasons a captured action is not appended.
/// Neither is an error worth surfacing; both are logged and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    Inactive(Mode),
    CapacityExceeded(Kind),
}

impl std::fmt::Display for CaptureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inactive(mode) => write!(f, "not capturing while {}", mode),
            Self::CapacityExceeded(kind) => write!(f, "{} registry is full", kind),
        }
    }
}

impl std::error::Error for CaptureError {}

/// Ordered, bounded record of captured actions for each kind.
/// Insertion order is detection order is replay order.
#[derive(Debug, Clone)]
pub struct Registry {
    capacity: usize,
    throws: Vec<ActionRecord>,
    retracts: Vec<ActionRecord>,
}

impl Registry {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            throws: Vec::with_capacity(capacity),
            retracts: Vec::with_capacity(capacity),
        }
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn records(&self, kind: Kind) -> &[ActionRecord] {
        match kind {
            Kind::Throw => &self.throws,
            Kind::Retract => &self.retracts,
        }
    }
    pub fn len(&self, kind: Kind) -> usize {
        self.records(kind).len()
    }
    pub fn is_empty(&self) -> bool {
        self.throws.is_empty() && self.retracts.is_empty()
    }
    /// Appends a record unless the kind is already at capacity.
    pub fn push(&mut self, kind: Kind, record: ActionRecord) -> Result<usize, CaptureError> {
        let capacity = self.capacity;
        let records = match kind {
            Kind::Throw => &mut self.throws,
            Kind::Retract => &mut self.retracts,
        };
        if records.len() >= capacity {
            return Err(CaptureError::CapacityExceeded(kind));
        }
        records.push(record);
        Ok(records.len())
    }
    /// Owned copy of one kind's records for a replay to walk without the lock.
    pub fn snapshot(&self, kind: Kind) -> Vec<ActionRecord> {
        self.records(kind).to_vec()
    }
    /// Whether a dice was thrown during setup.
    pub fn contains(&self, dice: Dice) -> bool {
        self.throws.iter().any(|r| r.dice() == dice)
    }
    /// Distinct thrown dice; a roll resolves once each has a value.
    pub fn thrown(&self) -> BTreeSet<Dice> {
        self.throws.iter().map(ActionRecord::dice).collect()
    }
    pub fn clear(&mut self) {
        self.throws.clear();
        self.retracts.clear();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(ezd_core::REGISTRY_CAPACITY)
    }
}
