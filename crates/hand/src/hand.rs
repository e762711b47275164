use super::evaluator::Evaluator;
use super::ranking::Ranking;
use ezd_core::Pips;
use std::collections::BTreeMap;

/// An unordered roll of dice.
///
/// Stored as face value → multiplicity, so two rolls holding the same
/// values in a different order are the same Hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand(BTreeMap<Pips, usize>);

impl Hand {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn add(mut self, pips: Pips) -> Self {
        *self.0.entry(pips).or_default() += 1;
        self
    }
    /// Total number of dice in the roll.
    pub fn size(&self) -> usize {
        self.0.values().sum()
    }
    /// Number of distinct face values.
    pub fn distinct(&self) -> usize {
        self.0.len()
    }
    /// Multiplicities sorted from most to least frequent.
    pub fn profile(&self) -> Vec<usize> {
        let mut counts = self.0.values().copied().collect::<Vec<_>>();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts
    }
    pub fn ranking(&self) -> Ranking {
        Evaluator::from(self).find_ranking()
    }
}

impl FromIterator<Pips> for Hand {
    fn from_iter<I: IntoIterator<Item = Pips>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::add)
    }
}

impl From<&[Pips]> for Hand {
    fn from(values: &[Pips]) -> Self {
        values.iter().copied().collect()
    }
}

impl From<Vec<Pips>> for Hand {
    fn from(values: Vec<Pips>) -> Self {
        values.into_iter().collect()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let faces = self
            .0
            .iter()
            .flat_map(|(pips, n)| std::iter::repeat_n(pips, *n))
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{}]", faces)
    }
}
