use super::hand::Hand;
use super::ranking::Ranking;

/// A lazy evaluator for a roll's combination.
///
/// Works only on the multiplicity profile, so any roll size is accepted:
/// a roll where every face is distinct is a HighCard whether it holds
/// three dice or five.
pub struct Evaluator(Vec<usize>);
impl From<&Hand> for Evaluator {
    fn from(h: &Hand) -> Self {
        Self(h.profile())
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_5_oak())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or(Ranking::HighCard)
    }

    fn find_5_oak(&self) -> Option<Ranking> {
        (self.nth(0) >= 5).then_some(Ranking::FiveOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        (self.nth(0) == 4).then_some(Ranking::FourOAK)
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        (self.nth(0) == 3 && self.nth(1) >= 2).then_some(Ranking::FullHouse)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        (self.nth(0) == 3).then_some(Ranking::ThreeOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        (self.nth(0) == 2 && self.nth(1) == 2).then_some(Ranking::TwoPair)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        (self.nth(0) == 2).then_some(Ranking::OnePair)
    }
    /// Multiplicity of the i-th most frequent face, zero past the end.
    fn nth(&self, i: usize) -> usize {
        self.0.get(i).copied().unwrap_or(0)
    }
}
