/// A roll's best combination.
///
/// Ordered from weakest to strongest. Straights are not recognized.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Ranking {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOAK,
    FullHouse,
    FourOAK,
    FiveOAK,
}

impl Ranking {
    /// Chat label announced once a replayed roll has fully resolved.
    pub fn label(&self) -> &'static str {
        match self {
            Ranking::HighCard => "High card",
            Ranking::OnePair => "One pair",
            Ranking::TwoPair => "Two pair",
            Ranking::ThreeOAK => "Three of a kind",
            Ranking::FullHouse => "Full house",
            Ranking::FourOAK => "Four of a kind",
            Ranking::FiveOAK => "Five of a kind",
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
