//! Poker-style classification of a roll of dice.
//!
//! ## Core Types
//!
//! - [`Hand`] — Multiset of decoded dice values
//! - [`Evaluator`] — Searches a hand's multiplicities for the best combination
//! - [`Ranking`] — The resulting combination, displayed as a chat label
mod evaluator;
mod hand;
mod ranking;

pub use evaluator::*;
pub use hand::*;
pub use ranking::*;
