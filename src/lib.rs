//! easydice: capture dice throws during a setup window, replay them on
//! demand at a human pace, and name the hand the peer rolls back.
//!
//! - [`ezd_core`] — Type aliases, protocol constants, logging bootstrap
//! - [`ezd_hand`] — Poker-style classification of decoded values
//! - [`ezd_session`] — The capture/replay engine
//! - [`console`] — Line-oriented stdin harness and stdout transport
#[cfg(feature = "server")]
pub mod cli;
#[cfg(feature = "server")]
pub mod console;

#[cfg(feature = "server")]
pub use cli::*;
#[cfg(feature = "server")]
pub use console::*;
pub use ezd_core::*;
pub use ezd_hand::*;
pub use ezd_session::*;
