//! Capture, paced replay, and result decoding for a dice session.
//!
//! During a setup window the engine records the dice a user throws and
//! turns off. On command it replays those actions at a human pace, and
//! it decodes the values the peer reports back into a poker-style hand.
//!
//! ## Architecture
//!
//! - [`Session`] — The one shared state, behind one lock
//! - [`Capture`] — Bounded-queue consumer per action kind
//! - [`Controller`] — Mode switches: setup, replay, retract
//! - [`Replay`] — Paced resend of a registry snapshot
//! - [`Decoder`] — Result decoding, tallying, and classification
//! - [`Engine`] — Wires the above together behind [`Engine::dispatch`]
//!
//! ## Collaborators
//!
//! - [`Transport`] — Outbound sends and chat messages
//! - [`Event`] — Inbound events from the interception layer
//! - [`Trigger`] — Chat phrases that drive the controller
mod capture;
mod config;
mod controller;
mod decoder;
mod engine;
mod event;
mod kind;
mod mode;
mod protocol;
mod record;
mod registry;
mod replay;
mod session;
mod state;
mod transport;
mod trigger;

#[cfg(test)]
mod recorder;

pub use capture::*;
pub use config::*;
pub use controller::*;
pub use decoder::*;
pub use engine::*;
pub use event::*;
pub use kind::*;
pub use mode::*;
pub use protocol::*;
pub use record::*;
pub use registry::*;
pub use replay::*;
pub use session::*;
pub use state::*;
pub use transport::*;
pub use trigger::*;
