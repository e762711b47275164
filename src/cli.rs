//! Command-line options for the console harness.
use clap::Parser;
use ezd_core::*;
use ezd_session::*;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "easydice", about = "Roll and reset dice for you")]
pub struct Args {
    /// Delay between replayed sends, in milliseconds.
    #[arg(long, default_value_t = REPLAY_PACING_MS)]
    pub pacing: u64,
    /// Maximum dice captured per action kind.
    #[arg(long, default_value_t = REGISTRY_CAPACITY)]
    pub capacity: usize,
    /// Throw payloads carry a two-byte tag before the dice id.
    #[arg(long)]
    pub tagged: bool,
    /// On close, turn off every thrown dice when none were turned off during setup.
    #[arg(long)]
    pub synthesize_retracts: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            capacity: args.capacity,
            pacing: Duration::from_millis(args.pacing),
            revision: match args.tagged {
                true => Revision::Tagged,
                false => Revision::Plain,
            },
            synthesize_retracts: args.synthesize_retracts,
            ..Config::default()
        }
    }
}
