//! easydice Console Binary
//!
//! Drives the capture/replay engine from stdin, one event per line,
//! and prints outbound actions and hand labels to stdout.

use clap::Parser;
use easydice::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let config = Config::from(Args::parse());
    log::info!("extension initialized with {:?}", config);
    let engine = Engine::new(config, Arc::new(Console));
    Console::run(&engine).await?;
    log::info!("input closed");
    Ok(())
}
