//! Core type aliases and protocol constants for easydice.
//!
//! This crate provides the foundational types and wire parameters
//! shared by the classifier and the session engine.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Dice identifier as it appears on the wire.
pub type Dice = i64;
/// Decoded face value of a dice (1–6 in practice, never assumed).
pub type Pips = i64;

// ============================================================================
// SESSION LIMITS
// ============================================================================
/// Maximum captured actions per kind.
pub const REGISTRY_CAPACITY: usize = 5;
/// Pending raw events per ingestion queue before producers block.
pub const QUEUE_CAPACITY: usize = 5;

// ============================================================================
// WIRE PROTOCOL
// ============================================================================
/// Delay between consecutive replayed sends (milliseconds).
pub const REPLAY_PACING_MS: u64 = 500;
/// Affine obfuscation factor: raw = pips + dice * factor.
pub const OBFUSCATION_FACTOR: i64 = 38;
/// Raw value of an acknowledgement-only result event.
pub const ACK_SENTINEL: i64 = 0;
/// Width of the tag prefixing throw payloads in tagged protocol revisions.
pub const THROW_TAG_WIDTH: usize = 2;

// ============================================================================
// TRIGGER PHRASES
// ============================================================================
/// Chat phrase that opens the setup window.
pub const TRIGGER_SETUP: &str = ":setup";
/// Chat phrase that replays captured throws.
pub const TRIGGER_ROLL: &str = ":roll";
/// Chat phrase that replays captured retracts.
pub const TRIGGER_CLOSE: &str = ":close";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
/// There is nothing to flush: the session lives only in memory.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("interrupt received, exiting");
            std::process::exit(0);
        }
    });
}
