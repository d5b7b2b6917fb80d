//! # Debugging Support
//!
//! Structured logging for the swap terminal, configured from the environment.
//!
//! - **[`config`]**: `DebugConfig` read from `RUST_LOG`, `SWAP_LOG_DIR`, `SWAP_DEBUG_REALTIME`
//! - **[`logger`]**: `tracing-subscriber` registry writing to daily-rotated files

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

/// Initialize the debugging system
///
/// Call this at application startup, before any other operations.
pub fn init() {
    init_logger();
}
