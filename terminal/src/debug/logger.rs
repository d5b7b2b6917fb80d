//! File-based logging initialization

use super::config::DebugConfig;
use std::fs;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation for the main log
/// - Optional realtime log (truncated on startup, for live monitoring)
/// - Non-blocking writes to prevent UI lag
/// - Panic hook integration for crash logging
///
/// Logs are written to `logs/swap-terminal.log` by default.
pub fn init() {
    let config = DebugConfig::from_env();

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "swap-terminal.log");
    let (non_blocking_main, guard_main) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("swap_terminal=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_main)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    let realtime_path = config.log_dir.join("swap-realtime.log");
    let realtime_file = if config.enable_realtime_log {
        // Truncate on startup for a fresh session
        match fs::File::create(&realtime_path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: Failed to create realtime log file: {}", e);
                None
            }
        }
    } else {
        None
    };

    match realtime_file {
        Some(file) => {
            let (non_blocking_realtime, guard_realtime) = tracing_appender::non_blocking(file);
            let realtime_layer = fmt::layer()
                .with_writer(non_blocking_realtime)
                .with_target(true)
                .with_thread_names(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .pretty();

            if let Err(e) = subscriber.with(realtime_layer).try_init() {
                eprintln!("Warning: Logging already initialized: {}", e);
            }
            // Keep guard alive for the lifetime of the program
            std::mem::forget(guard_realtime);
        }
        None => {
            if let Err(e) = subscriber.try_init() {
                eprintln!("Warning: Logging already initialized: {}", e);
            }
        }
    }

    tracing::info!(
        log_file = %config.log_file.display(),
        log_level = %config.log_level,
        realtime_log = config.enable_realtime_log,
        debug = config.is_debug_enabled(),
        "Logging initialized"
    );

    setup_panic_hook();

    std::mem::forget(guard_main);
}

/// Set up panic hook to log panics with their location
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
