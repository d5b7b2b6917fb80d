//! Debug configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset
const DEFAULT_LOG_LEVEL: &str = "swap_terminal=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DebugConfig {
    /// Log file path
    pub log_file: PathBuf,
    /// Log level filter (e.g., "swap_terminal=debug,info")
    pub log_level: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Mirror the log into a pretty-printed file truncated at startup
    pub enable_realtime_log: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    ///
    /// - `RUST_LOG`: filter directives
    /// - `SWAP_LOG_DIR`: log directory (default `logs`)
    /// - `SWAP_DEBUG_REALTIME`: `1` enables the realtime log
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_dir = lookup("SWAP_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs"));

        Self {
            log_file: log_dir.join("swap-terminal.log"),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_dir,
            enable_realtime_log: lookup("SWAP_DEBUG_REALTIME")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = DebugConfig::default();
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.log_file, PathBuf::from("logs/swap-terminal.log"));
        assert_eq!(config.log_level, "swap_terminal=info,warn");
        assert!(!config.enable_realtime_log);
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_overrides() {
        let vars = HashMap::from([
            ("SWAP_LOG_DIR", "/tmp/swap"),
            ("RUST_LOG", "swap_terminal=debug"),
            ("SWAP_DEBUG_REALTIME", "1"),
        ]);
        let config = DebugConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.log_file, PathBuf::from("/tmp/swap/swap-terminal.log"));
        assert!(config.enable_realtime_log);
        assert!(config.is_debug_enabled());
    }
}
