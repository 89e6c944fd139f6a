//! Default values and resolution helpers for configuration.

use std::path::PathBuf;

use crate::config::types::Config;

/// Returns the default log level, honoring `SILL_LOG_LEVEL`.
pub fn default_log_level() -> String {
    std::env::var("SILL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

/// Resolve the state directory: the `SILL_STATE_DIR` override first, then
/// `~/.sill/state`.
///
/// Returns `None` when neither is available (headless hosts, stripped
/// containers with no home directory) - the registry then runs in-memory
/// only instead of failing at first write.
pub fn default_state_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("SILL_STATE_DIR")
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }

    match dirs::home_dir() {
        Some(home) => Some(home.join(".sill").join("state")),
        None => {
            tracing::warn!(
                event = "core.config.home_dir_not_found",
                "Could not determine home directory - state persistence disabled"
            );
            None
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}
