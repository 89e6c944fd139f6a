//! Config file loading.
//!
//! A single TOML layer: `~/.sill/config.toml`, overridable with
//! `SILL_CONFIG_FILE` for tests. A missing file means defaults; a file
//! that exists but does not parse is a real error surfaced to the caller
//! rather than silently ignored.

use std::path::PathBuf;

use tracing::debug;

use crate::config::types::{Config, SillConfig};
use crate::errors::ConfigError;

/// Load the config file, or defaults when none exists.
pub fn load_config_file() -> Result<SillConfig, ConfigError> {
    let Some(path) = config_file_path() else {
        return Ok(SillConfig::default());
    };
    if !path.exists() {
        return Ok(SillConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: e.to_string(),
    })?;

    debug!(
        event = "core.config.file_loaded",
        path = %path.display()
    );
    Ok(config)
}

/// Build the runtime [`Config`], merging file overrides into
/// environment/system defaults.
pub fn load() -> Result<Config, ConfigError> {
    let file = load_config_file()?;
    let mut config = Config::default();

    if let Some(dir) = file.storage.dir {
        config.state_dir = Some(dir);
    }
    if let Some(level) = file.logging.level {
        config.log_level = level;
    }

    Ok(config)
}

fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("SILL_CONFIG_FILE")
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }

    dirs::home_dir().map(|home| home.join(".sill").join("config.toml"))
}

/// Test utilities for config environment variables.
///
/// Public so downstream crates can serialize their own env-sensitive
/// tests against the same lock.
#[doc(hidden)]
pub mod test_helpers {
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify SILL_* env vars.
    pub static CONFIG_ENV_LOCK: Mutex<()> = Mutex::new(());

    /// RAII guard that restores an env var's previous state on drop.
    pub struct EnvVarGuard {
        name: &'static str,
        previous: Option<String>,
    }

    impl EnvVarGuard {
        pub fn set(name: &'static str, value: &str) -> Self {
            let previous = std::env::var(name).ok();
            // SAFETY: Caller must hold CONFIG_ENV_LOCK to serialize access
            // from Rust test code. This is inherently unsafe as other
            // threads could read the environment, but acceptable in
            // test-only code.
            unsafe { std::env::set_var(name, value) };
            Self { name, previous }
        }

        pub fn unset(name: &'static str) -> Self {
            let previous = std::env::var(name).ok();
            // SAFETY: See set().
            unsafe { std::env::remove_var(name) };
            Self { name, previous }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            // SAFETY: Caller must hold CONFIG_ENV_LOCK throughout guard
            // lifetime. See safety comment in set().
            match &self.previous {
                Some(value) => unsafe { std::env::set_var(self.name, value) },
                None => unsafe { std::env::remove_var(self.name) },
            }
        }
    }
}
