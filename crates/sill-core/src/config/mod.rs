//! # Configuration
//!
//! Runtime settings for the shell state layer, resolved from (later
//! sources override earlier ones):
//! 1. **Hardcoded defaults** - `~/.sill/state`, `info`
//! 2. **Environment** - `SILL_STATE_DIR`, `SILL_LOG_LEVEL`
//! 3. **Config file** - `~/.sill/config.toml`
//!
//! ```toml
//! # ~/.sill/config.toml
//! [storage]
//! dir = "/var/lib/sill/state"
//!
//! [logging]
//! level = "debug"
//! ```

pub mod defaults;
pub mod loading;
pub mod types;

// Public API exports
pub use types::{Config, LoggingConfig, SillConfig, StorageConfig};

impl Config {
    /// Load configuration, merging the config file over environment and
    /// system defaults.
    ///
    /// See [`loading::load`] for details.
    pub fn load() -> Result<Self, crate::errors::ConfigError> {
        loading::load()
    }
}
