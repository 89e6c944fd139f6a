//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration for the shell state layer.
///
/// Holds settings derived from environment variables and system defaults,
/// optionally overridden by the config file (see [`super::loading`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory feature state blobs are persisted under (default:
    /// `~/.sill/state`). `None` when no addressable location exists - no
    /// home directory and no override - in which case the registry runs
    /// in-memory only.
    pub state_dir: Option<PathBuf>,

    /// Log level for the library's tracing events.
    pub log_level: String,
}

/// Configuration loaded from `~/.sill/config.toml`.
///
/// Every section and field is optional; missing values fall back to the
/// environment/system defaults in [`super::defaults`].
///
/// # Example
///
/// ```toml
/// [storage]
/// dir = "/var/lib/sill/state"
///
/// [logging]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SillConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Override for the state directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Logging preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Override for the log level (trace, debug, info, warn, error).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}
