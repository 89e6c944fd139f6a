//! Feature-keyed state persistence.
//!
//! Each feature stores one JSON blob under `<state_dir>/<key>.json`.
//! Writes go through a temp file and rename so a crash mid-write never
//! leaves a half-written blob behind.

pub mod errors;

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

pub use errors::StorageError;

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        tracing::warn!(
            event = "core.storage.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
            "Failed to clean up temp file after write error"
        );
    }
}

/// Persist a feature's state blob atomically.
///
/// Creates `state_dir` if needed, writes `<key>.json.tmp`, then renames it
/// into place.
pub fn save_feature_state<T: Serialize>(
    state_dir: &Path,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    fs::create_dir_all(state_dir).map_err(|e| StorageError::IoError { source: e })?;

    let state_file = state_dir.join(format!("{}.json", key));
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        StorageError::SerializationFailed {
            key: key.to_string(),
            message: e.to_string(),
        }
    })?;

    let temp_file = state_file.with_extension("json.tmp");

    if let Err(e) = fs::write(&temp_file, &json) {
        cleanup_temp_file(&temp_file, &e);
        return Err(StorageError::IoError { source: e });
    }

    if let Err(e) = fs::rename(&temp_file, &state_file) {
        cleanup_temp_file(&temp_file, &e);
        return Err(StorageError::IoError { source: e });
    }

    debug!(
        event = "core.storage.state_saved",
        key = key,
        path = %state_file.display()
    );
    Ok(())
}

/// Load a feature's state blob.
///
/// `None` covers every "no usable state" case: the blob has never been
/// written, or it exists but cannot be read or parsed. The latter two are
/// logged at error level - the saved state is effectively lost and the
/// caller falls back to its default.
pub fn load_feature_state<T: DeserializeOwned>(state_dir: &Path, key: &str) -> Option<T> {
    let state_file = state_dir.join(format!("{}.json", key));
    if !state_file.exists() {
        return None;
    }

    let content = match fs::read_to_string(&state_file) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!(
                event = "core.storage.state_read_failed",
                key = key,
                path = %state_file.display(),
                error = %e,
                "State file exists but cannot be read"
            );
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!(
                event = "core.storage.state_parse_failed",
                key = key,
                path = %state_file.display(),
                error = %e,
                "State file exists but contains invalid JSON - saved state lost"
            );
            None
        }
    }
}
