//! Error types for settings operations
//!
//! The selection engine itself is total and never fails; only loading and
//! watching the settings file can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error reading or writing the settings file
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for [`Settings`](crate::settings::Settings)
    #[error("Settings parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed, but a value is out of range
    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// File watcher could not be started
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

impl SettingsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
