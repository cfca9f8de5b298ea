//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Plugin error.
    #[error("plugin error: {0}")]
    Plugin(#[from] changecraft_plugin::PluginError),

    /// A JSON document or history file could not be decoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No snapshot matches the given id or name.
    #[error("snapshot not found: {0}")]
    SnapshotNotFound(String),

    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
