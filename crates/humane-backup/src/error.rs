//! Backup file error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing backup files.
#[derive(Debug, Error)]
pub enum BackupError {
    /// The backup file could not be read.
    #[error("Failed to read backup {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backup file could not be written.
    #[error("Failed to write backup {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid backup (bad JSON, wrong field types).
    #[error("Invalid backup JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
