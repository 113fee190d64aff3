//! Storage error types
//!
//! Errors raised by storage backends while loading or saving the record
//! collections. The record store logs them rather than returning them to
//! callers.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing a data file failed
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file could not be encoded or decoded
    #[error("Serialization error on '{}': {source}", .path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backend refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Creates an I/O error for `path`
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a serialization error for `path`
    pub fn serialization(path: &Path, source: serde_json::Error) -> Self {
        StorageError::Serialization {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Checks if this error means a data file holds unreadable content
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, StorageError::Serialization { .. })
    }
}
