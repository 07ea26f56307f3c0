//! Store error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while moving the library between memory and disk
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data file exists but does not hold a valid library
    #[error("Library file is corrupt: {}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the data file failed
    #[error("Failed to {action} library file: {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize library")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Returns true if the data file could not be parsed
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}
