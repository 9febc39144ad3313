//! Persistence error types.
//!
//! All persistence operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid state file.
    #[error("Invalid state file format: {path}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Unsupported schema version.
    #[error("State file version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion {
        found: u32,
        max_supported: u32,
        path: PathBuf,
    },

    /// Serialization error.
    #[error("Failed to serialize state")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::InvalidFormat { path, source } => {
                format!(
                    "The file at {} is not a valid state file: {}",
                    path.display(),
                    source
                )
            }
            Self::UnsupportedVersion {
                found,
                max_supported,
                ..
            } => {
                format!(
                    "This state file was written by a newer version of hubs \
                    (file version {}, this version supports up to {}).",
                    found, max_supported
                )
            }
            Self::Serialization { .. } => "An error occurred while saving the values.".to_string(),
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that you have permission to read the state file.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::InvalidFormat { .. } => {
                Some("Delete the file or run `hubs reset` to start from the defaults.".into())
            }
            Self::UnsupportedVersion { .. } => Some("Update hubs to the latest version.".into()),
            Self::Serialization { .. } => None,
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different --state path.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
