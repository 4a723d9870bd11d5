//! Error types for the preferences system

use thiserror::Error;

/// Result type for preferences operations
pub type PreferencesResult<T> = std::result::Result<T, PreferencesError>;

/// Errors that can occur in the preferences system
#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("Storage error: {0}")]
    Storage(#[from] pharmdash_storage::StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
