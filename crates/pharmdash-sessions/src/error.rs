//! Error types for the sessions system

use thiserror::Error;

/// Result type for session operations
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Errors that can occur in the sessions system
#[derive(Error, Debug)]
pub enum SessionError {
    /// Unknown identifier or wrong secret; prior session state is untouched
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A sign-in attempt is already pending for this session
    #[error("A sign-in attempt is already in flight")]
    LoginInFlight,

    #[error("Storage error: {0}")]
    Storage(#[from] pharmdash_storage::StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Whether this is the user-correctable rejected-login condition
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, SessionError::InvalidCredentials)
    }
}
