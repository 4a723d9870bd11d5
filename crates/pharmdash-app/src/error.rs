//! Error types for application configuration and startup

use thiserror::Error;

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Errors that can occur during configuration and startup
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] pharmdash_storage::StorageError),

    #[error("Preferences error: {0}")]
    Preferences(#[from] pharmdash_preferences::PreferencesError),

    #[error("Session error: {0}")]
    Session(#[from] pharmdash_sessions::SessionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
