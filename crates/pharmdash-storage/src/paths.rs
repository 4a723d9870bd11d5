//! Storage path resolution

use std::path::PathBuf;

use crate::error::{StorageError, StorageResult};

/// Environment variable overriding the storage base directory
pub const BASE_DIR_ENV: &str = "PHARMDASH_HOME";

/// Resolves the base directory for durable storage
pub struct PathResolver;

impl PathResolver {
    /// Resolve the storage base path.
    ///
    /// Order: `PHARMDASH_HOME` environment override, then
    /// `~/.pharmdash` under the user's home directory.
    pub fn resolve_base_path() -> StorageResult<PathBuf> {
        if let Ok(dir) = std::env::var(BASE_DIR_ENV) {
            if !dir.trim().is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        let home = dirs::home_dir().ok_or_else(|| {
            StorageError::path_resolution_error("Could not determine home directory")
        })?;
        Ok(home.join(".pharmdash"))
    }
}
