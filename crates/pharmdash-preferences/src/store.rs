//! Preference persistence
//!
//! Owns the preferences namespace of durable storage. One blob holding the
//! full record; a missing blob means first run.

use pharmdash_storage::{BlobStore, StorageNamespace};
use tracing::{debug, warn};

use crate::error::PreferencesResult;
use crate::types::Preferences;

/// Manages preference persistence in the preferences namespace
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    blobs: BlobStore,
}

impl PreferencesStore {
    /// Create a preferences store over a blob store
    pub fn new(blobs: BlobStore) -> Self {
        Self { blobs }
    }

    /// Save the full preference record
    pub fn save(&self, preferences: &Preferences) -> PreferencesResult<()> {
        self.blobs.save(StorageNamespace::Preferences, preferences)?;
        debug!("preferences saved");
        Ok(())
    }

    /// Load the preference record.
    ///
    /// `Ok(None)` when no record is stored; an unreadable blob is logged
    /// and treated as absent so a corrupt file falls back to defaults.
    pub fn load(&self) -> PreferencesResult<Option<Preferences>> {
        match self.blobs.load::<Preferences>(StorageNamespace::Preferences) {
            Ok(preferences) => Ok(Some(preferences)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => {
                warn!(error = %e, "stored preferences unreadable, using defaults");
                Ok(None)
            }
        }
    }

    /// Remove the stored record; idempotent
    pub fn clear(&self) -> PreferencesResult<()> {
        self.blobs.clear(StorageNamespace::Preferences)?;
        Ok(())
    }

    /// Whether a record exists on disk
    pub fn exists(&self) -> bool {
        self.blobs.exists(StorageNamespace::Preferences)
    }
}
