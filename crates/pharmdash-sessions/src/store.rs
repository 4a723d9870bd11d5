//! Session persistence
//!
//! Owns the session namespace of durable storage. Only the restartable
//! subset ([`PersistedSession`]) is written here; a missing blob is the
//! normal signed-out state, not an error.

use pharmdash_storage::{BlobStore, StorageNamespace};
use tracing::{debug, warn};

use crate::error::SessionResult;
use crate::models::PersistedSession;

/// Manages session persistence in the session namespace
#[derive(Debug, Clone)]
pub struct SessionStore {
    blobs: BlobStore,
}

impl SessionStore {
    /// Create a session store over a blob store
    pub fn new(blobs: BlobStore) -> Self {
        Self { blobs }
    }

    /// Save the durable session blob
    pub async fn save(&self, session: &PersistedSession) -> SessionResult<()> {
        self.blobs.save(StorageNamespace::Session, session)?;
        debug!(email = %session.identity.email, "session saved");
        Ok(())
    }

    /// Load the durable session blob.
    ///
    /// `Ok(None)` when no session is stored; a present-but-unreadable blob
    /// is logged and treated as absent so a corrupt file cannot wedge
    /// startup.
    pub async fn load(&self) -> SessionResult<Option<PersistedSession>> {
        match self.blobs.load::<PersistedSession>(StorageNamespace::Session) {
            Ok(session) => Ok(Some(session)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => {
                warn!(error = %e, "stored session unreadable, treating as signed out");
                Ok(None)
            }
        }
    }

    /// Remove the durable session blob; idempotent
    pub async fn clear(&self) -> SessionResult<()> {
        self.blobs.clear(StorageNamespace::Session)?;
        Ok(())
    }

    /// Whether a session blob exists
    pub fn exists(&self) -> bool {
        self.blobs.exists(StorageNamespace::Session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserIdentity;
    use pharmdash_permissions::Role;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn store() -> (TempDir, SessionStore) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let blobs = BlobStore::new(temp_dir.path().to_path_buf());
        blobs.initialize().expect("Failed to initialize storage");
        (temp_dir, SessionStore::new(blobs))
    }

    fn sample_session() -> PersistedSession {
        let identity = UserIdentity::new(
            "auditor@nordmed.test",
            "Rita Falk",
            Role::Auditor,
            Uuid::new_v4(),
            "Nordmed Pharma",
        );
        PersistedSession::new(identity, "tok-abc".to_string(), true)
    }

    #[tokio::test]
    async fn save_load_round_trip() {
        let (_guard, store) = store();
        let session = sample_session();

        store.save(&session).await.expect("save");
        let loaded = store.load().await.expect("load").expect("present");
        assert_eq!(loaded, session);
    }

    #[tokio::test]
    async fn missing_blob_loads_as_none() {
        let (_guard, store) = store();
        assert!(store.load().await.expect("load").is_none());
    }

    #[tokio::test]
    async fn corrupt_blob_loads_as_none() {
        let (_guard, store) = store();
        store.save(&sample_session()).await.expect("save");

        // Truncate the blob to something unparsable.
        let path = store
            .blobs
            .namespace_dir(StorageNamespace::Session)
            .join(StorageNamespace::Session.blob_name());
        std::fs::write(&path, "{not json").unwrap();

        assert!(store.load().await.expect("load").is_none());
    }

    #[tokio::test]
    async fn clear_removes_the_blob_and_is_idempotent() {
        let (_guard, store) = store();
        store.save(&sample_session()).await.expect("save");
        assert!(store.exists());

        store.clear().await.expect("clear");
        assert!(!store.exists());
        store.clear().await.expect("clear again");
    }
}
