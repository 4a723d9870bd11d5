//! Namespaced JSON blob persistence
//!
//! One blob per namespace, pretty-printed JSON, atomic replace on save
//! (write to a temp file, then rename). Partial writes therefore never
//! corrupt a previously good blob.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{IoOperation, StorageError, StorageResult};
use crate::namespace::StorageNamespace;
use crate::paths::PathResolver;

/// Blob store over a base directory
#[derive(Debug, Clone)]
pub struct BlobStore {
    /// Base directory holding one subdirectory per namespace
    base_path: PathBuf,
}

impl BlobStore {
    /// Create a blob store over an explicit base directory
    pub fn new(base_path: PathBuf) -> Self {
        BlobStore { base_path }
    }

    /// Create a blob store over the default resolved base directory
    pub fn with_default_path() -> StorageResult<Self> {
        let base_path = PathResolver::resolve_base_path()?;
        Ok(BlobStore { base_path })
    }

    /// Get the base path
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    /// Create the base directory and every namespace directory
    pub fn initialize(&self) -> StorageResult<()> {
        self.create_dir_if_not_exists(&self.base_path)?;
        for namespace in StorageNamespace::ALL {
            self.create_dir_if_not_exists(&self.namespace_dir(*namespace))?;
        }
        debug!(base = %self.base_path.display(), "storage initialized");
        Ok(())
    }

    /// Directory for a namespace
    pub fn namespace_dir(&self, namespace: StorageNamespace) -> PathBuf {
        self.base_path.join(namespace.dir_name())
    }

    /// Blob file path for a namespace
    fn blob_path(&self, namespace: StorageNamespace) -> PathBuf {
        self.namespace_dir(namespace).join(namespace.blob_name())
    }

    /// Load the blob for a namespace.
    ///
    /// A missing blob is `StorageError::NotFound`, which callers map to
    /// their default state; a present-but-unreadable blob is a real error.
    pub fn load<T: DeserializeOwned>(&self, namespace: StorageNamespace) -> StorageResult<T> {
        let path = self.blob_path(namespace);
        if !path.exists() {
            return Err(StorageError::not_found(namespace.dir_name()));
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::io_error(path.clone(), IoOperation::Read, e))?;
        let value = serde_json::from_str(&content).map_err(|e| {
            StorageError::parse_error(path.clone(), "json", e.to_string())
        })?;

        debug!(namespace = %namespace, path = %path.display(), "blob loaded");
        Ok(value)
    }

    /// Save the blob for a namespace atomically
    pub fn save<T: Serialize>(
        &self,
        namespace: StorageNamespace,
        value: &T,
    ) -> StorageResult<()> {
        let dir = self.namespace_dir(namespace);
        self.create_dir_if_not_exists(&dir)?;

        let path = self.blob_path(namespace);
        let content = serde_json::to_string_pretty(value).map_err(|e| {
            StorageError::parse_error(path.clone(), "json", e.to_string())
        })?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)
            .map_err(|e| StorageError::io_error(temp_path.clone(), IoOperation::Write, e))?;
        fs::rename(&temp_path, &path)
            .map_err(|e| StorageError::io_error(path.clone(), IoOperation::Write, e))?;

        debug!(namespace = %namespace, path = %path.display(), "blob saved");
        Ok(())
    }

    /// Remove the blob for a namespace; removing an absent blob is a no-op
    pub fn clear(&self, namespace: StorageNamespace) -> StorageResult<()> {
        let path = self.blob_path(namespace);
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| StorageError::io_error(path.clone(), IoOperation::Delete, e))?;
            debug!(namespace = %namespace, "blob cleared");
        }
        Ok(())
    }

    /// Whether a blob exists for the namespace
    pub fn exists(&self, namespace: StorageNamespace) -> bool {
        self.blob_path(namespace).exists()
    }

    fn create_dir_if_not_exists(&self, path: &Path) -> StorageResult<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .map_err(|e| StorageError::directory_creation_failed(path.to_path_buf(), e))?;
        }
        Ok(())
    }
}
