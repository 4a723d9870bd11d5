//! Storage namespaces
//!
//! Each persisted concern gets its own namespace directory and blob file.
//! A store owns exclusive write access to its namespace; nothing else in
//! the process writes there.

/// The durable-storage namespaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageNamespace {
    /// Session identity, token, and authenticated flag
    Session,
    /// Presentation and display preferences
    Preferences,
}

impl StorageNamespace {
    /// All namespaces, in initialization order
    pub const ALL: &'static [StorageNamespace] =
        &[StorageNamespace::Session, StorageNamespace::Preferences];

    /// Directory name under the storage base path
    pub fn dir_name(&self) -> &'static str {
        match self {
            StorageNamespace::Session => "session",
            StorageNamespace::Preferences => "preferences",
        }
    }

    /// Blob file name inside the namespace directory
    pub fn blob_name(&self) -> &'static str {
        "current.json"
    }
}

impl std::fmt::Display for StorageNamespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}
