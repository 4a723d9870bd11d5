//! PharmDash Durable Storage Module
//!
//! Client-side durable storage for the dashboard core. State that must
//! survive a restart is written as pretty-printed JSON blobs under a base
//! directory (default `~/.pharmdash`), keyed by namespace. The two
//! namespaces — session and preferences — are independent: each is owned
//! exclusively by its store, and no cross-namespace transactionality is
//! offered or assumed.

pub mod blob_store;
pub mod error;
pub mod namespace;
pub mod paths;

pub use blob_store::BlobStore;
pub use error::{IoOperation, StorageError, StorageResult};
pub use namespace::StorageNamespace;
pub use paths::PathResolver;
