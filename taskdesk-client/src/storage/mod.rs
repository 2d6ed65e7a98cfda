/// Storage port
///
/// The stores mirror their in-memory state to a local string-keyed
/// key-value store. This module defines that seam as a small trait so the
/// backing medium can be swapped (in-memory for tests, files on disk for
/// the demo binary, a networked backend someday) without touching store
/// logic.
///
/// Each store owns a disjoint key, so there is no cross-store contention;
/// the whole value is rewritten on every mutation and the last writer wins.
///
/// # Example
///
/// ```
/// use taskdesk_client::storage::{MemoryStorage, StoragePort};
///
/// let storage = MemoryStorage::new();
/// storage.set("greeting", "hello").unwrap();
/// assert_eq!(storage.get("greeting").unwrap().as_deref(), Some("hello"));
/// storage.remove("greeting").unwrap();
/// assert_eq!(storage.get("greeting").unwrap(), None);
/// ```
use thiserror::Error;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage backend error
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure (file backend)
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key is not usable by the backend (e.g. unsafe as a file name)
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// String-keyed key-value storage seam
///
/// Semantics are those of a browser-local store: synchronous, whole-value
/// reads and writes, absent keys read as `None`, removal of an absent key
/// is not an error.
pub trait StoragePort: Send + Sync {
    /// Reads the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`, if any
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
