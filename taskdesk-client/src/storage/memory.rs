/// In-memory storage backend
///
/// A `HashMap` behind a lock. Used by tests and anywhere persistence
/// across process restarts is not wanted.
use std::collections::HashMap;
use std::sync::RwLock;

use super::{StorageError, StoragePort};

/// In-memory key-value storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();

        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "v1").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v1"));

        // Last write wins
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);

        // Removing an absent key is not an error
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_keys_are_disjoint() {
        let storage = MemoryStorage::new();
        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();

        storage.remove("a").unwrap();
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
    }
}
