/// File-backed storage backend
///
/// One JSON file per key under a data directory, the process-local
/// analogue of browser storage. Values are written whole on every set, so
/// a crash can lose at most the write in flight (last-write-wins is the
/// only guarantee on offer, matching the storage port contract).
use std::fs;
use std::path::{Path, PathBuf};

use super::{StorageError, StoragePort};

/// File-per-key storage rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `root`, creating the directory if needed
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(FileStorage { root })
    }

    /// Maps a key to its backing file path
    ///
    /// Keys must be plain names; anything resembling path traversal is
    /// rejected rather than resolved.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty()
            || key.contains(std::path::is_separator)
            || key.contains("..")
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl StoragePort for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        assert_eq!(storage.get("session").unwrap(), None);

        storage.set("session", "{\"id\":\"1\"}").unwrap();
        assert_eq!(
            storage.get("session").unwrap().as_deref(),
            Some("{\"id\":\"1\"}")
        );

        storage.remove("session").unwrap();
        assert_eq!(storage.get("session").unwrap(), None);
        storage.remove("session").unwrap(); // absent key is fine
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let storage = FileStorage::open(dir.path()).unwrap();
            storage.set("tasks", "[]").unwrap();
        }

        let reopened = FileStorage::open(dir.path()).unwrap();
        assert_eq!(reopened.get("tasks").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        assert!(matches!(
            storage.get("../escape"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            storage.set("a/b", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(storage.set("", "x"), Err(StorageError::InvalidKey(_))));
    }
}
