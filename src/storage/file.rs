//! Key/value storage backed by one JSON file per key.

use std::path::PathBuf;

use super::{Storage, StorageError};

/// Stores each key as `<dir>/<key>.json`.
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Storage under `~/.smart-vocab`, or `None` without a home directory.
    pub fn in_home() -> Option<Self> {
        dirs::home_dir().map(|home| Self::with_dir(home.join(".smart-vocab")))
    }

    /// Storage under a custom directory.
    pub fn with_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    fn validate_key(key: &str) -> Result<(), StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey("Key cannot be empty".to_string()));
        }

        // Prevent path traversal
        if key.contains('/') || key.contains('\\') || key.contains("..") {
            return Err(StorageError::InvalidKey(
                "Key cannot contain path separators".to_string(),
            ));
        }

        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::validate_key(key)?;

        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::validate_key(key)?;

        // Ensure directory exists
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::write(self.key_path(key), value)?;

        Ok(())
    }
}
