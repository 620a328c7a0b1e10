//! Persistence of the word list and settings.
//!
//! Values are JSON strings stored under fixed keys. The [`Storage`] trait
//! is the key/value capability; [`Store`] layers typed load/save on top.

mod file;
mod memory;
mod store;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use store::{SETTINGS_KEY, Store, WORDS_KEY};

use thiserror::Error;

/// Errors that can occur while reading or writing stored state.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Whole-value get/set by key.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: Storage + ?Sized> Storage for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppSettings, StudyState};
    use crate::words::parse;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // ===========================================
    // FileStorage tests
    // ===========================================

    #[test]
    fn test_file_storage_custom_directory() {
        let custom_path = PathBuf::from("/tmp/custom-vocab");
        let storage = FileStorage::with_dir(custom_path.clone());
        assert_eq!(storage.data_dir(), custom_path);
    }

    #[test]
    fn test_file_storage_get_missing() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::with_dir(temp_dir.path().to_path_buf());

        assert_eq!(storage.get("missing").unwrap(), None);
    }

    #[test]
    fn test_file_storage_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::with_dir(temp_dir.path().join("nested"));

        storage.set("greeting", r#"{"hello":"world"}"#).unwrap();

        assert_eq!(
            storage.get("greeting").unwrap().as_deref(),
            Some(r#"{"hello":"world"}"#)
        );
        assert!(temp_dir.path().join("nested").join("greeting.json").exists());
    }

    #[test]
    fn test_file_storage_validates_key() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::with_dir(temp_dir.path().to_path_buf());

        assert!(matches!(
            storage.set("../evil", "{}").unwrap_err(),
            StorageError::InvalidKey(_)
        ));
        assert!(storage.get("").is_err());
    }

    // ===========================================
    // Store tests
    // ===========================================

    #[test]
    fn test_store_defaults_when_empty() {
        let store = Store::new(MemoryStorage::new());

        let state = store.load_state().unwrap();
        assert!(state.words.is_empty());
        assert_eq!(state.settings, AppSettings::default());
    }

    #[test]
    fn test_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(FileStorage::with_dir(temp_dir.path().to_path_buf()));

        let mut state = StudyState::new(
            parse("---Unit 1---\nApple - 苹果 | 沙果"),
            AppSettings::new().with_speech_rate(1.4),
        );
        state.words[0].mastered = true;
        state.settings.voice_uri = "ana.enhanced".to_string();
        store.save_state(&state).unwrap();

        let loaded = Store::new(FileStorage::with_dir(temp_dir.path().to_path_buf()))
            .load_state()
            .unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_store_uses_fixed_keys() {
        let store = Store::new(MemoryStorage::new());
        store.save_state(&StudyState::default()).unwrap();

        assert_eq!(store.storage().get(WORDS_KEY).unwrap().as_deref(), Some("[]"));
        assert!(store.storage().get(SETTINGS_KEY).unwrap().is_some());
    }

    #[test]
    fn test_store_corrupt_words_fall_back_to_default() {
        let storage = MemoryStorage::new();
        storage.set(WORDS_KEY, "not json").unwrap();

        let store = Store::new(storage);
        assert!(store.load_words().unwrap().is_empty());
    }

    #[test]
    fn test_store_clamps_loaded_rate() {
        let storage = MemoryStorage::new();
        storage
            .set(SETTINGS_KEY, r#"{"speechRate": 0.1, "voiceURI": "", "hideMastered": false}"#)
            .unwrap();

        let settings = Store::new(storage).load_settings().unwrap();
        assert_eq!(settings.speech_rate(), 0.5);
    }

    #[test]
    fn test_store_reads_legacy_words_without_unit() {
        let storage = MemoryStorage::new();
        storage
            .set(
                WORDS_KEY,
                r#"[{"id": "word-1", "english": "Dog", "chinese": "狗", "mastered": true}]"#,
            )
            .unwrap();

        let words = Store::new(storage).load_words().unwrap();
        assert_eq!(words[0].unit, "General");
        assert!(words[0].mastered);
    }
}
