//! Typed access to the persisted word list and settings.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{Storage, StorageError};
use crate::state::{AppSettings, StudyState};
use crate::words::WordEntry;

pub const WORDS_KEY: &str = "smart_vocab_words_v3";
pub const SETTINGS_KEY: &str = "smart_vocab_settings_v3";

/// Reads and writes whole state objects as JSON.
pub struct Store<S: Storage> {
    storage: S,
}

impl<S: Storage> Store<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Decode `key`, falling back to the default when absent or corrupt.
    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, StorageError> {
        let Some(json) = self.storage.get(key)? else {
            debug!(key, "nothing stored, using defaults");
            return Ok(T::default());
        };

        match serde_json::from_str(&json) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(key, error = %e, "stored value is unreadable, using defaults");
                Ok(T::default())
            }
        }
    }

    pub fn load_words(&self) -> Result<Vec<WordEntry>, StorageError> {
        self.load_or_default(WORDS_KEY)
    }

    pub fn load_settings(&self) -> Result<AppSettings, StorageError> {
        Ok(self.load_or_default::<AppSettings>(SETTINGS_KEY)?.normalized())
    }

    pub fn load_state(&self) -> Result<StudyState, StorageError> {
        Ok(StudyState::new(self.load_words()?, self.load_settings()?))
    }

    pub fn save_words(&self, words: &[WordEntry]) -> Result<(), StorageError> {
        let json = serde_json::to_string(words)?;
        self.storage.set(WORDS_KEY, &json)?;
        debug!(count = words.len(), "saved word list");
        Ok(())
    }

    pub fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        let json = serde_json::to_string(settings)?;
        self.storage.set(SETTINGS_KEY, &json)?;
        debug!("saved settings");
        Ok(())
    }

    pub fn save_state(&self, state: &StudyState) -> Result<(), StorageError> {
        self.save_words(&state.words)?;
        self.save_settings(&state.settings)
    }
}
