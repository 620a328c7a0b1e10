//! Word list plus settings, passed around explicitly.

use tracing::info;

use super::settings::AppSettings;
use crate::words::{self, WordEntry};

/// Everything the app persists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyState {
    pub words: Vec<WordEntry>,
    pub settings: AppSettings,
}

impl StudyState {
    pub fn new(words: Vec<WordEntry>, settings: AppSettings) -> Self {
        Self { words, settings }
    }

    /// Replace the whole word list.
    pub fn replace_words(&mut self, words: Vec<WordEntry>) {
        info!(count = words.len(), "replaced word list");
        self.words = words;
    }

    /// Replace the word list from text, keeping mastery of known terms.
    pub fn reimport(&mut self, text: &str) -> usize {
        let words = words::reimport(&self.words, text);
        let count = words.len();
        self.replace_words(words);
        count
    }

    /// Flip the mastered flag of the entry with `id`.
    ///
    /// Returns the new flag, or `None` for an unknown id.
    pub fn toggle_mastery(&mut self, id: &str) -> Option<bool> {
        let entry = self.words.iter_mut().find(|w| w.id == id)?;
        entry.mastered = !entry.mastered;
        info!(english = %entry.english, mastered = entry.mastered, "toggled mastery");
        Some(entry.mastered)
    }

    pub fn word(&self, id: &str) -> Option<&WordEntry> {
        self.words.iter().find(|w| w.id == id)
    }

    /// Entries shown in a study session.
    ///
    /// Mastered entries are left out when `hide_mastered` is set; `unit`
    /// restricts the session to one unit.
    pub fn visible_words(&self, unit: Option<&str>) -> Vec<&WordEntry> {
        self.words
            .iter()
            .filter(|w| !(self.settings.hide_mastered && w.mastered))
            .filter(|w| unit.is_none_or(|u| w.unit == u))
            .collect()
    }

    /// Whether any entry belongs to `unit`.
    pub fn has_unit(&self, unit: &str) -> bool {
        self.words.iter().any(|w| w.unit == unit)
    }

    /// Distinct units in order of first appearance.
    pub fn units(&self) -> Vec<&str> {
        let mut units: Vec<&str> = Vec::new();
        for word in &self.words {
            if !units.contains(&word.unit.as_str()) {
                units.push(&word.unit);
            }
        }
        units
    }

    pub fn mastered_count(&self) -> usize {
        self.words.iter().filter(|w| w.mastered).count()
    }
}
