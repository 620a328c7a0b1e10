//! Word entry type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unit label for entries that appear before any unit marker.
pub const DEFAULT_UNIT: &str = "General";

/// A single vocabulary item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordEntry {
    pub id: String,
    pub english: String,
    /// One gloss per line.
    pub chinese: String,
    #[serde(default)]
    pub mastered: bool,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

impl WordEntry {
    /// Create an unmastered entry with a fresh id.
    pub fn new(
        english: impl Into<String>,
        chinese: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            english: english.into(),
            chinese: chinese.into(),
            mastered: false,
            unit: unit.into(),
        }
    }

    /// Glosses split on embedded line breaks.
    pub fn glosses(&self) -> impl Iterator<Item = &str> {
        self.chinese.lines()
    }

    /// Case-insensitive comparison of the English term.
    pub fn same_term(&self, english: &str) -> bool {
        self.english.to_lowercase() == english.to_lowercase()
    }
}
