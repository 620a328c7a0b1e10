//! Flashcard navigation.

use crate::words::WordEntry;

/// Cursor over the cards of a study session.
///
/// Holds ids rather than entries so the caller can keep mutating the
/// word list; call [`StudySession::sync`] after such changes.
#[derive(Debug, Clone, Default)]
pub struct StudySession {
    ids: Vec<String>,
    index: usize,
    revealed: bool,
}

impl StudySession {
    pub fn new(visible: &[&WordEntry]) -> Self {
        let mut session = Self::default();
        session.sync(visible);
        session
    }

    /// Take a fresh snapshot of the visible cards.
    ///
    /// The position is kept when possible and clamped to the last card
    /// when the list shrank.
    pub fn sync(&mut self, visible: &[&WordEntry]) {
        self.ids = visible.iter().map(|w| w.id.clone()).collect();
        if !self.ids.is_empty() && self.index >= self.ids.len() {
            self.index = self.ids.len() - 1;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Id of the card on display.
    pub fn current(&self) -> Option<&str> {
        self.ids.get(self.index).map(String::as_str)
    }

    /// Whether the back of the current card is showing.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn flip(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Advance, wrapping from the last card to the first.
    pub fn next_card(&mut self) {
        if self.ids.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.ids.len();
        self.revealed = false;
    }

    /// Step back, wrapping from the first card to the last.
    pub fn previous_card(&mut self) {
        if self.ids.is_empty() {
            return;
        }
        self.index = self.index.checked_sub(1).unwrap_or(self.ids.len() - 1);
        self.revealed = false;
    }

    /// 1-based position and total, `(0, 0)` when empty.
    pub fn progress(&self) -> (usize, usize) {
        if self.ids.is_empty() {
            (0, 0)
        } else {
            (self.index + 1, self.ids.len())
        }
    }
}
