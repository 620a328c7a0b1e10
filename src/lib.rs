//! smart-vocab: English-Chinese vocabulary flashcards.
//!
//! This crate parses freeform word lists into flashcards, tracks which
//! words are mastered, persists the list and settings, and ranks
//! text-to-speech voices so pronunciation uses the best one available.

pub mod cli;
pub mod config;
pub mod library;
pub mod speech;
pub mod state;
pub mod storage;
pub mod voice;
pub mod words;
