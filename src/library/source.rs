//! Where a default word list comes from.

use std::path::PathBuf;

use tracing::info;

use super::LibraryError;
use crate::words::{self, WordEntry};

const BUNDLED_WORDS: &str = include_str!("../../assets/words.md");

/// Location of a word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary.
    Bundled,
    File(PathBuf),
    Url(String),
}

impl WordSource {
    /// Interpret a command-line argument: `http(s)://` is a URL, anything
    /// else a file path.
    pub fn from_arg(arg: &str) -> Self {
        let arg = arg.trim();
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Self::Url(arg.to_string())
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Bundled => "bundled word list".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
        }
    }
}

/// Read the raw text of a word list.
pub fn load_text(source: &WordSource) -> Result<String, LibraryError> {
    match source {
        WordSource::Bundled => Ok(BUNDLED_WORDS.to_string()),
        WordSource::File(path) => {
            if !path.exists() {
                return Err(LibraryError::FileNotFound(path.display().to_string()));
            }
            Ok(std::fs::read_to_string(path)?)
        }
        WordSource::Url(url) => fetch(url),
    }
}

/// Load and parse a word list. Entries start unmastered.
pub fn load_words(source: &WordSource) -> Result<Vec<WordEntry>, LibraryError> {
    let text = load_text(source)?;
    let entries = words::parse(&text);
    info!(source = %source.describe(), count = entries.len(), "loaded word list");
    Ok(entries)
}

fn fetch(url: &str) -> Result<String, LibraryError> {
    let response = reqwest::blocking::get(url)
        .map_err(|e| LibraryError::ConnectionFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(LibraryError::RequestFailed(format!(
            "Status: {}",
            response.status()
        )));
    }

    response
        .text()
        .map_err(|e| LibraryError::InvalidResponse(e.to_string()))
}
