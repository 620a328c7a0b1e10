//! Default word lists: bundled, on disk, or over HTTP.

mod source;

pub use source::{WordSource, load_text, load_words};

use thiserror::Error;

/// Errors that can occur while loading a word list.
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_source_from_arg() {
        assert_eq!(
            WordSource::from_arg("https://example.com/words.md"),
            WordSource::Url("https://example.com/words.md".to_string())
        );
        assert_eq!(
            WordSource::from_arg(" ./words.md "),
            WordSource::File(PathBuf::from("./words.md"))
        );
    }

    #[test]
    fn test_bundled_list_has_units() {
        let words = load_words(&WordSource::Bundled).unwrap();

        assert!(!words.is_empty());
        assert!(words.iter().all(|w| !w.mastered));
        assert_eq!(words[0].unit, "Unit 1");
        assert!(words.iter().any(|w| w.unit == "Unit 3"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "---Unit 4---\nRiver - 河 | 江").unwrap();

        let words = load_words(&WordSource::File(file.path().to_path_buf())).unwrap();

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].unit, "Unit 4");
        assert_eq!(words[0].chinese, "河\n江");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_text(&WordSource::File(PathBuf::from("/nonexistent/words.md")));
        assert!(matches!(result.unwrap_err(), LibraryError::FileNotFound(_)));
    }

    #[test]
    fn test_load_unreachable_url() {
        let result = load_text(&WordSource::Url("http://127.0.0.1:9/words.md".to_string()));
        assert!(matches!(result.unwrap_err(), LibraryError::ConnectionFailed(_)));
    }
}
