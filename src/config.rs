//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;

use crate::voice::{RankerConfig, VoiceRanker};

pub const DEFAULT_SPEECH_URL: &str = "http://localhost:9280";

/// Settings read from the environment (and a `.env` file, if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory for stored state; `~/.smart-vocab` when unset.
    pub data_dir: Option<PathBuf>,
    /// Speech server base URL; empty disables speech.
    pub speech_url: String,
    /// Where `--load-default` fetches from when no source is given.
    pub words_url: Option<String>,
    pub ranker: RankerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            speech_url: DEFAULT_SPEECH_URL.to_string(),
            words_url: None,
            ranker: RankerConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut ranker = defaults.ranker;
        if let Some(lang) = non_empty("SMART_VOCAB_LANG") {
            ranker.language = lang;
        }
        if let Some(keywords) = non_empty("SMART_VOCAB_QUALITY_KEYWORDS") {
            ranker.quality_keywords = keywords
                .split(',')
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
        }

        Self {
            data_dir: non_empty("SMART_VOCAB_DATA_DIR").map(PathBuf::from),
            speech_url: lookup("SMART_VOCAB_SPEECH_URL")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.speech_url),
            words_url: non_empty("SMART_VOCAB_WORDS_URL"),
            ranker,
        }
    }

    pub fn voice_ranker(&self) -> VoiceRanker {
        VoiceRanker::new(self.ranker.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.speech_url, DEFAULT_SPEECH_URL);
        assert_eq!(config.ranker.language, "en");
    }

    #[test]
    fn test_config_reads_values() {
        let config = Config::from_lookup(lookup(&[
            ("SMART_VOCAB_DATA_DIR", "/tmp/vocab"),
            ("SMART_VOCAB_SPEECH_URL", "http://tts:8000"),
            ("SMART_VOCAB_WORDS_URL", "https://example.com/words.md"),
            ("SMART_VOCAB_LANG", "en-GB"),
            ("SMART_VOCAB_QUALITY_KEYWORDS", "Neural, premium,,"),
        ]));

        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/vocab")));
        assert_eq!(config.speech_url, "http://tts:8000");
        assert_eq!(config.words_url.as_deref(), Some("https://example.com/words.md"));
        assert_eq!(config.ranker.language, "en-GB");
        assert_eq!(config.ranker.quality_keywords, vec!["neural", "premium"]);
        assert_eq!(config.voice_ranker().config(), &config.ranker);
    }

    #[test]
    fn test_config_empty_speech_url_disables_speech() {
        let config = Config::from_lookup(lookup(&[("SMART_VOCAB_SPEECH_URL", "")]));
        assert_eq!(config.speech_url, "");
    }
}
