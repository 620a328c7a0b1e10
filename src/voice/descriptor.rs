//! Voice descriptors as reported by the speech host.

use serde::{Deserialize, Serialize};

const VENDOR_PREFIXES: [&str; 3] = ["Microsoft ", "Google ", "Apple "];

/// Metadata for a text-to-speech voice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoiceDescriptor {
    pub name: String,
    #[serde(rename = "voiceURI")]
    pub voice_uri: String,
    pub lang: String,
}

impl VoiceDescriptor {
    pub fn new(
        name: impl Into<String>,
        voice_uri: impl Into<String>,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            voice_uri: voice_uri.into(),
            lang: lang.into(),
        }
    }

    /// Name without the platform vendor prefix.
    pub fn display_name(&self) -> String {
        VENDOR_PREFIXES
            .iter()
            .fold(self.name.clone(), |name, prefix| name.replace(prefix, ""))
    }

    /// Last dot-separated segment of the voice URI.
    ///
    /// Platforms tend to put the quality variant there
    /// (`com.apple.voice.enhanced.en-US.Ava` → `Ava`).
    pub fn uri_suffix(&self) -> &str {
        self.voice_uri
            .rsplit('.')
            .next()
            .unwrap_or(self.voice_uri.as_str())
    }

    pub(crate) fn mentions(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword)
            || self.voice_uri.to_lowercase().contains(&keyword)
    }
}
