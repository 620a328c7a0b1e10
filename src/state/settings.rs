//! User preferences.

use serde::{Deserialize, Serialize};

use crate::voice::VoiceDescriptor;

pub const MIN_SPEECH_RATE: f32 = 0.5;
pub const MAX_SPEECH_RATE: f32 = 2.0;

/// Clamp a speech rate into the supported range. NaN becomes 1.0.
pub fn clamp_rate(rate: f32) -> f32 {
    if rate.is_nan() {
        return 1.0;
    }
    rate.clamp(MIN_SPEECH_RATE, MAX_SPEECH_RATE)
}

/// Persisted application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    speech_rate: f32,
    #[serde(rename = "voiceURI")]
    pub voice_uri: String,
    pub hide_mastered: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            speech_rate: 1.0,
            voice_uri: String::new(),
            hide_mastered: false,
        }
    }
}

impl AppSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_speech_rate(mut self, rate: f32) -> Self {
        self.set_speech_rate(rate);
        self
    }

    pub fn speech_rate(&self) -> f32 {
        self.speech_rate
    }

    pub fn set_speech_rate(&mut self, rate: f32) {
        self.speech_rate = clamp_rate(rate);
    }

    /// Re-apply invariants after deserialization.
    pub fn normalized(mut self) -> Self {
        self.speech_rate = clamp_rate(self.speech_rate);
        self
    }

    /// Select the first preferred voice when none is chosen or the chosen
    /// one is not among the `offered` voices of the study language.
    /// Returns whether the selection changed.
    pub fn ensure_voice(
        &mut self,
        offered: &[VoiceDescriptor],
        preferred: &[VoiceDescriptor],
    ) -> bool {
        let Some(first) = preferred.first() else {
            return false;
        };

        let valid = offered.iter().any(|v| v.voice_uri == self.voice_uri);
        if !self.voice_uri.is_empty() && valid {
            return false;
        }

        self.voice_uri = first.voice_uri.clone();
        true
    }
}
