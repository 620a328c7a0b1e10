//! Speech request/response types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::clamp_rate;

/// Errors that can occur when talking to the speech host.
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// One utterance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    #[serde(rename = "voiceURI", skip_serializing_if = "Option::is_none")]
    pub voice_uri: Option<String>,
    #[serde(default = "default_rate")]
    pub rate: f32,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_rate() -> f32 {
    1.0
}

fn default_lang() -> String {
    "en-US".to_string()
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_uri: None,
            rate: default_rate(),
            lang: default_lang(),
        }
    }

    pub fn with_voice(mut self, voice_uri: impl Into<String>) -> Self {
        self.voice_uri = Some(voice_uri.into());
        self
    }

    /// Set the rate, clamped to the supported range.
    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = clamp_rate(rate);
        self
    }
}
