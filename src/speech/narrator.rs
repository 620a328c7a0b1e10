//! Speaking words with the user's chosen voice.

use tracing::{debug, warn};

use super::SpeechHost;
use super::types::{SpeechError, SpeechRequest};
use crate::state::AppSettings;
use crate::voice::{VoiceDescriptor, VoiceRanker, VoiceRegistry};

/// Resolves voices and forwards utterances to a [`SpeechHost`].
pub struct Narrator<H: SpeechHost> {
    host: H,
    ranker: VoiceRanker,
    registry: VoiceRegistry,
}

impl<H: SpeechHost> Narrator<H> {
    pub fn new(host: H, ranker: VoiceRanker) -> Self {
        Self {
            host,
            ranker,
            registry: VoiceRegistry::new(),
        }
    }

    pub fn registry(&self) -> &VoiceRegistry {
        &self.registry
    }

    pub fn ranker(&self) -> &VoiceRanker {
        &self.ranker
    }

    /// Pull the host's voice list into the registry.
    ///
    /// A host that cannot enumerate voices leaves an empty list.
    pub fn refresh_voices(&self) -> Vec<VoiceDescriptor> {
        let voices = match self.host.voices() {
            Ok(voices) => voices,
            Err(e) => {
                warn!(error = %e, "speech host did not list voices");
                Vec::new()
            }
        };
        self.registry.replace(voices.clone());
        voices
    }

    /// Preferred voices from the last refresh, best first.
    pub fn preferred_voices(&self) -> Vec<VoiceDescriptor> {
        self.ranker.preferred(&self.registry.voices())
    }

    /// Voice used for `settings`: the selected one while the host still
    /// offers it, otherwise the best preferred voice.
    pub fn resolve_voice(&self, settings: &AppSettings) -> Option<String> {
        let voices = self.registry.voices();
        if voices.iter().any(|v| v.voice_uri == settings.voice_uri) {
            return Some(settings.voice_uri.clone());
        }

        self.ranker
            .preferred(&voices)
            .into_iter()
            .next()
            .map(|v| v.voice_uri)
    }

    /// Speak `text`, cutting off whatever is still playing.
    ///
    /// Returns the audio the host produced, empty for blank text.
    pub fn speak(&self, text: &str, settings: &AppSettings) -> Result<Vec<u8>, SpeechError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let mut request = SpeechRequest::new(text).with_rate(settings.speech_rate());
        if let Some(voice_uri) = self.resolve_voice(settings) {
            request = request.with_voice(voice_uri);
        }

        debug!(text, voice = ?request.voice_uri, rate = request.rate, "speaking");
        self.host.cancel();
        self.host.speak(&request)
    }
}
