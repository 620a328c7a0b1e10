//! Text-to-speech host communication.
//!
//! The host owns the actual voices and audio output. This module defines
//! the capability it has to offer, an HTTP implementation, a no-op
//! fallback, and the [`Narrator`] that picks a voice and enforces
//! cancel-before-speak.

mod client;
mod narrator;
mod types;

pub use client::HttpSpeechHost;
pub use narrator::Narrator;
pub use types::{SpeechError, SpeechRequest};

use crate::voice::VoiceDescriptor;

/// Trait for a text-to-speech host.
///
/// This trait abstracts the platform speech engine, allowing for mock
/// implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait SpeechHost: Send + Sync {
    /// List the installed voices.
    fn voices(&self) -> Result<Vec<VoiceDescriptor>, SpeechError>;

    /// Stop the utterance in progress, if any.
    fn cancel(&self);

    /// Speak a request.
    ///
    /// # Returns
    /// Audio produced for the utterance; empty when the host plays it
    /// directly.
    fn speak(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError>;
}

/// Host used when no speech engine is available. Lists no voices and
/// speaks nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl SpeechHost for NullHost {
    fn voices(&self) -> Result<Vec<VoiceDescriptor>, SpeechError> {
        Ok(Vec::new())
    }

    fn cancel(&self) {}

    fn speak(&self, _request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        Ok(Vec::new())
    }
}

impl<T: SpeechHost + ?Sized> SpeechHost for Box<T> {
    fn voices(&self) -> Result<Vec<VoiceDescriptor>, SpeechError> {
        (**self).voices()
    }

    fn cancel(&self) {
        (**self).cancel()
    }

    fn speak(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        (**self).speak(request)
    }
}

/// Create a host for `speech_url`, or the no-op host when it is empty.
pub fn create_host(speech_url: &str) -> Box<dyn SpeechHost> {
    if speech_url.trim().is_empty() {
        Box::new(NullHost)
    } else {
        Box::new(HttpSpeechHost::new(speech_url))
    }
}
