//! HTTP client for a speech server.

use tracing::debug;

use super::SpeechHost;
use super::types::{SpeechError, SpeechRequest};
use crate::voice::VoiceDescriptor;

/// Speech host reached over HTTP.
///
/// Endpoints: `GET /voices` returns a JSON voice list, `POST /cancel`
/// stops the current utterance, `POST /synthesize` takes a
/// [`SpeechRequest`] and answers with audio bytes.
pub struct HttpSpeechHost {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSpeechHost {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl SpeechHost for HttpSpeechHost {
    fn voices(&self) -> Result<Vec<VoiceDescriptor>, SpeechError> {
        let url = format!("{}/voices", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| SpeechError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SpeechError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))
    }

    fn cancel(&self) {
        let url = format!("{}/cancel", self.base_url);

        // Nothing to cancel is the common case.
        if let Err(e) = self.client.post(&url).send() {
            debug!(error = %e, "cancel request failed");
        }
    }

    fn speak(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        let url = format!("{}/synthesize", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| SpeechError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SpeechError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))
    }
}
