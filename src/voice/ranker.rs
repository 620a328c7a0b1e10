//! Heuristic voice ranking.

use std::cmp::Ordering;

use tracing::debug;

use super::descriptor::VoiceDescriptor;

/// Keywords that usually mark a natural-sounding voice.
pub const DEFAULT_QUALITY_KEYWORDS: [&str; 11] = [
    "enhanced",
    "premium",
    "plus",
    "hi-fi",
    "high",
    "natural",
    "online",
    "jenny",
    "microsoft ana",
    "sonia",
    "samantha",
];

/// How ranked voices are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankOrder {
    /// High-quality voices first, source order otherwise.
    #[default]
    Quality,
    /// By name, longer voice URI first within the same name.
    Name,
}

/// Ranking parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankerConfig {
    /// Language prefix, matched against the start of `lang`.
    pub language: String,
    pub quality_keywords: Vec<String>,
    pub order: RankOrder,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            quality_keywords: DEFAULT_QUALITY_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            order: RankOrder::Quality,
        }
    }
}

/// A voice together with its quality classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedVoice {
    pub voice: VoiceDescriptor,
    pub high_quality: bool,
}

/// Ranks voices so better choices come first.
#[derive(Debug, Clone, Default)]
pub struct VoiceRanker {
    config: RankerConfig,
}

impl VoiceRanker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Voices whose language starts with the configured prefix.
    pub fn filter_language(&self, voices: &[VoiceDescriptor]) -> Vec<VoiceDescriptor> {
        voices
            .iter()
            .filter(|v| v.lang.starts_with(&self.config.language))
            .cloned()
            .collect()
    }

    /// Classify `voice` against the other voices in `all`.
    ///
    /// A keyword hit on name or URI wins outright. Otherwise, among voices
    /// sharing name and language, the one with the longest URI counts as
    /// the enhanced variant.
    pub fn is_high_quality(&self, voice: &VoiceDescriptor, all: &[VoiceDescriptor]) -> bool {
        if self.config.quality_keywords.iter().any(|k| voice.mentions(k)) {
            return true;
        }

        let siblings: Vec<_> = all
            .iter()
            .filter(|v| v.name == voice.name && v.lang == voice.lang)
            .collect();
        if siblings.len() < 2 {
            return false;
        }

        // Ties go to the later sibling.
        let longest = siblings.iter().copied().fold(siblings[0], |best, v| {
            if best.voice_uri.len() > v.voice_uri.len() {
                best
            } else {
                v
            }
        });
        longest.voice_uri == voice.voice_uri
    }

    /// Filter by language, classify and order.
    ///
    /// With [`RankOrder::Quality`] and no high-quality voice, the result is
    /// the language-filtered list in its original order.
    pub fn rank(&self, voices: &[VoiceDescriptor]) -> Vec<RankedVoice> {
        let filtered = self.filter_language(voices);
        let mut ranked: Vec<RankedVoice> = filtered
            .iter()
            .map(|v| RankedVoice {
                high_quality: self.is_high_quality(v, &filtered),
                voice: v.clone(),
            })
            .collect();

        match self.config.order {
            RankOrder::Quality => ranked.sort_by_key(|r| !r.high_quality),
            RankOrder::Name => ranked.sort_by(|a, b| by_name(&a.voice, &b.voice)),
        }

        debug!(
            total = voices.len(),
            matched = ranked.len(),
            high_quality = ranked.iter().filter(|r| r.high_quality).count(),
            "ranked voices"
        );
        ranked
    }

    /// High-quality voices in ranked order, or every language match when
    /// none qualifies. The first element is the default voice.
    pub fn preferred(&self, voices: &[VoiceDescriptor]) -> Vec<VoiceDescriptor> {
        let ranked = self.rank(voices);
        let premium: Vec<_> = ranked
            .iter()
            .filter(|r| r.high_quality)
            .map(|r| r.voice.clone())
            .collect();

        if premium.is_empty() {
            ranked.into_iter().map(|r| r.voice).collect()
        } else {
            premium
        }
    }
}

fn by_name(a: &VoiceDescriptor, b: &VoiceDescriptor) -> Ordering {
    a.name
        .cmp(&b.name)
        .then_with(|| b.voice_uri.len().cmp(&a.voice_uri.len()))
}
