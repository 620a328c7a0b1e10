//! Voice ranking and the current voice list.
//!
//! The speech host reports whatever voices the platform has installed.
//! This module narrows them down to the study language and pushes the
//! natural-sounding ones to the top, so the first entry is a sensible
//! default and the selection list can flag the better variants.

mod descriptor;
mod ranker;
mod registry;

pub use descriptor::VoiceDescriptor;
pub use ranker::{DEFAULT_QUALITY_KEYWORDS, RankOrder, RankedVoice, RankerConfig, VoiceRanker};
pub use registry::{Subscription, VoiceRegistry};
