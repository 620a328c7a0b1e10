//! Application state: word list, settings and the study cursor.
//!
//! State is a plain value. Callers mutate it through these methods and
//! persist it with [`crate::storage::Store`] when a transition completes.

mod session;
mod settings;
mod study;

pub use session::StudySession;
pub use settings::{AppSettings, MAX_SPEECH_RATE, MIN_SPEECH_RATE, clamp_rate};
pub use study::StudyState;
