//! CLI argument parsing and study-session commands.

mod args;

pub use args::{Args, CommandParseError, StudyCommand};
