//! CLI argument definitions and study-session commands.

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Vocabulary flashcards with spoken pronunciation.
#[derive(Parser, Debug)]
#[command(name = "smart-vocab")]
#[command(about = "English-Chinese vocabulary flashcards with text-to-speech")]
#[command(version)]
pub struct Args {
    /// Replace the word list with a text file ("english - chinese | chinese2" per line)
    #[arg(short, long)]
    pub import: Option<PathBuf>,

    /// Print the word list in import format
    #[arg(short, long)]
    pub export: bool,

    /// Load a default word list: a file, an http(s) URL, or the bundled list when omitted
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub load_default: Option<String>,

    /// List units with their word counts
    #[arg(long)]
    pub units: bool,

    /// Start an interactive flashcard session
    #[arg(short, long)]
    pub study: bool,

    /// Restrict the study session to one unit (e.g. "Unit 1")
    #[arg(short, long)]
    pub unit: Option<String>,

    /// List ranked voices from the speech server
    #[arg(long)]
    pub list_voices: bool,

    /// Select a voice by URI
    #[arg(long)]
    pub voice: Option<String>,

    /// Speech rate (0.5 to 2.0)
    #[arg(short, long)]
    pub rate: Option<f32>,

    /// Hide mastered words in study sessions
    #[arg(long)]
    pub hide_mastered: Option<bool>,

    /// Speak a word and save the audio
    #[arg(long)]
    pub speak: Option<String>,

    /// Output audio file for --speak
    #[arg(short, long, default_value = "speech.wav")]
    pub output: PathBuf,

    /// Speech server base URL (empty disables speech)
    #[arg(long)]
    pub speech_url: Option<String>,

    /// Directory for saved words and settings
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// A command typed during a study session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyCommand {
    Flip,
    Next,
    Previous,
    ToggleMastered,
    Speak,
    Help,
    Quit,
}

/// Errors that can occur when reading a study command.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Unknown command: {0}")]
    Unknown(String),
}

impl StudyCommand {
    pub fn help() {
        println!("Available commands:");
        println!("  <enter>, f - Flip the card");
        println!("  n          - Next card");
        println!("  p          - Previous card");
        println!("  m          - Toggle mastered");
        println!("  s          - Speak the word");
        println!("  h          - Show this help message");
        println!("  q          - Quit the study session");
    }
}

impl FromStr for StudyCommand {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "f" | "flip" => Ok(Self::Flip),
            "n" | "next" => Ok(Self::Next),
            "p" | "prev" | "previous" => Ok(Self::Previous),
            "m" | "mastered" => Ok(Self::ToggleMastered),
            "s" | "speak" => Ok(Self::Speak),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}
