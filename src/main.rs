//! smart-vocab CLI entry point.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use smart_vocab::cli::{Args, StudyCommand};
use smart_vocab::config::Config;
use smart_vocab::library::{self, WordSource};
use smart_vocab::speech::{Narrator, SpeechHost, create_host};
use smart_vocab::state::{AppSettings, StudySession, StudyState};
use smart_vocab::storage::{FileStorage, MemoryStorage, Storage, Store};
use smart_vocab::words;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = Config::from_env();
    if let Some(dir) = &args.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(url) = &args.speech_url {
        config.speech_url = url.clone();
    }

    let store = Store::new(open_storage(&config));
    let mut state = store.load_state().context("Failed to load saved state")?;
    let narrator = Narrator::new(create_host(&config.speech_url), config.voice_ranker());
    let subscription = narrator.registry().on_voices_changed(|voices| {
        debug!(count = voices.len(), "voice list updated");
    });

    let mut acted = false;

    if let Some(arg) = &args.load_default {
        let source = default_source(arg, &config);
        let entries = library::load_words(&source).with_context(|| {
            format!(
                "Failed to load default word list from {}; import one with --import",
                source.describe()
            )
        })?;
        println!("Loaded {} words from {}", entries.len(), source.describe());
        state.replace_words(entries);
        store.save_words(&state.words).context("Failed to save word list")?;
        acted = true;
    }

    if let Some(path) = &args.import {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list: {}", path.display()))?;
        let count = state.reimport(&text);
        store.save_words(&state.words).context("Failed to save word list")?;
        println!(
            "Imported {} words ({} already mastered)",
            count,
            state.mastered_count()
        );
        acted = true;
    }

    if apply_settings(&args, &mut state.settings) {
        store.save_settings(&state.settings).context("Failed to save settings")?;
        acted = true;
    }

    if args.list_voices || args.voice.is_some() || args.speak.is_some() || args.study {
        narrator.refresh_voices();
        if let Some(uri) = &args.voice
            && !narrator.registry().voices().iter().any(|v| &v.voice_uri == uri)
        {
            warn!(voice = %uri, "selected voice is not offered by the speech host");
        }
        let offered = narrator.ranker().filter_language(&narrator.registry().voices());
        if state
            .settings
            .ensure_voice(&offered, &narrator.preferred_voices())
        {
            info!(voice = %state.settings.voice_uri, "selected default voice");
            store.save_settings(&state.settings).context("Failed to save settings")?;
        }
    }

    if args.list_voices {
        list_voices(&narrator, &state.settings);
        acted = true;
    }

    if args.units {
        list_units(&state);
        acted = true;
    }

    if args.export {
        print!("{}", words::serialize(&state.words));
        acted = true;
    }

    if let Some(text) = &args.speak {
        speak(&narrator, text, &state.settings, &args.output)?;
        acted = true;
    }

    if args.study {
        run_session(&mut state, &store, &narrator, args.unit.as_deref(), &args.output)?;
        acted = true;
    }

    subscription.unsubscribe();

    if !acted {
        eprintln!("No action specified. Use --import or --load-default to add words.");
        eprintln!("Use --study to practice.");
        eprintln!("Run with --help for usage information.");
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_storage(config: &Config) -> Box<dyn Storage> {
    if let Some(dir) = &config.data_dir {
        return Box::new(FileStorage::with_dir(dir.clone()));
    }

    match FileStorage::in_home() {
        Some(storage) => Box::new(storage),
        None => {
            warn!("no home directory, changes will not be saved");
            Box::new(MemoryStorage::new())
        }
    }
}

fn default_source(arg: &str, config: &Config) -> WordSource {
    if !arg.trim().is_empty() {
        return WordSource::from_arg(arg);
    }

    match &config.words_url {
        Some(url) => WordSource::Url(url.clone()),
        None => WordSource::Bundled,
    }
}

/// Apply settings flags. Returns whether anything changed.
fn apply_settings(args: &Args, settings: &mut AppSettings) -> bool {
    let before = settings.clone();

    if let Some(rate) = args.rate {
        settings.set_speech_rate(rate);
        if settings.speech_rate() != rate {
            warn!(requested = rate, used = settings.speech_rate(), "speech rate clamped");
        }
    }
    if let Some(hide) = args.hide_mastered {
        settings.hide_mastered = hide;
    }
    if let Some(uri) = &args.voice {
        settings.voice_uri = uri.clone();
    }

    *settings != before
}

fn list_voices<H: SpeechHost>(narrator: &Narrator<H>, settings: &AppSettings) {
    let ranked = narrator.ranker().rank(&narrator.registry().voices());

    if ranked.is_empty() {
        println!("No voices found.");
        return;
    }

    println!("Available voices ({}):", narrator.ranker().config().language);
    for entry in ranked {
        let selected = if entry.voice.voice_uri == settings.voice_uri {
            "*"
        } else {
            " "
        };
        let quality = if entry.high_quality { " [high quality]" } else { "" };
        println!(
            "{} {} ({}){}",
            selected,
            entry.voice.display_name(),
            entry.voice.lang,
            quality
        );
        println!("    URI: {} ({})", entry.voice.voice_uri, entry.voice.uri_suffix());
    }
}

fn list_units(state: &StudyState) {
    if state.words.is_empty() {
        println!("No words yet.");
        return;
    }

    for unit in state.units() {
        let words: Vec<_> = state.words.iter().filter(|w| w.unit == unit).collect();
        let mastered = words.iter().filter(|w| w.mastered).count();
        println!("{}: {} words, {} mastered", unit, words.len(), mastered);
    }
}

fn speak<H: SpeechHost>(
    narrator: &Narrator<H>,
    text: &str,
    settings: &AppSettings,
    output: &Path,
) -> Result<()> {
    let audio = narrator
        .speak(text, settings)
        .context("Failed to speak")?;

    if audio.is_empty() {
        debug!("speech host returned no audio");
        return Ok(());
    }

    fs::write(output, &audio)
        .with_context(|| format!("Failed to write audio to: {}", output.display()))?;
    println!("Audio saved to: {} ({} bytes)", output.display(), audio.len());

    Ok(())
}

fn run_session<S: Storage, H: SpeechHost>(
    state: &mut StudyState,
    store: &Store<S>,
    narrator: &Narrator<H>,
    unit: Option<&str>,
    output: &Path,
) -> Result<()> {
    if state.words.is_empty() {
        println!("No words yet. Use --load-default or --import first.");
        return Ok(());
    }

    if let Some(u) = unit
        && !state.has_unit(u)
    {
        println!("No words in {}. Units: {}", u, state.units().join(", "));
        return Ok(());
    }

    let mut session = StudySession::new(&state.visible_words(unit));
    println!("Type 'h' for commands.");

    loop {
        let Some(word) = session.current().and_then(|id| state.word(id)) else {
            println!("All words mastered! Turn off hiding with --hide-mastered false.");
            return Ok(());
        };

        let (position, total) = session.progress();
        let mark = if word.mastered { " (mastered)" } else { "" };
        println!("\n[{}/{}] {} · {}{}", position, total, word.unit, word.english, mark);
        if session.is_revealed() {
            for gloss in word.glosses() {
                println!("    {}", gloss);
            }
        }
        print!("|> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        let read = io::stdin()
            .read_line(&mut input)
            .context("Failed to read line from stdin")?;
        if read == 0 {
            return Ok(());
        }

        match input.parse::<StudyCommand>() {
            Ok(StudyCommand::Flip) => session.flip(),
            Ok(StudyCommand::Next) => session.next_card(),
            Ok(StudyCommand::Previous) => session.previous_card(),
            Ok(StudyCommand::ToggleMastered) => {
                let id = word.id.clone();
                state.toggle_mastery(&id);
                store.save_words(&state.words).context("Failed to save word list")?;
                session.sync(&state.visible_words(unit));
            }
            Ok(StudyCommand::Speak) => {
                let english = word.english.clone();
                if let Err(e) = speak(narrator, &english, &state.settings, output) {
                    eprintln!("{:#}", e);
                }
            }
            Ok(StudyCommand::Help) => StudyCommand::help(),
            Ok(StudyCommand::Quit) => {
                println!("Quitting...");
                return Ok(());
            }
            Err(e) => eprintln!("{}. Type 'h' for help.", e),
        }
    }
}
