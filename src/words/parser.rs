//! Conversion between freeform word-list text and word entries.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::entry::{DEFAULT_UNIT, WordEntry};

/// Placeholder for a line whose English side is empty.
pub const EMPTY_ENGLISH: &str = "Empty";

/// Placeholder for a line whose Chinese side is empty ("no definition").
pub const EMPTY_CHINESE: &str = "无解释";

static UNIT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)---Unit\s*(\d+)---").expect("unit marker pattern is valid")
});

static GLOSS_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\|\s*").expect("gloss separator pattern is valid"));

/// Return the unit label if `line` is a unit marker.
///
/// # Examples
/// ```
/// use smart_vocab::words::unit_marker;
/// assert_eq!(unit_marker("---unit 3---").as_deref(), Some("Unit 3"));
/// assert_eq!(unit_marker("Dog - 狗"), None);
/// ```
pub fn unit_marker(line: &str) -> Option<String> {
    UNIT_MARKER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|n| format!("Unit {}", n.as_str()))
}

/// Split an `english - chinese | chinese2` line into its two fields.
///
/// Only the first `-` separates the fields. Returns `None` when the line
/// has no separator.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let (english, rest) = line.split_once('-')?;

    let english = english.trim();
    let rest = rest.split('-').map(str::trim).collect::<Vec<_>>().join("-");
    let chinese = GLOSS_SEPARATOR.replace_all(&rest, "\n");
    let chinese = chinese.trim();

    let english = if english.is_empty() {
        EMPTY_ENGLISH
    } else {
        english
    };
    let chinese = if chinese.is_empty() {
        EMPTY_CHINESE
    } else {
        chinese
    };

    Some((english.to_string(), chinese.to_string()))
}

/// Parse a block of text into word entries, in source order.
///
/// Blank lines and lines that are neither unit markers nor
/// `english - chinese` pairs are skipped.
pub fn parse(text: &str) -> Vec<WordEntry> {
    let mut current_unit = DEFAULT_UNIT.to_string();
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(unit) = unit_marker(line) {
            current_unit = unit;
            continue;
        }

        match parse_line(line) {
            Some((english, chinese)) => {
                entries.push(WordEntry::new(english, chinese, current_unit.as_str()));
            }
            None => skipped += 1,
        }
    }

    debug!(entries = entries.len(), skipped, "parsed word list");
    entries
}

/// Write entries back to text that [`parse`] accepts.
///
/// A unit marker is emitted whenever the unit changes, except for the
/// default unit which has no marker. Dashes inside glosses are written as
/// ` - ` so consecutive dashes never read back as a unit marker.
pub fn serialize(entries: &[WordEntry]) -> String {
    let mut out = String::new();
    let mut previous_unit: Option<&str> = None;

    for entry in entries {
        if previous_unit != Some(entry.unit.as_str()) && entry.unit != DEFAULT_UNIT {
            out.push_str(&format!("---{}---\n", entry.unit));
        }
        previous_unit = Some(entry.unit.as_str());

        let glosses = entry
            .glosses()
            .map(|gloss| gloss.replace('-', " - "))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(&format!("{} - {}\n", entry.english, glosses));
    }

    out
}

/// Parse `text` as a replacement for `existing`.
///
/// Entries whose English term matches an existing entry (ignoring case)
/// keep that entry's mastered flag.
pub fn reimport(existing: &[WordEntry], text: &str) -> Vec<WordEntry> {
    let mut entries = parse(text);
    let mut preserved = 0usize;

    for entry in &mut entries {
        if let Some(previous) = existing.iter().find(|w| w.same_term(&entry.english)) {
            entry.mastered = previous.mastered;
            if previous.mastered {
                preserved += 1;
            }
        }
    }

    debug!(preserved, "carried mastery over on re-import");
    entries
}
