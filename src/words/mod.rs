//! Word list parsing and serialization.
//!
//! A word list is plain text with one `english - chinese` pair per line.
//! Multiple glosses are separated with `|`, and `---Unit <N>---` lines
//! start a new unit for every entry that follows.

mod entry;
mod parser;

pub use entry::{DEFAULT_UNIT, WordEntry};
pub use parser::{
    EMPTY_CHINESE, EMPTY_ENGLISH, parse, parse_line, reimport, serialize, unit_marker,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn triples(entries: &[WordEntry]) -> Vec<(String, String, String)> {
        entries
            .iter()
            .map(|e| (e.english.clone(), e.chinese.clone(), e.unit.clone()))
            .collect()
    }

    // ===========================================
    // parse tests
    // ===========================================

    #[test]
    fn test_parse_multiple_glosses() {
        let entries = parse("Apple - 苹果 | 沙果");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].english, "Apple");
        assert_eq!(entries[0].chinese, "苹果\n沙果");
        assert_eq!(entries[0].unit, "General");
        assert!(!entries[0].mastered);
    }

    #[test]
    fn test_parse_unit_marker() {
        let entries = parse("---Unit 1---\nDog - 狗");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].english, "Dog");
        assert_eq!(entries[0].unit, "Unit 1");
    }

    #[test]
    fn test_parse_unit_marker_case_insensitive() {
        let entries = parse("---UNIT 12---\nCat - 猫\n---unit3---\nCow - 牛");

        assert_eq!(entries[0].unit, "Unit 12");
        assert_eq!(entries[1].unit, "Unit 3");
    }

    #[test]
    fn test_parse_invalid_line_is_skipped() {
        let entries = parse("not a valid line\n");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let entries = parse("\n   \nDog - 狗\n\n\nCat - 猫\n");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_parse_splits_on_first_dash_only() {
        let entries = parse("well-known - 众所周知 - 著名");

        assert_eq!(entries[0].english, "well");
        assert_eq!(entries[0].chinese, "known-众所周知-著名");
    }

    #[test]
    fn test_parse_empty_fields_get_placeholders() {
        let entries = parse(" - 狗\nCat - ");

        assert_eq!(entries[0].english, EMPTY_ENGLISH);
        assert_eq!(entries[0].chinese, "狗");
        assert_eq!(entries[1].english, "Cat");
        assert_eq!(entries[1].chinese, EMPTY_CHINESE);
    }

    #[test]
    fn test_parse_units_are_contiguous_in_source_order() {
        let text = "Sun - 太阳\n---Unit 1---\nDog - 狗\nCat - 猫\n---Unit 2---\nCow - 牛";
        let entries = parse(text);

        let units: Vec<_> = entries.iter().map(|e| e.unit.as_str()).collect();
        assert_eq!(units, vec!["General", "Unit 1", "Unit 1", "Unit 2"]);
        let english: Vec<_> = entries.iter().map(|e| e.english.as_str()).collect();
        assert_eq!(english, vec!["Sun", "Dog", "Cat", "Cow"]);
    }

    #[test]
    fn test_parse_ids_are_unique() {
        let entries = parse("a - 1\nb - 2\nc - 3\na - 1");
        let ids: HashSet<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn test_parse_handles_crlf() {
        let entries = parse("Dog - 狗\r\nCat - 猫 | 猫咪\r\n");
        assert_eq!(entries[1].chinese, "猫\n猫咪");
    }

    #[test]
    fn test_unit_marker_non_marker_lines() {
        assert_eq!(unit_marker("---Unit---"), None);
        assert_eq!(unit_marker("Unit 1 - 第一单元"), None);
    }

    // ===========================================
    // serialize tests
    // ===========================================

    #[test]
    fn test_serialize_emits_markers_on_unit_change() {
        let entries = vec![
            WordEntry::new("Sun", "太阳", "General"),
            WordEntry::new("Dog", "狗", "Unit 1"),
            WordEntry::new("Cat", "猫\n猫咪", "Unit 1"),
            WordEntry::new("Cow", "牛", "Unit 2"),
        ];

        let text = serialize(&entries);
        assert_eq!(
            text,
            "Sun - 太阳\n---Unit 1---\nDog - 狗\nCat - 猫 | 猫咪\n---Unit 2---\nCow - 牛\n"
        );
    }

    #[test]
    fn test_serialize_empty_list() {
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn test_round_trip_is_stable() {
        let text = "\
Hello - 你好
  Apple -  苹果|沙果
---Unit 1---
well-known - 众所周知
Dog - 狗 | 犬 |
---unit 2---
junk line
Cow -
";
        let first = parse(text);
        let second = parse(&serialize(&first));

        assert_eq!(triples(&first), triples(&second));
    }

    #[test]
    fn test_round_trip_dashes_never_form_unit_marker() {
        let first = parse("a - b - - -Unit 1 - - -\nc - d");
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].chinese, "b---Unit 1---");

        let text = serialize(&first);
        assert!(!text.contains("---"));

        let second = parse(&text);
        assert_eq!(triples(&first), triples(&second));
        assert!(second.iter().all(|w| w.unit == "General"));
    }

    // ===========================================
    // reimport tests
    // ===========================================

    #[test]
    fn test_reimport_preserves_mastered_case_insensitive() {
        let mut existing = parse("Apple - 苹果\nDog - 狗");
        existing[0].mastered = true;

        let entries = reimport(&existing, "APPLE - 苹果 | 沙果\ndog - 狗\nCat - 猫");

        assert_eq!(entries.len(), 3);
        assert!(entries[0].mastered);
        assert!(!entries[1].mastered);
        assert!(!entries[2].mastered);
    }

    #[test]
    fn test_reimport_assigns_fresh_ids() {
        let existing = parse("Apple - 苹果");
        let entries = reimport(&existing, "Apple - 苹果");
        assert_ne!(entries[0].id, existing[0].id);
    }

    // ===========================================
    // WordEntry tests
    // ===========================================

    #[test]
    fn test_entry_deserialize_without_unit() {
        let json = r#"{"id": "word-1", "english": "Dog", "chinese": "狗", "mastered": true}"#;
        let entry: WordEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.unit, DEFAULT_UNIT);
        assert!(entry.mastered);
    }

    #[test]
    fn test_entry_glosses() {
        let entry = WordEntry::new("Apple", "苹果\n沙果", DEFAULT_UNIT);
        let glosses: Vec<_> = entry.glosses().collect();
        assert_eq!(glosses, vec!["苹果", "沙果"]);
    }
}
