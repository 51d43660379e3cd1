use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::load::load_canon_dir;
use super::*;
use crate::address::VerseRef;

const TINY: &str = r#"
name = "Tiny"

[[old]]
name = "Genesis"
osis = "Gen"
verses = [3, 2]

[[new]]
name = "Matthew"
osis = "Matt"
abbrev = "Mt"
verses = [2]
"#;

#[test]
fn test_parse_canon_file() {
	let file = CanonFile::from_toml_str(TINY).unwrap();
	assert_eq!(file.name, "Tiny");
	assert_eq!(file.old.len(), 1);
	assert_eq!(file.old[0].verses, vec![3, 2]);
	assert_eq!(file.old[0].abbrev, None);
	assert_eq!(file.new[0].abbrev.as_deref(), Some("Mt"));
}

#[test]
fn test_unknown_field_rejected() {
	let err = CanonFile::from_toml_str("name = \"X\"\nbooks = []\n").unwrap_err();
	assert!(err.to_string().contains("books"), "{err}");
}

#[test]
fn test_to_system_layout() {
	let system = CanonFile::from_toml_str(TINY).unwrap().to_system().unwrap();
	assert_eq!(system.name(), "Tiny");
	assert_eq!(system.book_count(), 2);

	// 0 module, 1 old, 2 Gen, 3 Gen 1, 4..=6 verses, 7 Gen 2, 8..=9 verses.
	assert_eq!(system.offset_from_verse(1, 1, 1), Ok(4));
	assert_eq!(system.offset_from_verse(1, 2, 2), Ok(9));
	assert_eq!(system.nt_start_offset(), 9);
	// 10 new, 11 Matt, 12 Matt 1, 13..=14 verses.
	assert_eq!(system.offset_from_verse(2, 1, 1), Ok(13));
	assert_eq!(system.last_offset(), 14);
	assert_eq!(system.verse_from_offset(13).verse, VerseRef::new(2, 1, 1));
}

#[test]
fn test_abbrev_defaults_to_osis() {
	let system = CanonFile::from_toml_str(TINY).unwrap().to_system().unwrap();
	assert_eq!(system.book(1).unwrap().preferred_abbrev(), "Gen");
	assert_eq!(system.book(2).unwrap().preferred_abbrev(), "Mt");
}

#[test]
fn test_book_without_chapters_skipped() {
	let text = r#"
name = "Sparse"

[[old]]
name = "Empty"
osis = "Empty"
verses = []

[[old]]
name = "Ruth"
osis = "Ruth"
verses = [22, 23, 18, 22]
"#;
	let system = CanonFile::from_toml_str(text).unwrap().to_system().unwrap();
	assert_eq!(system.book_count(), 1);
	assert_eq!(system.book(1).unwrap().osis_name(), "Ruth");
	assert_eq!(system.section_book_count(crate::address::Section::New), 0);
}

#[test]
fn test_duplicate_osis_is_canon_error() {
	let text = r#"
name = "Dup"

[[old]]
name = "A"
osis = "Gen"
verses = [1]

[[new]]
name = "B"
osis = "Gen"
verses = [1]
"#;
	let err = CanonFile::from_toml_str(text).unwrap().to_system().unwrap_err();
	assert!(matches!(err, ConfigError::Canon(CanonError::DuplicateOsis { ref osis }) if osis == "Gen"), "{err:?}");
}

#[test]
fn test_empty_name_is_canon_error() {
	let err = CanonFile::from_toml_str("name = \"\"\n").unwrap().to_system().unwrap_err();
	assert!(matches!(err, ConfigError::Canon(CanonError::EmptyName)), "{err:?}");
}

#[test]
fn test_register_canon_file_replaces_existing() {
	let mut mgr = VersificationMgr::new();
	let file = CanonFile::from_toml_str(TINY).unwrap();
	let first = mgr.register_canon_file(&file).unwrap();
	let second = mgr.register_canon_file(&file).unwrap();
	assert_eq!(mgr.len(), 1);
	assert!(!Arc::ptr_eq(&first, &second));
	assert!(Arc::ptr_eq(&mgr.system("Tiny").unwrap(), &second));
}

#[test]
fn test_load_reports_io_error() {
	let tmp = TempDir::new().unwrap();
	let err = CanonFile::load(&tmp.path().join("absent.toml")).unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }), "{err:?}");
}

#[test]
fn test_load_canon_dir_collects_per_file() {
	let tmp = TempDir::new().unwrap();
	fs::write(tmp.path().join("b_tiny.toml"), TINY).unwrap();
	fs::write(tmp.path().join("a_other.toml"), TINY.replace("Tiny", "Other")).unwrap();
	fs::write(tmp.path().join("broken.toml"), "name = ").unwrap();
	fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();
	fs::create_dir(tmp.path().join("nested.toml")).unwrap();

	let report = load_canon_dir(tmp.path());
	let names: Vec<&str> = report.canons.iter().map(|(_, file)| file.name.as_str()).collect();
	assert_eq!(names, vec!["Other", "Tiny"]);
	assert_eq!(report.errors.len(), 1);
	assert!(report.errors[0].0.ends_with("broken.toml"));
	assert!(matches!(report.errors[0].1, ConfigError::Parse { .. }));
}

#[test]
fn test_load_canon_dir_missing_is_empty() {
	let tmp = TempDir::new().unwrap();
	let report = load_canon_dir(&tmp.path().join("nope"));
	assert!(report.canons.is_empty());
	assert!(report.errors.is_empty());
}

#[test]
fn test_report_register_into() {
	let tmp = TempDir::new().unwrap();
	fs::write(tmp.path().join("tiny.toml"), TINY).unwrap();
	fs::write(tmp.path().join("zero.toml"), "name = \"\"\n").unwrap();

	let mut report = load_canon_dir(tmp.path());
	let mut mgr = VersificationMgr::new();
	assert_eq!(report.register_into(&mut mgr), 1);
	assert_eq!(mgr.system_names(), vec!["Tiny".to_string()]);
	assert_eq!(report.errors.len(), 1);
	assert!(report.errors[0].0.ends_with("zero.toml"));
}
