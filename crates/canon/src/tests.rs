use std::collections::HashSet;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_verse_tables_cover_every_chapter() {
	for canon in BUILTIN_CANONS {
		assert_eq!(
			canon.chapter_total(),
			canon.verse_max.len(),
			"{}: chapter total must match verse-max table length",
			canon.name
		);
	}
}

#[test]
fn test_osis_ids_unique_per_canon() {
	for canon in BUILTIN_CANONS {
		let mut seen = HashSet::new();
		for book in canon.books() {
			assert!(seen.insert(book.osis), "{}: duplicate OSIS id {}", canon.name, book.osis);
		}
	}
}

#[test]
fn test_builtin_names_unique() {
	let names: HashSet<_> = BUILTIN_CANONS.iter().map(|c| c.name).collect();
	assert_eq!(names.len(), BUILTIN_CANONS.len());
}

#[test]
fn test_kjv_shape() {
	let kjv = builtin("KJV").unwrap();
	assert_eq!(kjv.old.len(), 39);
	assert_eq!(kjv.new.len(), 27);
	assert_eq!(kjv.chapter_total(), 1189);
	let verses: u32 = kjv.verse_max.iter().map(|&v| u32::from(v)).sum();
	assert_eq!(verses, 31102);
	assert_eq!(kjv.verse_max[0], 31);
}

#[test]
fn test_one_section_canons_use_empty_table() {
	for name in ["Leningrad", "MT", "Rahlfs"] {
		let canon = builtin(name).unwrap();
		assert!(canon.new.is_empty(), "{name} should have no new section");
		assert!(!canon.old.is_empty());
	}
}

#[test]
fn test_nrsv_shares_kjv_books() {
	let nrsv = builtin("NRSV").unwrap();
	assert_eq!(nrsv.old, canons::kjv::OLD);
	assert_eq!(nrsv.new, canons::kjv::NEW);
	assert_ne!(nrsv.verse_max, canons::kjv::VERSE_MAX);
}

#[test]
fn test_terminator_ends_section() {
	const OLD: &[BookSpec<'static>] = &[
		BookSpec::new("One", "One", "One", 2),
		BookSpec::new("", "", "", 0),
		BookSpec::new("Ignored", "Ign", "Ign", 5),
	];
	let canon = Canon {
		name: "T",
		old: OLD,
		new: canons::null::BOOKS,
		verse_max: &[3, 4],
	};
	assert_eq!(canon.book_count(), 1);
	assert_eq!(canon.chapter_total(), 2);
}

#[test]
fn test_unknown_builtin() {
	assert!(builtin("kjv").is_none());
	assert!(builtin("Null").is_none());
}
