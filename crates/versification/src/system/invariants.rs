#![allow(dead_code)]

use verso_canon::{BUILTIN_CANONS, BookSpec, canons};

use super::System;
use crate::address::{Address, LookupStatus, Section, VerseRef};

fn builtin_systems() -> Vec<System> {
	BUILTIN_CANONS
		.iter()
		.map(|c| System::from_canon(c).expect("built-in canon must load"))
		.collect()
}

const TWO_BOOKS: &[BookSpec<'static>] = &[BookSpec::new("Alpha", "Alp", "A", 2), BookSpec::new("Beta", "Bet", "B", 1)];
const ONE_BOOK: &[BookSpec<'static>] = &[BookSpec::new("Gamma", "Gam", "G", 3)];

/// Small canons covering every section shape: both sections, empty new,
/// empty old, zero-verse chapters and no books at all.
pub(crate) fn synthetic_systems() -> Vec<System> {
	vec![
		System::from_tables("both", TWO_BOOKS, ONE_BOOK, &[2, 1, 3, 1, 0, 2]).unwrap(),
		System::from_tables("old-only", TWO_BOOKS, canons::null::BOOKS, &[1, 2, 1]).unwrap(),
		System::from_tables("new-only", canons::null::BOOKS, TWO_BOOKS, &[3, 1, 2]).unwrap(),
		System::from_tables("hollow", ONE_BOOK, canons::null::BOOKS, &[0, 0, 1]).unwrap(),
		System::from_tables("empty", canons::null::BOOKS, canons::null::BOOKS, &[]).unwrap(),
	]
}

fn assert_strictly_increasing(system: &System) {
	let mut prev = 1; // old-section heading
	for (idx, book) in system.books().iter().enumerate() {
		assert!(book.heading_offset() > prev, "{}: book {} heading overlaps", system.name(), idx + 1);
		for &start in book.chapter_starts() {
			assert!(start > prev, "{}: chapter start {start} not after {prev}", system.name());
			prev = start;
		}
		prev = book.last_offset();
	}
	assert!(system.last_offset() >= prev);
}

/// Invariant: every heading and verse occupies its own strictly increasing slot.
pub(crate) fn inv_offsets_strictly_increasing() {
	for system in builtin_systems().iter().chain(synthetic_systems().iter()) {
		assert_strictly_increasing(system);
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_offsets_strictly_increasing() {
	inv_offsets_strictly_increasing()
}

fn assert_round_trip(system: &System) {
	for (idx, book) in system.books().iter().enumerate() {
		let number = idx as i32 + 1;

		let heading = system.offset_from_verse(number, 0, 0).unwrap();
		let loc = system.verse_from_offset(heading);
		assert_eq!(loc.verse, VerseRef::new(number, 0, 0), "{}: book heading {number}", system.name());
		assert_eq!(loc.status, LookupStatus::Ok);

		for chapter in 1..=book.chapter_count() as i32 {
			let max = i32::from(book.verse_max(chapter).unwrap());
			for verse in 0..=max {
				let offset = system.offset_from_verse(number, chapter, verse).unwrap();
				let loc = system.verse_from_offset(offset);
				assert_eq!(
					loc.verse,
					VerseRef::new(number, chapter, verse),
					"{}: offset {offset} did not round-trip",
					system.name()
				);
				assert_eq!(loc.status, LookupStatus::Ok);
			}
		}
	}
}

/// Invariant: the inverse mapping is the exact left inverse of the forward mapping.
pub(crate) fn inv_round_trip_builtins() {
	for system in builtin_systems() {
		assert_round_trip(&system);
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_round_trip_builtins() {
	inv_round_trip_builtins()
}

/// Walks every slot of a system and checks that each one resolves to a unit
/// whose forward mapping lands on the same slot.
fn walk_every_offset(system: &System) {
	let empty_new = system.section_book_count(Section::New) == 0;
	let new_heading = system.section_heading_offset(Section::New);

	for offset in 0..=system.last_offset() {
		let address = system.classify(offset);
		match address {
			Address::ModuleHeading => assert_eq!(offset, 0),
			Address::SectionHeading(section) => {
				assert_eq!(offset, system.section_heading_offset(section), "{}: section heading", system.name())
			}
			Address::BookHeading { book } => {
				assert_eq!(system.offset_from_verse(book, 0, 0), Ok(offset), "{}: book heading", system.name())
			}
			Address::ChapterHeading { book, chapter } => {
				assert_eq!(system.offset_from_verse(book, chapter, 0), Ok(offset), "{}: chapter heading", system.name())
			}
			Address::Verse { book, chapter, verse } => {
				assert_eq!(system.offset_from_verse(book, chapter, verse), Ok(offset), "{}: verse", system.name())
			}
			Address::OutOfBounds { .. } => {
				assert!(empty_new && offset == new_heading, "{}: offset {offset} out of bounds", system.name())
			}
			Address::Invalid(_) => panic!("{}: offset {offset} invalid", system.name()),
		}
	}

	let past_end = system.classify(system.last_offset() + 1);
	assert!(matches!(past_end, Address::OutOfBounds { .. }), "{}: past end resolved to {past_end:?}", system.name());
}

/// Invariant: every slot of a small canon resolves to the unit that owns it.
pub(crate) fn inv_exhaustive_walk_synthetic() {
	for system in synthetic_systems() {
		walk_every_offset(&system);
	}
	for name in ["KJV", "Leningrad", "KJVA"] {
		let canon = verso_canon::builtin(name).unwrap();
		walk_every_offset(&System::from_canon(canon).unwrap());
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_exhaustive_walk_synthetic() {
	inv_exhaustive_walk_synthetic()
}

/// Invariant: module, section, book and chapter headings each classify as themselves.
pub(crate) fn inv_heading_classes() {
	let kjv = System::from_canon(&canons::kjv::CANON).unwrap();
	assert_eq!(kjv.classify(0), Address::ModuleHeading);
	assert_eq!(kjv.classify(1), Address::SectionHeading(Section::Old));
	assert_eq!(kjv.classify(2), Address::BookHeading { book: 1 });
	assert_eq!(kjv.classify(3), Address::ChapterHeading { book: 1, chapter: 1 });
	assert_eq!(kjv.classify(4), Address::Verse { book: 1, chapter: 1, verse: 1 });

	let new_heading = kjv.section_heading_offset(Section::New);
	assert_eq!(kjv.classify(new_heading - 1), Address::Verse { book: 39, chapter: 4, verse: 6 });
	assert_eq!(kjv.classify(new_heading), Address::SectionHeading(Section::New));
	assert_eq!(kjv.classify(new_heading + 1), Address::BookHeading { book: 40 });
	assert_eq!(kjv.classify(new_heading + 2), Address::ChapterHeading { book: 40, chapter: 1 });

	let new_only = System::from_tables("new-only", canons::null::BOOKS, TWO_BOOKS, &[3, 1, 2]).unwrap();
	assert_eq!(new_only.classify(1), Address::SectionHeading(Section::Old));
	assert_eq!(new_only.classify(2), Address::SectionHeading(Section::New));
	assert_eq!(new_only.classify(3), Address::BookHeading { book: 1 });
}

#[cfg_attr(test, test)]
pub(crate) fn test_heading_classes() {
	inv_heading_classes()
}
