use std::sync::LazyLock;

use proptest::prelude::*;
use verso_canon::{BookSpec, canons};

use super::System;
use crate::address::{Address, LookupStatus, Section, VerseRef};
use crate::error::{CanonError, VersificationError};

static KJV: LazyLock<System> = LazyLock::new(|| System::from_canon(&canons::kjv::CANON).unwrap());

#[test]
fn test_genesis_first_chapter() {
	let v = KJV.offset_from_verse(1, 1, 1).unwrap();
	assert_eq!(v, 4);
	assert_eq!(KJV.offset_from_verse(1, 1, 0).unwrap(), v - 1);

	let loc = KJV.verse_from_offset(v);
	assert_eq!(loc.verse, VerseRef::new(1, 1, 1));
	assert!(loc.is_ok());

	// One past Genesis 1:31 is the heading of chapter 2.
	let loc = KJV.verse_from_offset(v + 31);
	assert_eq!(loc.verse, VerseRef::new(1, 2, 0));
	assert_eq!(loc.status, LookupStatus::Ok);
}

#[test]
fn test_kjv_section_layout() {
	assert_eq!(KJV.book_count(), 66);
	assert_eq!(KJV.section_book_count(Section::Old), 39);
	assert_eq!(KJV.section_book_count(Section::New), 27);
	// 1 section heading + 39 book headings + 929 chapter headings + 23145 verses
	assert_eq!(KJV.nt_start_offset(), 24114);
	assert_eq!(KJV.section_heading_offset(Section::New), 24115);
	assert_eq!(KJV.offset_from_verse(40, 0, 0).unwrap(), 24116);
	assert_eq!(KJV.offset_from_verse(40, 1, 1).unwrap(), 24118);
	assert_eq!(KJV.last_offset(), 32359);
}

#[test]
fn test_book_heading_precedes_first_chapter() {
	for number in 1..=KJV.book_count() as i32 {
		let heading = KJV.offset_from_verse(number, 0, 0).unwrap();
		assert_eq!(heading, KJV.offset_from_verse(number, 1, 0).unwrap() - 1);
		// The verse is ignored for book headings.
		assert_eq!(KJV.offset_from_verse(number, 0, 7).unwrap(), heading);
	}
}

#[test]
fn test_section_boundary() {
	let mal = KJV.book_number_by_osis("Mal").unwrap();
	let matt = KJV.book_number_by_osis("Matt").unwrap();
	let last_old_verse = KJV.offset_from_verse(mal, 4, 6).unwrap();
	let first_new_heading = KJV.offset_from_verse(matt, 0, 0).unwrap();
	assert!(first_new_heading > last_old_verse);
	assert_eq!(first_new_heading - last_old_verse, 2);

	let loc = KJV.verse_from_offset(last_old_verse + 1);
	assert_eq!(loc.verse, VerseRef::new(matt, -1, 0));
	assert!(loc.is_ok());
}

#[test]
fn test_out_of_bounds_at_corpus_end() {
	let rev = KJV.book_number_by_osis("Rev").unwrap();
	let probe = KJV.offset_from_verse(rev, 22, 22).unwrap();
	let loc = KJV.verse_from_offset(probe);
	assert_eq!(loc.verse, VerseRef::new(rev, 22, 22));
	assert_eq!(loc.status, LookupStatus::OutOfBounds);
	assert_eq!(
		KJV.classify(probe),
		Address::OutOfBounds {
			book: rev,
			chapter: 22,
			verse: 22
		}
	);
}

#[test]
fn test_out_of_bounds_without_new_section() {
	let leningrad = System::from_canon(&canons::leningrad::CANON).unwrap();
	let last = leningrad.book_count() as i32;
	let neh = leningrad.book(last).unwrap();
	assert_eq!(neh.osis_name(), "Neh");
	let max = i32::from(neh.verse_max(13).unwrap());

	let loc = leningrad.verse_from_offset(leningrad.offset_from_verse(last, 13, max + 1).unwrap());
	assert_eq!(loc.verse, VerseRef::new(last, 13, max + 1));
	assert_eq!(loc.status, LookupStatus::OutOfBounds);
}

#[test]
fn test_one_past_chapter_inside_book_is_next_heading() {
	let gen_50 = KJV.offset_from_verse(1, 49, 34).unwrap();
	assert_eq!(KJV.verse_from_offset(gen_50).verse, VerseRef::new(1, 50, 0));

	let exod = KJV.offset_from_verse(1, 50, 27).unwrap();
	assert_eq!(KJV.verse_from_offset(exod).verse, VerseRef::new(2, 0, 0));
}

#[test]
fn test_module_heading_and_negative_offsets() {
	let loc = KJV.verse_from_offset(0);
	assert_eq!(loc.verse, VerseRef::MODULE_HEADING);
	assert_eq!(loc.status, LookupStatus::Ok);

	let loc = KJV.verse_from_offset(-3);
	assert_eq!(loc.verse, VerseRef::new(-1, 0, 0));
	assert_eq!(loc.status, LookupStatus::Error);
	assert_eq!(KJV.classify(-3), Address::Invalid(-3));
}

#[test]
fn test_old_section_heading() {
	let loc = KJV.verse_from_offset(1);
	assert_eq!(loc.verse, VerseRef::new(0, -1, 0));
	assert!(loc.is_ok());
}

#[test]
fn test_far_past_end_does_not_overflow() {
	let loc = KJV.verse_from_offset(i64::MAX);
	assert_eq!(loc.verse.book, 66);
	assert_eq!(loc.verse.chapter, 22);
	assert_eq!(loc.verse.verse, i32::MAX);
	assert_eq!(loc.status, LookupStatus::OutOfBounds);
}

#[test]
fn test_forward_errors() {
	assert_eq!(KJV.offset_from_verse(0, 1, 1), Err(VersificationError::BookNotFound { book: 0 }));
	assert_eq!(KJV.offset_from_verse(67, 1, 1), Err(VersificationError::BookNotFound { book: 67 }));
	assert_eq!(KJV.offset_from_verse(-2, 1, 1), Err(VersificationError::BookNotFound { book: -2 }));
	assert_eq!(
		KJV.offset_from_verse(1, 51, 1),
		Err(VersificationError::ChapterNotFound { book: 1, chapter: 51 })
	);
	assert_eq!(
		KJV.offset_from_verse(1, -1, 0),
		Err(VersificationError::ChapterNotFound { book: 1, chapter: -1 })
	);
}

#[test]
fn test_forward_does_not_bound_verse() {
	let past = KJV.offset_from_verse(1, 1, 40).unwrap();
	assert_eq!(past, KJV.offset_from_verse(1, 1, 0).unwrap() + 40);
}

#[test]
fn test_osis_lookup_matches_position() {
	for (idx, book) in KJV.books().iter().enumerate() {
		assert_eq!(KJV.book_number_by_osis(book.osis_name()), Some(idx as i32 + 1));
	}
	assert_eq!(KJV.book_number_by_osis("Tob"), None);
	assert_eq!(KJV.book_number_by_osis("gen"), None);
}

#[test]
fn test_book_lookup_is_one_based() {
	assert_eq!(KJV.book(1).unwrap().osis_name(), "Gen");
	assert_eq!(KJV.book(66).unwrap().osis_name(), "Rev");
	assert!(KJV.book(0).is_none());
	assert!(KJV.book(67).is_none());
	assert_eq!(KJV.section_of(39), Some(Section::Old));
	assert_eq!(KJV.section_of(40), Some(Section::New));
	assert_eq!(KJV.section_of(0), None);
}

#[test]
fn test_clone_is_deep() {
	let copy = KJV.clone();
	drop(copy.clone());
	assert_eq!(copy.name(), "KJV");
	assert_eq!(copy.books(), KJV.books());
	assert_eq!(copy.book_number_by_osis("John"), KJV.book_number_by_osis("John"));
	assert_eq!(copy.nt_start_offset(), KJV.nt_start_offset());
}

#[test]
fn test_zero_verse_chapters() {
	let kjva = System::from_canon(&canons::kjva::CANON).unwrap();
	let add_esth = kjva.book_number_by_osis("AddEsth").unwrap();
	let book = kjva.book(add_esth).unwrap();
	assert_eq!(book.verse_max(1), Some(0));

	let first = kjva.offset_from_verse(add_esth, 1, 0).unwrap();
	let second = kjva.offset_from_verse(add_esth, 2, 0).unwrap();
	assert_eq!(second, first + 1);
	assert_eq!(kjva.classify(first), Address::ChapterHeading { book: add_esth, chapter: 1 });
	assert_eq!(kjva.classify(second), Address::ChapterHeading { book: add_esth, chapter: 2 });
}

#[test]
fn test_short_verse_table() {
	const OLD: &[BookSpec<'static>] = &[BookSpec::new("Alpha", "Alp", "A", 3)];
	let err = System::from_tables("short", OLD, &[], &[1, 2]).unwrap_err();
	assert_eq!(
		err,
		CanonError::VerseTableTooShort {
			book: "Alp".into(),
			needed: 3,
			available: 2
		}
	);
}

#[test]
fn test_duplicate_osis() {
	const OLD: &[BookSpec<'static>] = &[BookSpec::new("Alpha", "Alp", "A", 1)];
	let err = System::from_tables("dup", OLD, OLD, &[1, 1]).unwrap_err();
	assert_eq!(err, CanonError::DuplicateOsis { osis: "Alp".into() });
}

#[test]
fn test_empty_name() {
	assert_eq!(System::from_tables("", &[], &[], &[]).unwrap_err(), CanonError::EmptyName);
}

#[test]
fn test_surplus_verse_entries_are_ignored() {
	const OLD: &[BookSpec<'static>] = &[BookSpec::new("Alpha", "Alp", "A", 1)];
	let system = System::from_tables("surplus", OLD, &[], &[4, 9, 9]).unwrap();
	assert_eq!(system.book(1).unwrap().verse_max(1), Some(4));
	assert_eq!(system.last_offset(), system.section_heading_offset(Section::New));
}

#[test]
fn test_terminator_stops_table() {
	const OLD: &[BookSpec<'static>] = &[
		BookSpec::new("Alpha", "Alp", "A", 1),
		BookSpec::new("", "", "", 0),
		BookSpec::new("Beta", "Bet", "B", 1),
	];
	let system = System::from_tables("terminated", OLD, &[], &[5]).unwrap();
	assert_eq!(system.book_count(), 1);
	assert_eq!(system.book_number_by_osis("Bet"), None);
}

fn kjv_key() -> impl Strategy<Value = (i32, i32, i32)> {
	(1..=66i32)
		.prop_flat_map(|book| {
			let chapters = KJV.book(book).unwrap().chapter_count() as i32;
			(Just(book), 1..=chapters)
		})
		.prop_flat_map(|(book, chapter)| {
			let max = i32::from(KJV.book(book).unwrap().verse_max(chapter).unwrap());
			(Just(book), Just(chapter), 0..=max)
		})
}

proptest! {
	#[test]
	fn prop_round_trip((book, chapter, verse) in kjv_key()) {
		let offset = KJV.offset_from_verse(book, chapter, verse).unwrap();
		let loc = KJV.verse_from_offset(offset);
		prop_assert_eq!(loc.verse, VerseRef::new(book, chapter, verse));
		prop_assert_eq!(loc.status, LookupStatus::Ok);
	}

	#[test]
	fn prop_monotonic(a in kjv_key(), b in kjv_key()) {
		let oa = KJV.offset_from_verse(a.0, a.1, a.2).unwrap();
		let ob = KJV.offset_from_verse(b.0, b.1, b.2).unwrap();
		prop_assert_eq!(a.cmp(&b), oa.cmp(&ob));
	}

	#[test]
	fn prop_inverse_never_panics(offset in any::<i64>()) {
		let loc = KJV.verse_from_offset(offset);
		if offset < 0 {
			prop_assert_eq!(loc.status, LookupStatus::Error);
		} else if offset <= KJV.last_offset() {
			prop_assert_eq!(loc.status, LookupStatus::Ok);
		} else {
			prop_assert_eq!(loc.status, LookupStatus::OutOfBounds);
		}
	}
}
