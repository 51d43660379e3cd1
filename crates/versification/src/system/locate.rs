//! Inverse mapping: linear offset to verse key.
//!
//! Books are searched by their heading slot (first chapter start minus one).
//! The only slots that precede a book heading without belonging to the book
//! before it are the two section headings, so those are resolved up front in
//! [`System::section_heading_at`] instead of correcting the search afterwards.

use super::System;
use crate::address::{Location, LookupStatus, Section, VerseRef};
use crate::book::Book;

impl System {
	/// Maps a linear offset back to `(book, chapter, verse)`.
	///
	/// Book and book-heading conventions:
	/// - negative offset: `(-1, 0, 0)` with [`LookupStatus::Error`]
	/// - module heading (0): `(-1, 0, 0)`
	/// - old-section heading: `(0, -1, 0)`
	/// - new-section heading: `(first new book, -1, 0)`
	/// - book heading: `(book, 0, 0)`; chapter heading: `(book, chapter, 0)`
	///
	/// Offsets past the last verse of a chapter with nothing after them resolve
	/// to the best-effort key with [`LookupStatus::OutOfBounds`].
	pub fn verse_from_offset(&self, offset: i64) -> Location {
		if offset < 0 {
			return Location {
				verse: VerseRef::MODULE_HEADING,
				status: LookupStatus::Error,
			};
		}
		if offset == 0 {
			return Location::ok(-1, 0, 0);
		}
		if let Some(heading) = self.section_heading_at(offset) {
			return heading;
		}
		match self.book_containing(offset) {
			Some((number, book)) => locate_in_book(number, book, offset),
			// Empty system: nothing follows the section headings.
			None => Location {
				verse: VerseRef::new(0, -1, 0),
				status: LookupStatus::OutOfBounds,
			},
		}
	}

	/// Resolves the section heading slots.
	///
	/// The new-section heading sits one slot before the first new book's heading,
	/// so a plain search by heading would attribute it to the last old book.
	/// With an empty new section that slot heads nothing and resolves out of
	/// bounds on the last old book.
	fn section_heading_at(&self, offset: i64) -> Option<Location> {
		if offset == self.section_heading_offset(Section::Old) {
			return Some(Location::ok(0, -1, 0));
		}
		let old_books = self.section_counts[0];
		if offset == self.section_heading_offset(Section::New) && self.books.len() > old_books {
			return Some(Location::ok(old_books as i32 + 1, -1, 0));
		}
		None
	}

	/// Last book whose heading is at or before `offset`, with its 1-based number.
	fn book_containing(&self, offset: i64) -> Option<(i32, &Book)> {
		let idx = self.books.partition_point(|b| b.heading_offset() <= offset);
		let book = self.books.get(idx.checked_sub(1)?)?;
		Some((idx as i32, book))
	}
}

fn locate_in_book(number: i32, book: &Book, offset: i64) -> Location {
	let starts = book.chapter_starts();
	let idx = starts.partition_point(|&start| start <= offset);
	let Some(&start) = idx.checked_sub(1).and_then(|i| starts.get(i)) else {
		// Before the first chapter heading but not before the book heading.
		return Location::ok(number, 0, 0);
	};

	let chapter = idx as i32;
	let verse = i32::try_from(offset - start).unwrap_or(i32::MAX);
	let status = match book.verse_max(chapter) {
		Some(max) if verse <= i32::from(max) => LookupStatus::Ok,
		_ => LookupStatus::OutOfBounds,
	};
	Location {
		verse: VerseRef::new(number, chapter, verse),
		status,
	}
}
