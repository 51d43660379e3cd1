#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Versification systems and the bijection between verse keys and offsets.
//!
//! # Mental Model
//!
//! A system flattens its hierarchy into one integer space. Every structural
//! unit takes exactly one slot, in this order:
//!
//! ```text
//! 0            module heading
//! 1            old-section heading
//! 2            heading of book 1
//! 3            heading of chapter 1:1
//! 4..          verses of chapter 1:1, then the next chapter heading, ...
//! ntStart + 1  new-section heading, then the new-section books
//! ```
//!
//! [`System::offset_from_verse`] maps `(book, chapter, verse)` to a slot and
//! [`System::verse_from_offset`] maps a slot back.
//!
//! # Invariants
//!
//! - Chapter starts are strictly increasing across the whole system.
//!   - Enforced in: [`build`] (running offset counter).
//!   - Tested by: [`invariants::test_offsets_strictly_increasing`]
//!   - Failure symptom: two keys share one storage slot.
//!
//! - The inverse mapping is the exact left inverse of the forward mapping.
//!   - Enforced in: [`locate`].
//!   - Tested by: [`invariants::test_round_trip_builtins`], [`invariants::test_exhaustive_walk_synthetic`]
//!   - Failure symptom: reads return the neighbouring book's text.
//!
//! - Every heading slot resolves to its own heading class, never to a verse of a neighbour.
//!   - Enforced in: [`locate`] (`section_heading_at`).
//!   - Tested by: [`invariants::test_heading_classes`]
//!   - Failure symptom: section headings reported as the previous book's last verse.
//!
//! # Concurrency
//!
//! A built system is immutable. `System` is `Send + Sync` and shared as `Arc<System>`.

use rustc_hash::FxHashMap;

use crate::address::{Address, Location, LookupStatus, Section};
use crate::book::Book;
use crate::error::VersificationError;

mod build;
mod locate;

#[cfg(any(test, doc))]
pub(crate) mod invariants;

#[cfg(test)]
mod tests;

/// A named versification system.
#[derive(Debug, Clone)]
pub struct System {
	name: String,
	books: Vec<Book>,
	section_counts: [usize; 2],
	nt_start_offset: i64,
	osis_index: FxHashMap<String, usize>,
}

impl System {
	fn empty(name: &str) -> Self {
		Self {
			name: name.to_owned(),
			books: Vec::new(),
			section_counts: [0, 0],
			nt_start_offset: 0,
			osis_index: FxHashMap::default(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn book_count(&self) -> usize {
		self.books.len()
	}

	/// Books in offset order, old section first.
	pub fn books(&self) -> &[Book] {
		&self.books
	}

	/// Returns the book with the given 1-based number.
	pub fn book(&self, number: i32) -> Option<&Book> {
		let idx = usize::try_from(number).ok()?.checked_sub(1)?;
		self.books.get(idx)
	}

	/// Returns the 1-based number of the book with the given OSIS id.
	pub fn book_number_by_osis(&self, osis: &str) -> Option<i32> {
		self.osis_index.get(osis).map(|&n| n as i32)
	}

	pub fn section_book_count(&self, section: Section) -> usize {
		self.section_counts[section.index()]
	}

	/// Section a 1-based book number belongs to.
	pub fn section_of(&self, number: i32) -> Option<Section> {
		self.book(number)?;
		if (number as usize) <= self.section_counts[0] {
			Some(Section::Old)
		} else {
			Some(Section::New)
		}
	}

	/// Last slot of the old section; the new-section heading follows it.
	pub fn nt_start_offset(&self) -> i64 {
		self.nt_start_offset
	}

	pub fn section_heading_offset(&self, section: Section) -> i64 {
		match section {
			Section::Old => 1,
			Section::New => self.nt_start_offset + 1,
		}
	}

	/// Highest offset occupied by any heading or verse.
	pub fn last_offset(&self) -> i64 {
		let nt_heading = self.section_heading_offset(Section::New);
		self.books.last().map_or(nt_heading, |b| b.last_offset().max(nt_heading))
	}

	/// Maps a verse key to its linear offset.
	///
	/// Chapter `0` addresses the book heading (the verse is ignored) and verse
	/// `0` the chapter heading. The verse is not checked against the chapter's
	/// maximum, so one-past-the-end offsets can be probed.
	pub fn offset_from_verse(&self, book: i32, chapter: i32, verse: i32) -> Result<i64, VersificationError> {
		let b = self.book(book).ok_or(VersificationError::BookNotFound { book })?;
		if chapter == 0 {
			return Ok(b.heading_offset());
		}
		let start = b
			.chapter_start(chapter)
			.ok_or(VersificationError::ChapterNotFound { book, chapter })?;
		Ok(start + i64::from(verse))
	}

	/// Typed view of [`System::verse_from_offset`].
	pub fn classify(&self, offset: i64) -> Address {
		let Location { verse: v, status } = self.verse_from_offset(offset);
		match status {
			LookupStatus::Error => Address::Invalid(offset),
			LookupStatus::OutOfBounds => Address::OutOfBounds {
				book: v.book,
				chapter: v.chapter,
				verse: v.verse,
			},
			LookupStatus::Ok if v.book < 0 => Address::ModuleHeading,
			LookupStatus::Ok if v.chapter < 0 => {
				Address::SectionHeading(if v.book == 0 { Section::Old } else { Section::New })
			}
			LookupStatus::Ok if v.chapter == 0 => Address::BookHeading { book: v.book },
			LookupStatus::Ok if v.verse == 0 => Address::ChapterHeading {
				book: v.book,
				chapter: v.chapter,
			},
			LookupStatus::Ok => Address::Verse {
				book: v.book,
				chapter: v.chapter,
				verse: v.verse,
			},
		}
	}
}
