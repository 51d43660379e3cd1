//! Construction of a system from canon tables.

use verso_canon::{BookSpec, Canon};

use super::System;
use crate::book::Book;
use crate::error::CanonError;

impl System {
	/// Builds a system from old and new section tables and the flat verse-max table.
	///
	/// A descriptor with zero chapters ends its table. Surplus verse-max entries
	/// are ignored with a warning.
	pub fn from_tables(name: &str, old: &[BookSpec<'_>], new: &[BookSpec<'_>], verse_max: &[u16]) -> Result<Self, CanonError> {
		if name.is_empty() {
			return Err(CanonError::EmptyName);
		}

		let mut loader = Loader {
			system: System::empty(name),
			verse_max,
			cursor: 0,
			offset: 0, // module heading
		};

		loader.offset += 1; // old-section heading
		loader.system.section_counts[0] = loader.load_section(old)?;

		loader.system.nt_start_offset = loader.offset;
		loader.offset += 1; // new-section heading
		loader.system.section_counts[1] = loader.load_section(new)?;

		if loader.cursor < verse_max.len() {
			tracing::warn!(
				system = name,
				used = loader.cursor,
				available = verse_max.len(),
				"verse table has surplus entries"
			);
		}

		Ok(loader.system)
	}

	pub fn from_canon(canon: &Canon) -> Result<Self, CanonError> {
		Self::from_tables(canon.name, canon.old, canon.new, canon.verse_max)
	}
}

struct Loader<'t> {
	system: System,
	verse_max: &'t [u16],
	cursor: usize,
	/// Last occupied slot.
	offset: i64,
}

impl Loader<'_> {
	fn load_section(&mut self, table: &[BookSpec<'_>]) -> Result<usize, CanonError> {
		let mut loaded = 0;
		for spec in table.iter().take_while(|b| !b.is_terminator()) {
			self.load_book(spec)?;
			loaded += 1;
		}
		Ok(loaded)
	}

	fn load_book(&mut self, spec: &BookSpec<'_>) -> Result<(), CanonError> {
		let chapters = usize::from(spec.chapters);
		let end = self.cursor + chapters;
		let maxima = self.verse_max.get(self.cursor..end).ok_or_else(|| CanonError::VerseTableTooShort {
			book: spec.osis.to_owned(),
			needed: end,
			available: self.verse_max.len(),
		})?;

		let mut book = Book::new(spec.name, spec.osis, spec.abbrev, chapters);
		self.offset += 1; // book heading
		for &max in maxima {
			self.offset += 1; // chapter heading
			book.push_chapter(self.offset, max);
			self.offset += i64::from(max);
		}
		self.cursor = end;

		let system = &mut self.system;
		if system.osis_index.contains_key(spec.osis) {
			return Err(CanonError::DuplicateOsis {
				osis: spec.osis.to_owned(),
			});
		}
		system.books.push(book);
		system.osis_index.insert(spec.osis.to_owned(), system.books.len());
		Ok(())
	}
}
