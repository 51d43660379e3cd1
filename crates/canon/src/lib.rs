//! Canon tables consumed by the versification engine.
//!
//! A canon is three ordered tables: the old-section book descriptors, the
//! new-section book descriptors, and one flat array holding the highest verse
//! number of every chapter of every book, in book order then chapter order.
//!
//! The tables are plain data. Building offsets from them is the job of
//! `verso-versification`.

pub mod canons;

/// Descriptor of one book in a canon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookSpec<'a> {
	/// Long display name (e.g. "I Samuel").
	pub name: &'a str,
	/// OSIS identifier (e.g. "1Sam").
	pub osis: &'a str,
	/// Preferred abbreviation.
	pub abbrev: &'a str,
	/// Number of chapters. Zero terminates a table.
	pub chapters: u16,
}

impl<'a> BookSpec<'a> {
	pub const fn new(name: &'a str, osis: &'a str, abbrev: &'a str, chapters: u16) -> Self {
		Self {
			name,
			osis,
			abbrev,
			chapters,
		}
	}

	/// Returns true for the zero-chapter terminator.
	#[inline]
	pub const fn is_terminator(&self) -> bool {
		self.chapters == 0
	}
}

/// One complete canon: both section tables plus the flat verse-max table.
#[derive(Debug, Clone, Copy)]
pub struct Canon {
	pub name: &'static str,
	pub old: &'static [BookSpec<'static>],
	pub new: &'static [BookSpec<'static>],
	pub verse_max: &'static [u16],
}

impl Canon {
	/// Books in table order, old section first, stopping each section at its terminator.
	pub fn books(&self) -> impl Iterator<Item = &'static BookSpec<'static>> {
		section(self.old).chain(section(self.new))
	}

	pub fn book_count(&self) -> usize {
		self.books().count()
	}

	/// Total chapters described by the book tables.
	pub fn chapter_total(&self) -> usize {
		self.books().map(|b| usize::from(b.chapters)).sum()
	}
}

fn section(table: &'static [BookSpec<'static>]) -> impl Iterator<Item = &'static BookSpec<'static>> {
	table.iter().take_while(|b| !b.is_terminator())
}

/// Every built-in canon, in registration order.
pub static BUILTIN_CANONS: &[Canon] = &[
	canons::kjv::CANON,
	canons::leningrad::CANON,
	canons::mt::CANON,
	canons::kjva::CANON,
	canons::nrsv::CANON,
	canons::nrsva::CANON,
	canons::synodal::CANON,
	canons::vulg::CANON,
	canons::german::CANON,
	canons::luther::CANON,
	canons::catholic::CANON,
	canons::catholic2::CANON,
	canons::rahlfs::CANON,
	canons::lxx::CANON,
	canons::orthodox::CANON,
];

/// Looks up a built-in canon by its registry name.
pub fn builtin(name: &str) -> Option<&'static Canon> {
	BUILTIN_CANONS.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests;
