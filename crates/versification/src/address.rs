//! Hierarchical addresses produced by the inverse mapping.

use std::fmt;

/// One of the two top-level partitions of a canon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
	Old,
	New,
}

impl Section {
	#[inline]
	pub(crate) const fn index(self) -> usize {
		match self {
			Section::Old => 0,
			Section::New => 1,
		}
	}
}

/// Raw `(book, chapter, verse)` triple.
///
/// Books are 1-based. Chapter `0` is the book heading and verse `0` the chapter
/// heading. Negative chapters mark section headings; book `-1` marks the module
/// heading or an invalid offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerseRef {
	pub book: i32,
	pub chapter: i32,
	pub verse: i32,
}

impl VerseRef {
	pub const MODULE_HEADING: VerseRef = VerseRef::new(-1, 0, 0);

	pub const fn new(book: i32, chapter: i32, verse: i32) -> Self {
		Self { book, chapter, verse }
	}
}

impl fmt::Display for VerseRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}:{}", self.book, self.chapter, self.verse)
	}
}

/// Outcome of resolving an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupStatus {
	Ok,
	/// The verse exceeds its chapter's maximum. The reference is still populated.
	OutOfBounds,
	/// The offset was negative.
	Error,
}

/// Result of [`System::verse_from_offset`](crate::System::verse_from_offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
	pub verse: VerseRef,
	pub status: LookupStatus,
}

impl Location {
	pub(crate) const fn ok(book: i32, chapter: i32, verse: i32) -> Self {
		Self {
			verse: VerseRef::new(book, chapter, verse),
			status: LookupStatus::Ok,
		}
	}

	#[inline]
	pub fn is_ok(&self) -> bool {
		self.status == LookupStatus::Ok
	}
}

/// Typed classification of a linear offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
	ModuleHeading,
	SectionHeading(Section),
	BookHeading { book: i32 },
	ChapterHeading { book: i32, chapter: i32 },
	Verse { book: i32, chapter: i32, verse: i32 },
	/// Past the last verse of its chapter with no following structural unit.
	OutOfBounds { book: i32, chapter: i32, verse: i32 },
	/// Negative offset.
	Invalid(i64),
}

impl Address {
	/// True for every heading class (module, section, book, chapter).
	pub fn is_heading(&self) -> bool {
		matches!(
			self,
			Address::ModuleHeading | Address::SectionHeading(_) | Address::BookHeading { .. } | Address::ChapterHeading { .. }
		)
	}
}
