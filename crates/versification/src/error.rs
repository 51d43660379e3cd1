//! Error types for system construction and address mapping.

/// Errors from the forward mapping (verse key to offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VersificationError {
	/// Book number outside `1..=book_count`.
	#[error("book {book} not found")]
	BookNotFound { book: i32 },
	/// Non-zero chapter outside `1..=chapter_count` of an existing book.
	#[error("chapter {chapter} not found in book {book}")]
	ChapterNotFound { book: i32, chapter: i32 },
}

/// Errors raised while building a system from canon tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
	/// The flat verse-max table ran out before every chapter was described.
	#[error("verse table too short at {book}: needed {needed} entries, have {available}")]
	VerseTableTooShort {
		book: String,
		needed: usize,
		available: usize,
	},
	/// Two books in the same system share an OSIS identifier.
	#[error("duplicate OSIS id {osis:?}")]
	DuplicateOsis { osis: String },
	/// System names must be non-empty.
	#[error("system name is empty")]
	EmptyName,
}
