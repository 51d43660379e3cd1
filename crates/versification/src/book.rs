//! A single canonical work and its per-chapter tables.

/// One book of a versification system.
///
/// `chapter_starts[i]` is the offset of the heading of chapter `i + 1`; the
/// verses of that chapter occupy the `verse_max[i]` offsets right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
	long_name: String,
	osis: String,
	abbrev: String,
	verse_max: Vec<u16>,
	chapter_starts: Vec<i64>,
}

impl Book {
	pub(crate) fn new(long_name: &str, osis: &str, abbrev: &str, chapters: usize) -> Self {
		Self {
			long_name: long_name.to_owned(),
			osis: osis.to_owned(),
			abbrev: abbrev.to_owned(),
			verse_max: Vec::with_capacity(chapters),
			chapter_starts: Vec::with_capacity(chapters),
		}
	}

	/// Appends a chapter whose heading sits at `start`.
	pub(crate) fn push_chapter(&mut self, start: i64, verse_max: u16) {
		debug_assert!(self.chapter_starts.last().is_none_or(|&prev| prev < start));
		self.chapter_starts.push(start);
		self.verse_max.push(verse_max);
	}

	pub fn long_name(&self) -> &str {
		&self.long_name
	}

	pub fn osis_name(&self) -> &str {
		&self.osis
	}

	pub fn preferred_abbrev(&self) -> &str {
		&self.abbrev
	}

	pub fn chapter_count(&self) -> usize {
		self.chapter_starts.len()
	}

	/// Highest valid verse of a 1-based chapter, or `None` outside `1..=chapter_count`.
	pub fn verse_max(&self, chapter: i32) -> Option<u16> {
		let idx = usize::try_from(chapter).ok()?.checked_sub(1)?;
		self.verse_max.get(idx).copied()
	}

	/// Offset of the heading of a 1-based chapter.
	pub fn chapter_start(&self, chapter: i32) -> Option<i64> {
		let idx = usize::try_from(chapter).ok()?.checked_sub(1)?;
		self.chapter_starts.get(idx).copied()
	}

	/// Offset of the book heading, one before the first chapter heading.
	#[inline]
	pub fn heading_offset(&self) -> i64 {
		self.first_chapter_start() - 1
	}

	/// Offset of the last verse slot of the last chapter.
	pub fn last_offset(&self) -> i64 {
		match (self.chapter_starts.last(), self.verse_max.last()) {
			(Some(&start), Some(&max)) => start + i64::from(max),
			_ => self.heading_offset(),
		}
	}

	/// Sum of all chapter verse maxima.
	pub fn verse_count(&self) -> u32 {
		self.verse_max.iter().map(|&v| u32::from(v)).sum()
	}

	/// Key used to order books by position in the offset space.
	#[inline]
	pub(crate) fn first_chapter_start(&self) -> i64 {
		self.chapter_starts.first().copied().unwrap_or_default()
	}

	pub(crate) fn chapter_starts(&self) -> &[i64] {
		&self.chapter_starts
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Book {
		let mut book = Book::new("Sample", "Smp", "Sm", 3);
		book.push_chapter(3, 4);
		book.push_chapter(8, 2);
		book.push_chapter(11, 0);
		book
	}

	#[test]
	fn test_verse_max_bounds() {
		let book = sample();
		assert_eq!(book.verse_max(1), Some(4));
		assert_eq!(book.verse_max(3), Some(0));
		assert_eq!(book.verse_max(0), None);
		assert_eq!(book.verse_max(4), None);
		assert_eq!(book.verse_max(-1), None);
	}

	#[test]
	fn test_offsets() {
		let book = sample();
		assert_eq!(book.heading_offset(), 2);
		assert_eq!(book.chapter_start(2), Some(8));
		assert_eq!(book.chapter_start(0), None);
		assert_eq!(book.last_offset(), 11);
		assert_eq!(book.verse_count(), 6);
		assert_eq!(book.chapter_count(), 3);
	}

	#[test]
	fn test_identity_fields() {
		let book = sample();
		assert_eq!(book.long_name(), "Sample");
		assert_eq!(book.osis_name(), "Smp");
		assert_eq!(book.preferred_abbrev(), "Sm");
	}
}
