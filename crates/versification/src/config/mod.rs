//! User-defined canons loaded from TOML files.
//!
//! ```toml
//! name = "MyCanon"
//!
//! [[old]]
//! name = "Genesis"
//! osis = "Gen"
//! verses = [31, 25]
//!
//! [[new]]
//! name = "Matthew"
//! osis = "Matt"
//! abbrev = "Mt"
//! verses = [25]
//! ```
//!
//! Each book lists the highest verse of every chapter; the chapter count is the
//! length of that list. `abbrev` defaults to the OSIS id.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use verso_canon::BookSpec;

use crate::error::CanonError;
use crate::mgr::VersificationMgr;
use crate::system::System;

pub mod load;

#[cfg(test)]
mod tests;

/// Result type for canon file operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Canon file errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
	#[error("book {osis} has {chapters} chapters; at most {max} are supported")]
	TooManyChapters { osis: String, chapters: usize, max: usize },
	#[error(transparent)]
	Canon(#[from] CanonError),
}

/// One book entry of a canon file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookEntry {
	pub name: String,
	pub osis: String,
	#[serde(default)]
	pub abbrev: Option<String>,
	pub verses: Vec<u16>,
}

/// A parsed canon file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanonFile {
	pub name: String,
	#[serde(default)]
	pub old: Vec<BookEntry>,
	#[serde(default)]
	pub new: Vec<BookEntry>,
}

impl CanonFile {
	pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
		toml::from_str(content)
	}

	/// Reads and parses a canon file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}

	/// Builds the system described by this file.
	pub fn to_system(&self) -> Result<System> {
		let old = book_specs(&self.old)?;
		let new = book_specs(&self.new)?;
		let verse_max: Vec<u16> = self.old.iter().chain(&self.new).flat_map(|b| b.verses.iter().copied()).collect();
		Ok(System::from_tables(&self.name, &old, &new, &verse_max)?)
	}
}

/// Converts entries to table descriptors.
///
/// Books with no chapters are dropped; as table entries they would end the
/// section early.
fn book_specs(entries: &[BookEntry]) -> Result<Vec<BookSpec<'_>>> {
	let mut specs = Vec::with_capacity(entries.len());
	for entry in entries {
		if entry.verses.is_empty() {
			tracing::warn!(osis = %entry.osis, "skipping book without chapters");
			continue;
		}
		let chapters = u16::try_from(entry.verses.len()).map_err(|_| ConfigError::TooManyChapters {
			osis: entry.osis.clone(),
			chapters: entry.verses.len(),
			max: usize::from(u16::MAX),
		})?;
		let abbrev = entry.abbrev.as_deref().unwrap_or(&entry.osis);
		specs.push(BookSpec::new(&entry.name, &entry.osis, abbrev, chapters));
	}
	Ok(specs)
}

impl VersificationMgr {
	/// Builds and registers the system described by a canon file.
	pub fn register_canon_file(&mut self, file: &CanonFile) -> Result<Arc<System>> {
		let system = Arc::new(file.to_system()?);
		self.insert_system(Arc::clone(&system));
		Ok(system)
	}
}
