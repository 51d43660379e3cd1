//! Named collection of versification systems.
//!
//! A [`VersificationMgr`] is an ordinary value: create it, register systems,
//! look them up, drop it. Systems are stored behind `Arc`, so cloning a
//! manager or handing out a system never copies book tables.
//!
//! A process-wide default lives in [`global`]; it is a convenience over the
//! same value type, not a separate mechanism.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use verso_canon::{BookSpec, Canon};

use crate::error::CanonError;
use crate::system::System;

pub mod global;

#[cfg(test)]
mod tests;

/// Registry of versification systems keyed by exact name.
#[derive(Debug, Clone, Default)]
pub struct VersificationMgr {
	systems: FxHashMap<String, Arc<System>>,
}

impl VersificationMgr {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry holding every built-in canon.
	///
	/// A canon whose tables fail to load is logged and skipped.
	#[cfg(feature = "builtins")]
	pub fn with_builtins() -> Self {
		let mut mgr = Self::new();
		for canon in verso_canon::BUILTIN_CANONS {
			if let Err(e) = mgr.register_canon(canon) {
				tracing::error!(system = canon.name, error = %e, "builtin versification failed to load");
			}
		}
		tracing::debug!(count = mgr.len(), "registered builtin versification systems");
		mgr
	}

	/// Looks up a system by exact name.
	pub fn system(&self, name: &str) -> Option<Arc<System>> {
		self.systems.get(name).cloned()
	}

	/// Builds a system from canon tables and stores it under `name`.
	///
	/// An existing system with the same name is replaced.
	pub fn register_system(
		&mut self,
		name: &str,
		old: &[BookSpec<'_>],
		new: &[BookSpec<'_>],
		verse_max: &[u16],
	) -> Result<Arc<System>, CanonError> {
		let system = Arc::new(System::from_tables(name, old, new, verse_max)?);
		self.insert_system(Arc::clone(&system));
		Ok(system)
	}

	pub fn register_canon(&mut self, canon: &Canon) -> Result<Arc<System>, CanonError> {
		self.register_system(canon.name, canon.old, canon.new, canon.verse_max)
	}

	/// Stores an already built system under its own name, returning the one it replaced.
	pub fn insert_system(&mut self, system: impl Into<Arc<System>>) -> Option<Arc<System>> {
		let system = system.into();
		let replaced = self.systems.insert(system.name().to_owned(), system);
		if let Some(old) = &replaced {
			tracing::debug!(system = old.name(), "replaced versification system");
		}
		replaced
	}

	pub fn remove_system(&mut self, name: &str) -> Option<Arc<System>> {
		self.systems.remove(name)
	}

	/// Registered names, sorted.
	pub fn system_names(&self) -> Vec<String> {
		let mut names: Vec<_> = self.systems.keys().cloned().collect();
		names.sort();
		names
	}

	pub fn contains(&self, name: &str) -> bool {
		self.systems.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.systems.len()
	}

	pub fn is_empty(&self) -> bool {
		self.systems.is_empty()
	}

	/// Iterates over registered systems in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = &Arc<System>> {
		self.systems.values()
	}

	/// Suggests a registered name close to `name`, for "did you mean" messages.
	pub fn suggest(&self, name: &str) -> Option<&str> {
		let needle = name.to_lowercase();
		self.systems
			.keys()
			.map(|k| (strsim::levenshtein(&needle, &k.to_lowercase()), k.as_str()))
			.filter(|&(distance, _)| distance <= 3)
			.min()
			.map(|(_, k)| k)
	}
}
