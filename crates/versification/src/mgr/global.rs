//! Process-wide default registry.
//!
//! The default instance is built once, on first access. Replacing it is an
//! explicit ownership transfer: [`set_system_mgr`] installs the new value and
//! returns the previous one. Readers that already hold an
//! `Arc<VersificationMgr>` or `Arc<System>` keep a consistent snapshot.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use verso_canon::BookSpec;

use super::VersificationMgr;
use crate::error::CanonError;
use crate::system::System;

static SYSTEM_MGR: LazyLock<ArcSwap<VersificationMgr>> = LazyLock::new(|| ArcSwap::from_pointee(default_mgr()));

#[cfg(feature = "builtins")]
fn default_mgr() -> VersificationMgr {
	VersificationMgr::with_builtins()
}

#[cfg(not(feature = "builtins"))]
fn default_mgr() -> VersificationMgr {
	VersificationMgr::new()
}

/// Returns the current shared registry.
pub fn system_mgr() -> Arc<VersificationMgr> {
	SYSTEM_MGR.load_full()
}

/// Shorthand for looking up a system in the shared registry.
pub fn system(name: &str) -> Option<Arc<System>> {
	SYSTEM_MGR.load().system(name)
}

/// Installs `mgr` as the shared registry and returns the previous instance.
pub fn set_system_mgr(mgr: VersificationMgr) -> Arc<VersificationMgr> {
	tracing::debug!(count = mgr.len(), "replacing shared versification registry");
	SYSTEM_MGR.swap(Arc::new(mgr))
}

/// Registers a system in the shared registry.
///
/// The system is built once; publication is a copy-on-write update of the
/// registry map, so concurrent registrations are not lost.
pub fn register_global_system(
	name: &str,
	old: &[BookSpec<'_>],
	new: &[BookSpec<'_>],
	verse_max: &[u16],
) -> Result<Arc<System>, CanonError> {
	let system = Arc::new(System::from_tables(name, old, new, verse_max)?);
	SYSTEM_MGR.rcu(|current| {
		let mut next = VersificationMgr::clone(current);
		next.insert_system(Arc::clone(&system));
		next
	});
	Ok(system)
}
