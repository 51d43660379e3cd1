//! Behavior of the process-wide registry.

use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use verso_versification::canon::BookSpec;
use verso_versification::{
	VerseRef, VersificationMgr, register_global_system, set_system_mgr, system, system_mgr,
};

const TINY_OLD: &[BookSpec<'static>] = &[BookSpec::new("Genesis", "Gen", "Gen", 2)];
const TINY_NEW: &[BookSpec<'static>] = &[BookSpec::new("Jude", "Jude", "Jude", 1)];

fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Swaps in `mgr` for the duration of `f`, then restores the previous registry.
fn with_registry<R>(mgr: VersificationMgr, f: impl FnOnce() -> R) -> R {
	let previous = set_system_mgr(mgr);
	let out = f();
	set_system_mgr(VersificationMgr::clone(&previous));
	out
}

#[serial_test::serial]
#[test]
fn default_registry_has_builtins() {
	init_tracing();
	let mgr = system_mgr();
	assert_eq!(mgr.len(), 15);
	let kjv = system("KJV").unwrap();
	assert_eq!(kjv.offset_from_verse(1, 1, 1), Ok(4));
	assert_eq!(kjv.verse_from_offset(24118).verse, VerseRef::new(40, 1, 1));
	assert!(system("Null").is_none());
}

#[serial_test::serial]
#[test]
fn set_system_mgr_returns_previous() {
	init_tracing();
	let before = system_mgr();
	with_registry(VersificationMgr::new(), || {
		assert!(system_mgr().is_empty());
		assert!(system("KJV").is_none());
	});
	let after = system_mgr();
	assert_eq!(after.system_names(), before.system_names());
	assert!(Arc::ptr_eq(&after.system("KJV").unwrap(), &before.system("KJV").unwrap()));
}

#[serial_test::serial]
#[test]
fn register_global_system_replaces_by_name() {
	init_tracing();
	with_registry(VersificationMgr::new(), || {
		let first = register_global_system("Tiny", TINY_OLD, TINY_NEW, &[3, 4, 5]).unwrap();
		let held = system("Tiny").unwrap();
		assert!(Arc::ptr_eq(&first, &held));

		let second = register_global_system("Tiny", TINY_OLD, &[], &[1, 1]).unwrap();
		assert_eq!(system_mgr().len(), 1);
		assert!(Arc::ptr_eq(&system("Tiny").unwrap(), &second));

		// Earlier handles keep their own tables.
		assert_eq!(held.book_count(), 2);
		assert_eq!(second.book_count(), 1);
	});
}

#[serial_test::serial]
#[test]
fn failed_global_registration_leaves_registry_untouched() {
	init_tracing();
	with_registry(VersificationMgr::new(), || {
		assert!(register_global_system("Short", TINY_OLD, TINY_NEW, &[3]).is_err());
		assert!(system_mgr().is_empty());
	});
}

#[serial_test::serial]
#[test]
fn concurrent_registration_and_lookup() {
	init_tracing();
	with_registry(VersificationMgr::with_builtins(), || {
		let writers: Vec<_> = (0..8)
			.map(|i| {
				thread::spawn(move || {
					register_global_system(&format!("Tiny{i}"), TINY_OLD, TINY_NEW, &[3, 4, 5]).unwrap();
				})
			})
			.collect();
		let readers: Vec<_> = (0..8)
			.map(|_| {
				thread::spawn(|| {
					for _ in 0..100 {
						let kjv = system("KJV").unwrap();
						assert_eq!(kjv.offset_from_verse(40, 1, 1), Ok(24118));
					}
				})
			})
			.collect();
		for handle in writers.into_iter().chain(readers) {
			handle.join().unwrap();
		}

		let mgr = system_mgr();
		assert_eq!(mgr.len(), 15 + 8);
		assert!((0..8).all(|i| mgr.contains(&format!("Tiny{i}"))));
	});
}
