use std::sync::Arc;

use pretty_assertions::assert_eq;
use verso_canon::{BookSpec, canons};

use super::VersificationMgr;
use crate::address::Section;
use crate::error::CanonError;

const FIRST: &[BookSpec<'static>] = &[BookSpec::new("Alpha", "Alp", "A", 1)];
const SECOND: &[BookSpec<'static>] = &[BookSpec::new("Beta", "Bet", "B", 2), BookSpec::new("Gamma", "Gam", "G", 1)];

#[cfg(feature = "builtins")]
#[test]
fn test_builtins_registered() {
	let mgr = VersificationMgr::with_builtins();
	assert_eq!(
		mgr.system_names(),
		vec![
			"Catholic",
			"Catholic2",
			"German",
			"KJV",
			"KJVA",
			"LXX",
			"Leningrad",
			"Luther",
			"MT",
			"NRSV",
			"NRSVA",
			"Orthodox",
			"Rahlfs",
			"Synodal",
			"Vulg",
		]
	);
	let kjv = mgr.system("KJV").unwrap();
	assert_eq!(kjv.book_count(), 66);
	assert_eq!(mgr.system("Rahlfs").unwrap().section_book_count(Section::New), 0);
}

#[cfg(feature = "builtins")]
#[test]
fn test_lookup_is_exact() {
	let mgr = VersificationMgr::with_builtins();
	assert!(mgr.system("kjv").is_none());
	assert!(mgr.system("KJV ").is_none());
	assert!(mgr.system("").is_none());
	assert!(mgr.contains("Vulg"));
}

#[test]
fn test_reregistration_replaces() {
	let mut mgr = VersificationMgr::new();
	mgr.register_system("Custom", FIRST, &[], &[3]).unwrap();
	let held = mgr.system("Custom").unwrap();

	mgr.register_system("Custom", SECOND, &[], &[4, 5, 6]).unwrap();
	assert_eq!(mgr.len(), 1);

	let current = mgr.system("Custom").unwrap();
	let osis: Vec<_> = current.books().iter().map(|b| b.osis_name()).collect();
	assert_eq!(osis, vec!["Bet", "Gam"]);
	assert_eq!(current.book_number_by_osis("Alp"), None);

	// Handles obtained before the replacement stay valid.
	assert_eq!(held.book(1).unwrap().osis_name(), "Alp");
}

#[test]
fn test_failed_registration_keeps_previous() {
	let mut mgr = VersificationMgr::new();
	mgr.register_system("Custom", FIRST, &[], &[3]).unwrap();
	let err = mgr.register_system("Custom", SECOND, &[], &[4]).unwrap_err();
	assert!(matches!(err, CanonError::VerseTableTooShort { .. }));
	assert_eq!(mgr.system("Custom").unwrap().book_count(), 1);
}

#[test]
fn test_insert_and_remove() {
	let mut mgr = VersificationMgr::new();
	assert!(mgr.is_empty());

	let system = crate::System::from_canon(&canons::nrsv::CANON).unwrap();
	assert!(mgr.insert_system(system).is_none());
	let again = crate::System::from_canon(&canons::nrsv::CANON).unwrap();
	assert!(mgr.insert_system(again).is_some());

	let removed = mgr.remove_system("NRSV").unwrap();
	assert_eq!(removed.name(), "NRSV");
	assert!(mgr.is_empty());
	assert!(mgr.remove_system("NRSV").is_none());
}

#[test]
fn test_clone_shares_systems() {
	let mut mgr = VersificationMgr::new();
	mgr.register_canon(&canons::kjv::CANON).unwrap();
	let copy = mgr.clone();
	assert!(Arc::ptr_eq(&mgr.system("KJV").unwrap(), &copy.system("KJV").unwrap()));

	mgr.remove_system("KJV");
	assert!(copy.contains("KJV"));
}

#[cfg(feature = "builtins")]
#[test]
fn test_suggest() {
	let mgr = VersificationMgr::with_builtins();
	assert_eq!(mgr.suggest("kjv"), Some("KJV"));
	assert_eq!(mgr.suggest("Synodol"), Some("Synodal"));
	assert_eq!(mgr.suggest("Septuagint"), None);
}

#[cfg(feature = "builtins")]
#[test]
fn test_iter_covers_all() {
	let mgr = VersificationMgr::with_builtins();
	assert_eq!(mgr.iter().count(), mgr.len());
	assert!(mgr.iter().all(|s| mgr.system(s.name()).is_some()));
}
