//! Versification systems: how a Bible edition divides its text into books,
//! chapters and verses, and how verse keys map onto a dense offset space.
//!
//! # Usage
//!
//! ```
//! use verso_versification::{system, VerseRef};
//!
//! let kjv = system("KJV").unwrap();
//! let offset = kjv.offset_from_verse(40, 1, 1).unwrap();
//! assert_eq!(offset, 24118);
//! assert_eq!(kjv.verse_from_offset(offset).verse, VerseRef::new(40, 1, 1));
//! ```
//!
//! Canon tables live in `verso-canon`; user canons can be loaded from TOML
//! with the `config` feature.

/// Verse keys, lookup results and offset classification.
pub mod address;
/// Book metadata and chapter layout.
pub mod book;
/// User canons loaded from TOML files.
#[cfg(feature = "config")]
pub mod config;
/// Error types.
pub mod error;
/// Registry of named systems.
pub mod mgr;
/// Versification systems and offset mapping.
pub mod system;

pub use address::{Address, Location, LookupStatus, Section, VerseRef};
pub use book::Book;
#[cfg(feature = "config")]
pub use config::{CanonFile, ConfigError, load::{CanonLoadReport, load_canon_dir}};
pub use error::{CanonError, VersificationError};
pub use mgr::VersificationMgr;
pub use mgr::global::{register_global_system, set_system_mgr, system, system_mgr};
pub use system::System;
pub use verso_canon as canon;
