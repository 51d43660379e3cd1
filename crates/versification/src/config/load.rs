//! Directory scanning for canon files.

use std::path::{Path, PathBuf};

use super::{CanonFile, ConfigError};
use crate::mgr::VersificationMgr;

/// Aggregate result of loading every canon file in a directory.
#[derive(Debug, Default)]
pub struct CanonLoadReport {
	/// Successfully parsed files, in file name order.
	pub canons: Vec<(PathBuf, CanonFile)>,
	/// Read or parse failures keyed by source path.
	pub errors: Vec<(PathBuf, ConfigError)>,
}

impl CanonLoadReport {
	/// Registers every parsed canon, moving build failures into `errors`.
	///
	/// Returns the number of systems registered.
	pub fn register_into(&mut self, mgr: &mut VersificationMgr) -> usize {
		let mut registered = 0;
		for (path, file) in &self.canons {
			match mgr.register_canon_file(file) {
				Ok(system) => {
					tracing::debug!(system = system.name(), path = %path.display(), "registered canon file");
					registered += 1;
				}
				Err(error) => self.errors.push((path.clone(), error)),
			}
		}
		registered
	}
}

/// Loads every `*.toml` file directly inside `dir`.
///
/// A missing directory yields an empty report. Failures are collected per
/// file and never stop the scan.
pub fn load_canon_dir(dir: &Path) -> CanonLoadReport {
	let mut report = CanonLoadReport::default();

	let entries = match std::fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(error) if error.kind() == std::io::ErrorKind::NotFound => return report,
		Err(source) => {
			report.errors.push((dir.to_path_buf(), ConfigError::Io { path: dir.to_path_buf(), source }));
			return report;
		}
	};

	let mut paths: Vec<PathBuf> = entries
		.filter_map(|entry| entry.ok().map(|e| e.path()))
		.filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
		.collect();
	paths.sort();

	for path in paths {
		match CanonFile::load(&path) {
			Ok(file) => report.canons.push((path, file)),
			Err(error) => {
				tracing::warn!(path = %path.display(), %error, "failed to load canon file");
				report.errors.push((path, error));
			}
		}
	}

	report
}
