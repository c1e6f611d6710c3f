//! Resolution of the documentation install and the enclosing Unity project.
//!
//! Both lookups are plain filesystem checks. Nothing found is a normal outcome and is
//! reported as `None`; deciding whether that is fatal is left to the caller.

use std::path::{Path, PathBuf};
use std::{env, fs};

use tracing::{debug, trace};

/// Environment variable overriding the Unity Hub editor directory.
pub const EDITOR_DIR_ENV: &str = "UNITYDOC_EDITOR_DIR";

/// Well-known directory conventions used to find documentation on disk.
#[derive(Debug, Clone)]
pub struct LookupConfig {
	/// Directory holding one subdirectory per installed editor version.
	pub editor_dir: PathBuf,
	/// Documentation path relative to an editor version directory.
	pub docs_subpath: PathBuf,
	/// Reference subdirectory of the documentation root holding the class pages.
	pub reference_dir: String,
	/// Package cache path relative to a project root.
	pub package_cache: PathBuf,
	/// Name prefix shared by the package directories worth searching.
	pub package_prefix: String,
	/// Documentation folder inside a package directory.
	pub package_docs_dir: String,
}

impl Default for LookupConfig {
	fn default() -> Self {
		Self {
			editor_dir: default_editor_dir(),
			docs_subpath: Path::new("Documentation").join("en"),
			reference_dir: "ScriptReference".to_string(),
			package_cache: Path::new("Library").join("PackageCache"),
			package_prefix: "com.unity.".to_string(),
			package_docs_dir: "Documentation~".to_string(),
		}
	}
}

impl LookupConfig {
	/// Platform defaults with [`EDITOR_DIR_ENV`] applied when it is set.
	pub fn from_env() -> Self {
		let config = Self::default();
		match env::var_os(EDITOR_DIR_ENV) {
			Some(dir) if !dir.is_empty() => {
				debug!(editor_dir = ?dir, "editor directory overridden from environment");
				config.with_editor_dir(PathBuf::from(dir))
			}
			_ => config,
		}
	}

	/// Use a custom editor directory.
	pub fn with_editor_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.editor_dir = dir.into();
		self
	}

	/// Describe where documentation is expected, for error messages.
	pub fn expected_location(&self) -> String {
		self.editor_dir
			.join("*")
			.join(&self.docs_subpath)
			.display()
			.to_string()
	}
}

fn default_editor_dir() -> PathBuf {
	if cfg!(target_os = "macos") {
		PathBuf::from("/Applications/Unity/Hub/Editor")
	} else if cfg!(windows) {
		PathBuf::from(r"C:\Program Files\Unity\Hub\Editor")
	} else {
		dirs::home_dir()
			.unwrap_or_else(|| PathBuf::from("."))
			.join("Unity")
			.join("Hub")
			.join("Editor")
	}
}

/// Find the documentation root of the highest-sorted installed editor version.
///
/// Versions are compared by directory name in reverse lexicographic order; versions without
/// the documentation subpath are skipped.
pub fn find_doc_root(config: &LookupConfig) -> Option<PathBuf> {
	let entries = match fs::read_dir(&config.editor_dir) {
		Ok(entries) => entries,
		Err(err) => {
			debug!(dir = %config.editor_dir.display(), %err, "editor directory unavailable");
			return None;
		}
	};

	let mut versions: Vec<PathBuf> = entries.filter_map(|entry| entry.ok()).map(|entry| entry.path()).collect();
	versions.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

	for version in versions {
		let docs = version.join(&config.docs_subpath);
		if docs.exists() {
			debug!(root = %docs.display(), "resolved documentation root");
			return Some(docs);
		}
		trace!(version = %version.display(), "no documentation in editor version");
	}

	None
}

/// Find the Unity project root enclosing the current working directory.
pub fn find_project_root(config: &LookupConfig) -> Option<PathBuf> {
	match env::current_dir() {
		Ok(cwd) => find_project_root_from(&cwd, config),
		Err(err) => {
			debug!(%err, "cannot read current directory");
			None
		}
	}
}

/// Walk `start` and its ancestors, returning the first that holds a package cache.
pub fn find_project_root_from(start: &Path, config: &LookupConfig) -> Option<PathBuf> {
	let root = start
		.ancestors()
		.find(|dir| dir.join(&config.package_cache).exists())
		.map(Path::to_path_buf);
	match &root {
		Some(root) => debug!(root = %root.display(), "resolved project root"),
		None => debug!(start = %start.display(), "no project root; package docs disabled"),
	}
	root
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use tempfile::TempDir;

	use super::*;

	fn config_for(editor: &Path) -> LookupConfig {
		LookupConfig::default().with_editor_dir(editor)
	}

	#[test]
	fn picks_highest_version_with_docs() {
		let temp = TempDir::new().unwrap();
		for version in ["2021.3.1f1", "2022.3.10f1"] {
			fs::create_dir_all(temp.path().join(version).join("Documentation/en")).unwrap();
		}
		// Newest by name, but ships without docs.
		fs::create_dir_all(temp.path().join("6000.0.1f1")).unwrap();

		let root = find_doc_root(&config_for(temp.path())).unwrap();
		assert_eq!(root, temp.path().join("2022.3.10f1").join("Documentation").join("en"));
	}

	#[test]
	fn missing_editor_dir_is_absent() {
		let temp = TempDir::new().unwrap();
		assert!(find_doc_root(&config_for(&temp.path().join("nope"))).is_none());
	}

	#[test]
	fn project_root_found_from_nested_dir() {
		let temp = TempDir::new().unwrap();
		let config = LookupConfig::default();
		fs::create_dir_all(temp.path().join("Library/PackageCache")).unwrap();
		let nested = temp.path().join("Assets").join("Scripts");
		fs::create_dir_all(&nested).unwrap();

		assert_eq!(find_project_root_from(&nested, &config), Some(temp.path().to_path_buf()));
		assert_eq!(find_project_root_from(temp.path(), &config), Some(temp.path().to_path_buf()));
	}

	#[test]
	fn project_root_absent_without_cache() {
		let temp = TempDir::new().unwrap();
		let mut config = LookupConfig::default();
		config.package_cache = PathBuf::from("unitydoc-test-no-such-cache");
		assert!(find_project_root_from(temp.path(), &config).is_none());
	}

	#[test]
	fn expected_location_names_docs_subpath() {
		let config = config_for(Path::new("/opt/editors"));
		let expected = config.expected_location();
		assert!(expected.starts_with("/opt/editors"));
		assert!(expected.contains("Documentation"));
	}
}
