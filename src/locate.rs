//! Discovery of documentation files by name.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, trace};

use crate::roots::LookupConfig;

/// Maximum number of core reference pages listed by a search.
pub const SEARCH_LIMIT: usize = 20;

/// Where a documentation file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocSource {
	/// A reference page shipped with the editor install.
	Core,
	/// A Markdown page shipped inside a cached package.
	Package {
		/// Package directory name, e.g. `com.unity.cinemachine@3.1.0`.
		name: String,
	},
}

impl DocSource {
	/// Build a package source; package sources always carry a non-empty name.
	pub fn package(name: impl Into<String>) -> Option<Self> {
		let name = name.into();
		if name.is_empty() { None } else { Some(Self::Package { name }) }
	}

	/// Name of the owning package, if any.
	pub fn package_name(&self) -> Option<&str> {
		match self {
			Self::Core => None,
			Self::Package { name } => Some(name),
		}
	}
}

/// A located documentation file together with its raw text.
#[derive(Debug, Clone)]
pub struct DocMatch {
	/// Path of the file on disk.
	pub path: PathBuf,
	/// Core or package classification.
	pub source: DocSource,
	/// File contents, decoded leniently.
	pub content: String,
}

impl DocMatch {
	/// Read `path` into a match, or `None` when the file cannot be read.
	pub fn load(path: &Path, source: DocSource) -> Option<Self> {
		let content = read_lossy(path)?;
		Some(Self {
			path: path.to_path_buf(),
			source,
			content,
		})
	}

	/// File name without its directory.
	pub fn file_name(&self) -> String {
		self.path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_default()
	}
}

/// A package documentation page matched by name during a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageHit {
	/// File stem of the matched page.
	pub stem: String,
	/// Package directory name the page belongs to.
	pub package: String,
}

/// Read a file as text, replacing invalid UTF-8 instead of failing.
///
/// CRLF line endings are normalised to LF so the line-based patterns see one form.
pub fn read_lossy(path: &Path) -> Option<String> {
	match fs::read(path) {
		Ok(bytes) => Some(String::from_utf8_lossy(&bytes).replace("\r\n", "\n")),
		Err(err) => {
			trace!(path = %path.display(), %err, "skipping unreadable file");
			None
		}
	}
}

/// Path of the `<class>.<member>.html` reference page, when it exists.
pub fn member_file(reference: &Path, class: &str, member: &str) -> Option<PathBuf> {
	existing_page(reference, &format!("{class}.{member}"))
}

/// Path of the `<class>.html` reference page, when it exists.
pub fn class_file(reference: &Path, class: &str) -> Option<PathBuf> {
	existing_page(reference, class)
}

fn existing_page(reference: &Path, stem: &str) -> Option<PathBuf> {
	if !is_plain_name(stem) {
		return None;
	}
	let path = reference.join(format!("{stem}.html"));
	trace!(path = %path.display(), "checking reference page");
	path.is_file().then_some(path)
}

/// Names are joined onto directories, so anything that could escape them never matches.
fn is_plain_name(name: &str) -> bool {
	!name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}

/// True when the first token of a file stem is purely numeric, e.g. `30_LegacyTopic`.
pub fn has_numeric_prefix(stem: &str) -> bool {
	stem.split(|c: char| !c.is_alphanumeric())
		.next()
		.is_some_and(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
}

/// Reference page stems containing `term`, sorted, de-duplicated and capped.
pub fn search_core(reference: &Path, term: &str) -> Vec<String> {
	if !is_plain_name(term) {
		return Vec::new();
	}
	let pattern = format!(
		"{}/*{}*.html",
		Pattern::escape(&reference.to_string_lossy()),
		Pattern::escape(term)
	);
	let options = MatchOptions {
		case_sensitive: false,
		..MatchOptions::new()
	};
	let paths = match glob::glob_with(&pattern, options) {
		Ok(paths) => paths,
		Err(err) => {
			debug!(%pattern, %err, "invalid search pattern");
			return Vec::new();
		}
	};

	let stems: BTreeSet<String> = paths
		.filter_map(|entry| entry.ok())
		.filter_map(|path| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
		.filter(|stem| !has_numeric_prefix(stem))
		.collect();
	debug!(term, matches = stems.len(), "core search");
	stems.into_iter().take(SEARCH_LIMIT).collect()
}

/// Package directories with a documentation folder, newest name first.
///
/// Returns `(package name, docs folder)` pairs.
pub fn package_doc_dirs(project_root: &Path, config: &LookupConfig) -> Vec<(String, PathBuf)> {
	let cache = project_root.join(&config.package_cache);
	let pattern = format!(
		"{}/{}*",
		Pattern::escape(&cache.to_string_lossy()),
		Pattern::escape(&config.package_prefix)
	);
	let paths = match glob::glob(&pattern) {
		Ok(paths) => paths,
		Err(err) => {
			debug!(%pattern, %err, "invalid package pattern");
			return Vec::new();
		}
	};

	let mut packages: Vec<PathBuf> = paths.filter_map(|entry| entry.ok()).filter(|path| path.is_dir()).collect();
	packages.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

	packages
		.into_iter()
		.filter_map(|package| {
			let docs = package.join(&config.package_docs_dir);
			if !docs.is_dir() {
				return None;
			}
			let name = package.file_name()?.to_string_lossy().into_owned();
			Some((name, docs))
		})
		.collect()
}

/// Markdown files in package docs whose stem contains `query`, case-insensitively.
fn matching_package_files(project_root: &Path, config: &LookupConfig, query: &str) -> Vec<(String, PathBuf)> {
	let needle = query.to_lowercase();
	let mut found = Vec::new();

	for (package, docs) in package_doc_dirs(project_root, config) {
		let Ok(entries) = fs::read_dir(&docs) else {
			trace!(dir = %docs.display(), "skipping unreadable docs folder");
			continue;
		};
		let mut files: Vec<PathBuf> = entries
			.filter_map(|entry| entry.ok())
			.map(|entry| entry.path())
			.filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
			.filter(|path| {
				path.file_stem()
					.is_some_and(|stem| stem.to_string_lossy().to_lowercase().contains(&needle))
			})
			.collect();
		files.sort();
		found.extend(files.into_iter().map(|file| (package.clone(), file)));
	}

	debug!(query, matches = found.len(), "package scan");
	found
}

/// Load every package doc whose name contains `query`, in package order.
pub fn package_docs(project_root: &Path, config: &LookupConfig, query: &str) -> Vec<DocMatch> {
	matching_package_files(project_root, config, query)
		.into_iter()
		.filter_map(|(package, file)| DocMatch::load(&file, DocSource::package(package)?))
		.collect()
}

/// Package pages whose name contains `term`; not capped.
pub fn search_packages(project_root: &Path, config: &LookupConfig, term: &str) -> Vec<PackageHit> {
	matching_package_files(project_root, config, term)
		.into_iter()
		.filter_map(|(package, file)| {
			let stem = file.file_stem()?.to_string_lossy().into_owned();
			Some(PackageHit { stem, package })
		})
		.collect()
}
