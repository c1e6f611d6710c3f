//! Direct lookups and name searches over a resolved documentation install.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DocError, Result};
use crate::extract::{self, Extracted, html};
use crate::locate::{self, DocMatch, DocSource, PackageHit};
use crate::render::{MemberContext, Renderer};
use crate::roots::{self, LookupConfig};

/// Outcome of a direct class or member lookup.
#[derive(Debug, Clone, Default)]
pub struct LookupOutcome {
	/// Whether any documentation was located.
	pub found: bool,
	/// Rendered text for everything that was located.
	pub rendered: String,
}

/// Names matched by a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
	/// Matching core reference page stems, sorted and capped.
	pub core: Vec<String>,
	/// Matching package pages, in package order.
	pub packages: Vec<PackageHit>,
}

impl SearchResults {
	/// True when neither core nor package docs matched.
	pub fn is_empty(&self) -> bool {
		self.core.is_empty() && self.packages.is_empty()
	}
}

/// Entry point tying root resolution, location, extraction and rendering together.
#[derive(Debug, Clone)]
pub struct DocLookup {
	config: LookupConfig,
	doc_root: PathBuf,
	project_root: Option<PathBuf>,
	renderer: Renderer,
}

impl DocLookup {
	/// Create a lookup over an already known documentation root, without package docs.
	pub fn new(config: LookupConfig, doc_root: impl Into<PathBuf>) -> Self {
		Self {
			config,
			doc_root: doc_root.into(),
			project_root: None,
			renderer: Renderer::default(),
		}
	}

	/// Resolve the documentation root and the project enclosing the working directory.
	///
	/// A missing documentation root is fatal; a missing project only disables package docs.
	pub fn resolve(config: LookupConfig) -> Result<Self> {
		let doc_root = roots::find_doc_root(&config).ok_or_else(|| DocError::DocRootNotFound {
			expected: config.expected_location(),
		})?;
		let project_root = roots::find_project_root(&config);
		Ok(Self::new(config, doc_root).with_project_root(project_root))
	}

	/// Set the project whose package cache is searched.
	pub fn with_project_root(mut self, project_root: Option<PathBuf>) -> Self {
		self.project_root = project_root;
		self
	}

	/// Use a custom renderer.
	pub fn with_renderer(mut self, renderer: Renderer) -> Self {
		self.renderer = renderer;
		self
	}

	/// The resolved documentation root.
	pub fn doc_root(&self) -> &Path {
		&self.doc_root
	}

	/// The resolved project root, when package docs are available.
	pub fn project_root(&self) -> Option<&Path> {
		self.project_root.as_deref()
	}

	fn reference_dir(&self) -> PathBuf {
		self.doc_root.join(&self.config.reference_dir)
	}

	/// Look up a class, or a member of it, falling back to package docs.
	///
	/// The member page wins when it exists; otherwise the class page is shown along with any
	/// rows mentioning the member. Package docs are consulted only when no core page exists.
	pub fn lookup(&self, class: &str, member: Option<&str>) -> LookupOutcome {
		let reference = self.reference_dir();

		if let Some(member) = member {
			let page = locate::member_file(&reference, class, member).and_then(|path| DocMatch::load(&path, DocSource::Core));
			if let Some(page) = page {
				debug!(path = %page.path.display(), "member page");
				return LookupOutcome {
					found: true,
					rendered: self.render(&format!("{class}.{member}"), &page, MemberContext::Page),
				};
			}
		}

		if let Some(page) = locate::class_file(&reference, class).and_then(|path| DocMatch::load(&path, DocSource::Core)) {
			debug!(path = %page.path.display(), "class page");
			let rendered = match member {
				Some(member) => {
					let hits = html::member_references(&page.content, member);
					self.render(class, &page, MemberContext::References { member, hits: &hits })
				}
				None => self.render(class, &page, MemberContext::None),
			};
			return LookupOutcome { found: true, rendered };
		}

		let Some(project_root) = self.project_root.as_deref() else {
			debug!(class, "no core page and no project for package docs");
			return LookupOutcome::default();
		};

		let docs = locate::package_docs(project_root, &self.config, class);
		let rendered: String = docs.iter().map(|doc| self.render(&doc.file_name(), doc, MemberContext::None)).collect();
		LookupOutcome {
			found: !docs.is_empty(),
			rendered,
		}
	}

	/// Search core and package doc names for `term`.
	pub fn search(&self, term: &str) -> Result<SearchResults> {
		let term = term.trim();
		if term.is_empty() {
			return Err(DocError::MissingSearchTerm);
		}

		let core = locate::search_core(&self.reference_dir(), term);
		let packages = match self.project_root.as_deref() {
			Some(root) => locate::search_packages(root, &self.config, term),
			None => Vec::new(),
		};
		Ok(SearchResults { core, packages })
	}

	/// Render search results with this lookup's renderer.
	pub fn render_search(&self, term: &str, results: &SearchResults) -> String {
		self.renderer.search(term.trim(), results)
	}

	fn render(&self, title: &str, page: &DocMatch, member: MemberContext<'_>) -> String {
		match extract::extract(page) {
			Extracted::Core(sections) => self.renderer.core(title, &sections, member),
			Extracted::Package(sections) => self.renderer.package(page, &sections),
		}
	}
}
