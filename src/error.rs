use thiserror::Error;

/// Errors that end a documentation lookup.
///
/// Missing project roots, unreadable files, and empty searches are not errors; they surface
/// as `None`, skipped files, or empty result lists instead.
#[derive(Debug, Error)]
pub enum DocError {
	/// No editor install with reference documentation was found.
	#[error("Unity documentation not found.\nExpected at: {expected}")]
	DocRootNotFound {
		/// Human-readable description of the location that was checked.
		expected: String,
	},
	/// `--search` was given without a term.
	#[error("--search requires a term")]
	MissingSearchTerm,
	/// A direct lookup matched neither a core reference page nor a package doc.
	#[error("'{name}' not found in Unity documentation or packages.\nTry using --search to find similar classes.")]
	NotFound {
		/// The class name that was looked up.
		name: String,
	},
}

/// Result type returned by the unitydoc library.
pub type Result<T> = std::result::Result<T, DocError>;
