//! Structural extraction of documentation sections.
//!
//! Each format is scraped with fixed patterns tuned to the markers the Unity docs actually
//! use. Missing sections come back as `None` or empty lists, never as errors.

pub mod clean;
pub mod html;
pub mod markdown;

pub use clean::{clean_html, clean_markdown, truncate};
pub use html::CoreDoc;
pub use markdown::{PackageDoc, Properties, PropertyRow, Section};

use crate::locate::{DocMatch, DocSource};

/// Sections extracted from a located file, by format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
	/// Sections of a core reference page.
	Core(CoreDoc),
	/// Sections of a package Markdown page.
	Package(PackageDoc),
}

/// Extract sections from a match using the extractor for its source kind.
pub fn extract(doc: &DocMatch) -> Extracted {
	match doc.source {
		DocSource::Core => Extracted::Core(html::extract(&doc.content)),
		DocSource::Package { .. } => Extracted::Package(markdown::extract(&doc.content)),
	}
}
