//! Core library for unitydoc, locating and summarising locally installed Unity docs.
//!
//! A lookup runs four stages in order: resolve the documentation and project roots, locate
//! matching files by name, extract known sections by pattern, and render them as plain text.
//! [`DocLookup`] drives the whole pipeline; the stage modules are public for reuse.

/// Typed errors for fatal lookup conditions.
pub mod error;

/// Section extraction from HTML reference pages and Markdown package docs.
pub mod extract;

/// File discovery by class name, member name, or search term.
pub mod locate;

/// Orchestration of direct lookups and searches.
pub mod lookup;

/// Plain-text formatting of extracted sections.
pub mod render;

/// Resolution of the editor documentation root and the project root.
pub mod roots;

pub use crate::error::{DocError, Result};
pub use crate::locate::{DocMatch, DocSource, PackageHit};
pub use crate::lookup::{DocLookup, LookupOutcome, SearchResults};
pub use crate::render::Renderer;
pub use crate::roots::{EDITOR_DIR_ENV, LookupConfig};
