//! Plain-text rendering of extracted documentation.

use owo_colors::OwoColorize;
use regex::RegexBuilder;

use crate::extract::clean::clip;
use crate::extract::markdown::PROPERTY_ROW_LIMIT;
use crate::extract::{CoreDoc, PackageDoc, Properties, truncate};
use crate::locate::{DocMatch, SEARCH_LIMIT};
use crate::lookup::SearchResults;

/// Members listed for a class page before the rest are summarised.
pub const MEMBER_LIST_LIMIT: usize = 15;
/// Characters kept from a property description.
pub const PROPERTY_DESCRIPTION_CHARS: usize = 200;
/// Characters kept from a properties block that is not a table.
pub const PROPERTY_PROSE_CHARS: usize = 500;
/// Characters kept from each extra section.
pub const EXTRA_SECTION_CHARS: usize = 400;

const RULE_WIDTH: usize = 60;

/// How a requested member relates to the class page being shown.
#[derive(Debug, Clone, Copy)]
pub enum MemberContext<'a> {
	/// A class page shown without a member request.
	None,
	/// The requested member has its own page.
	Page,
	/// A member was requested but only the class page exists.
	References {
		/// Requested member name.
		member: &'a str,
		/// Snippets of the class page mentioning the member.
		hits: &'a [String],
	},
}

/// Formats extracted sections for the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
	color: bool,
}

impl Renderer {
	/// Create a renderer producing plain, uncolored text.
	pub fn new() -> Self {
		Self::default()
	}

	/// Enable or disable ANSI styling of banners and search hits.
	pub fn with_color(mut self, color: bool) -> Self {
		self.color = color;
		self
	}

	fn banner(&self, text: &str) -> String {
		if self.color { text.bold().to_string() } else { text.to_string() }
	}

	/// Render a core reference page titled `title` (`Class` or `Class.Member`).
	pub fn core(&self, title: &str, doc: &CoreDoc, member: MemberContext<'_>) -> String {
		let mut out = String::new();
		out.push_str(&format!("\n{}\n\n", self.banner(&format!("=== {title} (Core Unity API) ==="))));

		let fields = [
			("Description", &doc.description),
			("Signature", &doc.signature),
			("Parameters", &doc.parameters),
			("Returns", &doc.returns),
		];
		for (label, value) in fields {
			if let Some(value) = value {
				out.push_str(&format!("{label}: {value}\n\n"));
			}
		}

		match member {
			MemberContext::References { member, hits } if hits.is_empty() => {
				out.push_str(&format!("Member '{member}' not found. Check spelling or try --search.\n"));
			}
			MemberContext::References { member, hits } => {
				out.push_str(&format!("Found references to '{member}':\n"));
				for hit in hits {
					out.push_str(&format!("  - {hit}\n"));
				}
			}
			MemberContext::None if !doc.members.is_empty() => {
				let shown: Vec<&str> = doc.members.iter().take(MEMBER_LIST_LIMIT).map(String::as_str).collect();
				out.push_str(&format!("Members: {}\n", shown.join(", ")));
				if doc.members.len() > MEMBER_LIST_LIMIT {
					out.push_str(&format!("  ... and {} more\n", doc.members.len() - MEMBER_LIST_LIMIT));
				}
			}
			MemberContext::None | MemberContext::Page => {}
		}

		out
	}

	/// Render a package documentation page.
	pub fn package(&self, doc: &DocMatch, sections: &PackageDoc) -> String {
		let rule = "=".repeat(RULE_WIDTH);
		let mut out = String::new();

		out.push_str(&format!("\n{rule}\n"));
		out.push_str(&self.banner(&format!("Found in package: {}", doc.source.package_name().unwrap_or_default())));
		out.push_str(&format!("\nFile: {}\n{rule}\n\n", doc.file_name()));

		if let Some(title) = &sections.title {
			out.push_str(&format!("{title}\n\n"));
		}
		if let Some(description) = &sections.description {
			out.push_str(&format!("{description}\n\n"));
		}

		match &sections.properties {
			Some(Properties::Table(rows)) => {
				out.push_str("## Properties\n\n");
				for row in rows.iter().take(PROPERTY_ROW_LIMIT) {
					out.push_str(&format!(
						"  {}\n    {}\n\n",
						row.name,
						truncate(&row.description, PROPERTY_DESCRIPTION_CHARS)
					));
				}
			}
			Some(Properties::Prose(text)) => {
				out.push_str("## Properties\n\n");
				out.push_str(&format!("{}\n\n", clip(text, PROPERTY_PROSE_CHARS)));
			}
			None => {}
		}

		for section in &sections.extras {
			out.push_str(&format!(
				"## {}\n\n{}\n\n",
				section.name,
				truncate(&section.text, EXTRA_SECTION_CHARS)
			));
		}

		out.push_str(&format!("\nFull documentation: {}\n{rule}\n", doc.path.display()));
		out
	}

	/// Render search results, core pages first.
	pub fn search(&self, term: &str, results: &SearchResults) -> String {
		if results.is_empty() {
			return format!("No matches found for '{term}'\n");
		}

		let mut out = String::new();
		if !results.core.is_empty() {
			let header = format!("=== Core Unity API ({} matches) ===", results.core.len());
			out.push_str(&format!("\n{}\n\n", self.banner(&header)));
			for stem in &results.core {
				out.push_str(&format!("  {}\n", self.highlight(stem, term)));
			}
		}
		if !results.packages.is_empty() {
			let header = format!("=== Package Documentation ({} matches) ===", results.packages.len());
			out.push_str(&format!("\n{}\n\n", self.banner(&header)));
			for hit in results.packages.iter().take(SEARCH_LIMIT) {
				out.push_str(&format!("  {} ({})\n", self.highlight(&hit.stem, term), hit.package));
			}
		}
		out
	}

	/// Highlight occurrences of `term` in `text`, ignoring case.
	fn highlight(&self, text: &str, term: &str) -> String {
		if !self.color || term.is_empty() {
			return text.to_string();
		}
		let Ok(regex) = RegexBuilder::new(&regex::escape(term)).case_insensitive(true).build() else {
			return text.to_string();
		};

		let mut result = String::with_capacity(text.len() * 2);
		let mut last_end = 0;
		for mat in regex.find_iter(text) {
			result.push_str(&text[last_end..mat.start()]);
			result.push_str(&mat.as_str().bright_green().bold().to_string());
			last_end = mat.end();
		}
		result.push_str(&text[last_end..]);
		result
	}
}
