//! Section extraction for package Markdown documentation.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::clean::clean_markdown;

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());
static SUBHEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^##+ ").unwrap());

/// Headings searched for the properties block; the earliest one in the file wins.
pub const PROPERTY_HEADINGS: &[&str] = &["Properties", "Targets"];
/// Additional headings shown after the properties block, in order.
pub const EXTRA_HEADINGS: &[&str] = &["Targets", "Usage", "Examples", "Important"];
/// Most table rows considered for the properties block, counted before incomplete rows are dropped.
pub const PROPERTY_ROW_LIMIT: usize = 10;
/// Most extra sections kept per page.
pub const EXTRA_LIMIT: usize = 3;

/// Sections pulled from a package documentation page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDoc {
	/// Text of the first level-1 heading.
	pub title: Option<String>,
	/// Paragraph following the title.
	pub description: Option<String>,
	/// Properties or targets block.
	pub properties: Option<Properties>,
	/// Extra named sections, cleaned.
	pub extras: Vec<Section>,
}

/// Contents of a properties block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Properties {
	/// Rows parsed from a pipe table.
	Table(Vec<PropertyRow>),
	/// Cleaned prose when the block holds no table.
	Prose(String),
}

/// One `(name, description)` row of a properties table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
	/// Property name with emphasis removed.
	pub name: String,
	/// Remaining cells joined and cleaned.
	pub description: String,
}

/// A named excerpt of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	/// Heading the text was found under.
	pub name: String,
	/// Cleaned section body.
	pub text: String,
}

/// Extract the known sections of a package page.
pub fn extract(content: &str) -> PackageDoc {
	let properties_raw = section(content, PROPERTY_HEADINGS);
	let properties = properties_raw.as_deref().map(|raw| {
		if raw.contains('|') {
			Properties::Table(property_rows(raw))
		} else {
			Properties::Prose(clean_markdown(raw))
		}
	});

	let extras = EXTRA_HEADINGS
		.iter()
		.copied()
		.filter_map(|name| {
			let raw = section(content, &[name])?;
			if properties_raw.as_deref() == Some(raw.as_str()) {
				return None;
			}
			Some(Section {
				name: name.to_string(),
				text: clean_markdown(&raw),
			})
		})
		.take(EXTRA_LIMIT)
		.collect();

	PackageDoc {
		title: title(content),
		description: description(content),
		properties,
		extras,
	}
}

/// Text of the first `# ` heading.
pub fn title(content: &str) -> Option<String> {
	let caps = TITLE.captures(content)?;
	let title = caps.get(1)?.as_str().trim();
	(!title.is_empty()).then(|| title.to_string())
}

/// The paragraph after the title's blank line, ending at a blank line or a heading.
pub fn description(content: &str) -> Option<String> {
	let title = TITLE.find(content)?;
	let rest = &content[title.start()..];
	let start = rest.find("\n\n")? + 2;
	let body = &rest[start..];
	let end = [body.find("\n\n"), body.find("\n#")]
		.into_iter()
		.flatten()
		.min()
		.unwrap_or(body.len());
	let text = clean_markdown(&body[..end]);
	(!text.is_empty()).then_some(text)
}

/// Raw body under the first `##`-or-deeper heading starting with one of `names`.
///
/// The body runs to the next `##` heading or the end of the file. Matching ignores case.
pub fn section(content: &str, names: &[&str]) -> Option<String> {
	let alternatives = names.iter().map(|name| regex::escape(name)).collect::<Vec<_>>().join("|");
	let heading = RegexBuilder::new(&format!(r"^##+ (?:{alternatives})"))
		.case_insensitive(true)
		.multi_line(true)
		.build()
		.ok()?;

	let found = heading.find(content)?;
	let body_start = found.end() + content[found.end()..].find('\n')? + 1;
	let body = &content[body_start..];
	let body_end = SUBHEADING.find(body).map_or(body.len(), |next| next.start());
	let body = body[..body_end].trim();
	(!body.is_empty()).then(|| body.to_string())
}

fn is_separator(line: &str) -> bool {
	let line = line.trim();
	line.contains('|') && line.contains('-') && line.chars().all(|c| matches!(c, '|' | '-' | ':' | ' '))
}

fn table_cells(line: &str) -> Option<Vec<String>> {
	if !line.contains('|') || line.trim().starts_with("|:") {
		return None;
	}
	let pieces: Vec<&str> = line.split('|').collect();
	let cells: Vec<String> = pieces[1..pieces.len() - 1]
		.iter()
		.map(|cell| cell.trim().to_string())
		.collect();
	match cells.first() {
		Some(first) if !first.is_empty() && !first.starts_with('-') => Some(cells),
		_ => None,
	}
}

/// Split a pipe table into cell rows, skipping the header and separator lines.
pub fn parse_table(text: &str) -> Vec<Vec<String>> {
	let lines: Vec<&str> = text.lines().collect();
	lines
		.iter()
		.enumerate()
		.filter(|(index, _)| !lines.get(index + 1).is_some_and(|next| is_separator(next)))
		.filter_map(|(_, line)| table_cells(line))
		.collect()
}

fn strip_emphasis(name: &str) -> String {
	name.replace("**", "").trim().trim_matches(|c: char| c == '*' || c == '_').trim().to_string()
}

fn property_rows(table: &str) -> Vec<PropertyRow> {
	parse_table(table)
		.into_iter()
		.take(PROPERTY_ROW_LIMIT)
		.filter(|cells| cells.len() >= 2)
		.filter_map(|cells| {
			let name = strip_emphasis(&cells[0]);
			let description = clean_markdown(&cells[1..].join(" "));
			(!name.is_empty() && !description.is_empty()).then_some(PropertyRow { name, description })
		})
		.collect()
}
