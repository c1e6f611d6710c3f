//! Section extraction for ScriptReference HTML pages.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::clean::{clean_html, clip};

static DESCRIPTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<h3>Description</h3>\s*<p>(.*?)</p>").unwrap());
static SIGNATURE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?s)<div class="signature[^"]*"[^>]*>(.*?)</div>"#).unwrap());
static PARAMETERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<h4>Parameters</h4>(.*?)(?:<h[34]>|</div>)").unwrap());
static RETURNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<h4>Returns</h4>\s*<p>(.*?)</p>").unwrap());
static MEMBER_CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<td class="lbl"><a href="[^"]*">(\w+)</a></td>"#).unwrap());

/// Most member references reported when a member has no page of its own.
pub const MEMBER_REFERENCE_LIMIT: usize = 3;
/// Characters kept from each member reference.
pub const MEMBER_REFERENCE_CHARS: usize = 100;

/// Sections pulled from a reference page. Every field is cleaned text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreDoc {
	/// Paragraph under the "Description" heading.
	pub description: Option<String>,
	/// Declaration shown in the signature box.
	pub signature: Option<String>,
	/// Flattened parameter table.
	pub parameters: Option<String>,
	/// Paragraph under the "Returns" heading.
	pub returns: Option<String>,
	/// Member names listed on a class page.
	pub members: Vec<String>,
}

fn capture(re: &Regex, html: &str) -> Option<String> {
	let text = clean_html(re.captures(html)?.get(1)?.as_str());
	(!text.is_empty()).then_some(text)
}

/// Extract the known sections of a reference page.
pub fn extract(html: &str) -> CoreDoc {
	CoreDoc {
		description: capture(&DESCRIPTION, html),
		signature: capture(&SIGNATURE, html),
		parameters: capture(&PARAMETERS, html),
		returns: capture(&RETURNS, html),
		members: MEMBER_CELL
			.captures_iter(html)
			.filter_map(|caps| caps.get(1))
			.map(|name| name.as_str().to_string())
			.collect(),
	}
}

/// Best-effort search of a class page for rows mentioning `member`.
///
/// Each hit runs from the member name to the end of its table row, so unrelated text that
/// happens to contain the name is reported too.
pub fn member_references(html: &str, member: &str) -> Vec<String> {
	let pattern = format!(r"(?s){}.*?</tr>", regex::escape(member));
	let Ok(re) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
		return Vec::new();
	};
	re.find_iter(html)
		.take(MEMBER_REFERENCE_LIMIT)
		.map(|hit| clip(&clean_html(hit.as_str()), MEMBER_REFERENCE_CHARS).to_string())
		.collect()
}
