//! Text cleanup shared by the HTML and Markdown extractors.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<script[^>]*>.*?</script>").unwrap());
static STYLE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<style[^>]*>.*?</style>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[.*?\]\(.*?\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Marker appended to text cut short by [`truncate`].
pub const ELLIPSIS: &str = "...";

/// Strip markup from an HTML fragment and flatten it to a single line.
pub fn clean_html(text: &str) -> String {
	let text = SCRIPT_BLOCK.replace_all(text, "");
	let text = STYLE_BLOCK.replace_all(&text, "");
	let text = TAG.replace_all(&text, " ");
	let text = WHITESPACE.replace_all(&text, " ");
	text.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&amp;", "&")
		.trim()
		.to_string()
}

/// Drop images, unwrap links and squeeze blank lines in Markdown text.
pub fn clean_markdown(text: &str) -> String {
	let text = IMAGE.replace_all(text, "");
	let text = LINK.replace_all(&text, "$1");
	let text = BLANK_RUN.replace_all(&text, "\n\n");
	text.trim().to_string()
}

/// First `limit` characters of `text`.
pub fn clip(text: &str, limit: usize) -> &str {
	match text.char_indices().nth(limit) {
		Some((end, _)) => &text[..end],
		None => text,
	}
}

/// Clip `text` to `limit` characters, appending [`ELLIPSIS`] only when something was cut.
pub fn truncate(text: &str, limit: usize) -> String {
	let clipped = clip(text, limit);
	if clipped.len() < text.len() {
		format!("{clipped}{ELLIPSIS}")
	} else {
		clipped.to_string()
	}
}
