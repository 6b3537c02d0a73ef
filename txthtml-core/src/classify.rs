//! Line classification
//!
//! Every input line falls in exactly one [`LineKind`]. The checks run in a fixed priority
//! order: header, blank, list item, normal. A line like `_ _` is a header, not a blank line,
//! because the header test comes first.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^_[^_]*_$").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-.*$").unwrap());

/// The category of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `_text_`, carries the text between the underscores
    Header(&'a str),
    /// Empty or whitespace only
    Blank,
    /// Starts with `-`
    ListItem,
    /// Anything else
    Normal,
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        if HEADER.is_match(line) {
            LineKind::Header(&line[1..line.len() - 1])
        } else if trim_control(line).is_empty() {
            LineKind::Blank
        } else if is_list_item(line) {
            LineKind::ListItem
        } else {
            LineKind::Normal
        }
    }
}

/// Whether `line` continues (or starts) an unordered list
pub fn is_list_item(line: &str) -> bool {
    LIST_ITEM.is_match(line)
}

/// Text of a list item: the leading hyphen dropped, surrounding whitespace trimmed
pub fn list_item_text(line: &str) -> &str {
    trim_control(line.strip_prefix('-').unwrap_or(line))
}

/// Strip every char up to and including U+0020 from both ends. Other Unicode whitespace,
/// such as U+00A0, is content.
fn trim_control(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}
