//! Splitting input text into lines
//!
//! A line ends at `\r\n`, `\n`, `\r`, U+0085, U+2028 or U+2029. A terminator at the very end
//! of the text does not start another, empty line, so `"a\n"` is one line and `""` is none.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new("\r\n|[\n\r\u{85}\u{2028}\u{2029}]").unwrap());

/// The lines of `text`, terminators removed
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut lines: Vec<&str> = SEPARATOR.split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines.into_iter()
}
