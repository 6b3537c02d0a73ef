//! Inline hyperlink rewriting
//!
//! `[[url][label]]` becomes `<a href="url">label</a>`. Both parts match lazily, so
//! `[[a][b]] [[c][d]]` yields two anchors rather than one spanning the whole line. Empty
//! urls or labels are allowed. Nothing is escaped.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(.*?)\]\[(.*?)\]\]").unwrap());

/// Rewrite every link in `text`, left to right. Borrows when there is nothing to replace.
pub fn rewrite_links(text: &str) -> Cow<'_, str> {
    LINK.replace_all(text, r#"<a href="${1}">${2}</a>"#)
}
