//! Property tests for classification, lists and links

use proptest::prelude::*;
use txthtml_core::{convert_str, derive_output_path, rewrite_links};

proptest! {
    #[test]
    fn header_lines_become_h1(inner in "[^_\r\n\u{85}\u{2028}\u{2029}]*") {
        let html = convert_str(&format!("_{inner}_"));
        let expected = format!("<h1>{inner}</h1><br />");
        prop_assert!(html.lines().any(|l| l == expected));
    }

    #[test]
    fn whitespace_lines_become_paragraph_markers(ws in "[ \t]{0,6}") {
        let html = convert_str(&format!("{ws}\n"));
        prop_assert!(html.lines().any(|l| l == "<p><br />"));
    }

    #[test]
    fn hyphen_runs_become_one_list(items in prop::collection::vec("[a-z ]{0,8}", 1..6)) {
        let src: Vec<String> = items.iter().map(|i| format!("-{i}")).collect();
        let html = convert_str(&src.join("\n"));
        let lines: Vec<&str> = html.lines().collect();

        let mut expected = vec!["<ul>".to_string()];
        expected.extend(items.iter().map(|i| format!("<li>{}</li>", i.trim())));
        expected.push("</ul>".to_string());
        prop_assert_eq!(&lines[2..lines.len() - 2], expected.as_slice());
    }

    #[test]
    fn link_rewrite_is_idempotent(
        before in "[a-z ]{0,10}",
        url in "[a-z:/.]{0,10}",
        label in "[a-zA-Z ]{0,10}",
        after in "[a-z ]{0,10}",
    ) {
        let text = format!("{before}[[{url}][{label}]]{after}");
        let once = rewrite_links(&text).into_owned();
        let twice = rewrite_links(&once).into_owned();
        prop_assert_eq!(&once, &twice);
        let anchor = format!(r#"<a href="{url}">{label}</a>"#);
        prop_assert!(once.contains(&anchor));
    }

    #[test]
    fn output_path_always_ends_in_html(stem in "[a-z]{1,8}", ext in "[a-z]{0,4}") {
        let path = derive_output_path(&format!("{stem}.{ext}"));
        prop_assert_eq!(path, format!("{stem}.html"));
    }
}
