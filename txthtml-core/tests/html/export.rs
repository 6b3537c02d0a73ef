//! Export tests (text → HTML)
//!
//! These tests convert whole documents in memory and check the exact emitted lines.

use insta::assert_snapshot;
use txthtml_core::convert_str;

#[test]
fn test_mixed_document() {
    let src = "_Title_\n\n-one\n-two\nplain [[http://x][X]] text\n";
    assert_snapshot!(convert_str(src), @r#"
    <html>
    <body>
    <h1>Title</h1><br />
    <p><br />
    <ul>
    <li>one</li>
    <li>two</li>
    </ul>
    plain <a href="http://x">X</a> text<br />
    </body>
    </html>
    "#);
}

#[test]
fn test_paragraphs_are_markers_only() {
    let src = "first line\nsecond line\n\nthird line\n";
    assert_snapshot!(convert_str(src), @r"
    <html>
    <body>
    first line<br />
    second line<br />
    <p><br />
    third line<br />
    </body>
    </html>
    ");
}

#[test]
fn test_list_items_are_trimmed() {
    let src = "-   spaced out   \n-\n- [[a][b]]\n";
    assert_snapshot!(convert_str(src), @r"
    <html>
    <body>
    <ul>
    <li>spaced out</li>
    <li></li>
    <li>[[a][b]]</li>
    </ul>
    </body>
    </html>
    ");
}

#[test]
fn test_header_after_list_is_plain_text() {
    let src = "-item\n_Not a header_\n_Header_\n";
    assert_snapshot!(convert_str(src), @r"
    <html>
    <body>
    <ul>
    <li>item</li>
    </ul>
    _Not a header_<br />
    <h1>Header</h1><br />
    </body>
    </html>
    ");
}

#[test]
fn test_html_in_source_is_not_escaped() {
    let html = convert_str("<b>bold</b> & <i>more</i>\n");
    assert!(html.contains("<b>bold</b> & <i>more</i><br />"));
}

#[test]
fn test_no_doctype_or_head() {
    let html = convert_str("text\n");
    assert!(html.starts_with("<html>\n<body>\n"));
    assert!(html.ends_with("</body>\n</html>\n"));
    assert!(!html.contains("<!DOCTYPE"));
    assert!(!html.contains("<head>"));
}
