//! File level conversion tests

use std::fs;
use tempfile::tempdir;
use txthtml_core::{convert, ConvertError, Converter};

#[test]
fn test_end_to_end_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.txt");
    fs::write(
        &input,
        "_Title_\n\n-one\n-two\nplain [[http://x][X]] text\n",
    )
    .unwrap();

    let summary = convert(&input).unwrap();

    let html = fs::read_to_string(dir.path().join("doc.html")).unwrap();
    let lines: Vec<&str> = html.lines().collect();
    assert_eq!(
        lines,
        [
            "<html>",
            "<body>",
            "<h1>Title</h1><br />",
            "<p><br />",
            "<ul>",
            "<li>one</li>",
            "<li>two</li>",
            "</ul>",
            r#"plain <a href="http://x">X</a> text<br />"#,
            "</body>",
            "</html>",
        ]
    );
    assert_eq!(summary.lines_read, 5);
    assert_eq!(summary.lines_written, lines.len());
}

#[test]
fn test_nonexistent_input_creates_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ghost.txt");

    let result = convert(&input);

    assert!(matches!(result, Err(ConvertError::NotFound(_))));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_output_dir() {
    let src_dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let input = src_dir.path().join("notes.md");
    fs::write(&input, "hello\n").unwrap();

    let summary = Converter::new()
        .with_output_dir(out_dir.path())
        .convert(&input)
        .unwrap();

    assert_eq!(summary.output, out_dir.path().join("notes.html"));
    assert!(summary.output.exists());
    assert!(!src_dir.path().join("notes.html").exists());
}
