//! Line scanner and HTML emitter
//!
//! The emitter is a two state machine driven one input line at a time:
//!
//! | State          | Line            | Output                                   | Next state     |
//! |----------------|-----------------|------------------------------------------|----------------|
//! | ScanningNormal | header          | `<h1>text</h1><br />`                    | ScanningNormal |
//! | ScanningNormal | blank           | `<p><br />`                              | ScanningNormal |
//! | ScanningNormal | list item       | `<ul>`, `<li>text</li>`                  | InList         |
//! | ScanningNormal | normal          | line with links rewritten + `<br />`     | ScanningNormal |
//! | InList         | list item       | `<li>text</li>`                          | InList         |
//! | InList         | anything else   | `</ul>`, then the pending line as normal | ScanningNormal |
//! | InList         | end of input    | `</ul>`                                  | ScanningNormal |
//!
//! The line that ends a list is never re-classified: a header or blank line right after a
//! list is emitted as plain text with links rewritten. `<li>` lines carry no `<br />`.

use crate::classify::{is_list_item, list_item_text, LineKind};
use crate::lines::split_lines;
use crate::links::rewrite_links;
use std::io::{self, Read, Write};
use tracing::debug;

const LINE_BREAK: &str = "<br />";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ScanningNormal,
    InList,
}

/// Writes the HTML for a sequence of input lines into `out`
pub struct Emitter<W: Write> {
    out: W,
    state: ScanState,
    lines_read: usize,
    lines_written: usize,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Emitter {
            out,
            state: ScanState::ScanningNormal,
            lines_read: 0,
            lines_written: 0,
        }
    }

    /// Emit a complete document for `lines`, wrapper tags included.
    ///
    /// Read errors from `lines` stop the conversion and are returned as is; whatever was
    /// written so far stays in the sink.
    pub fn run<I>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        self.write_line("<html>")?;
        self.write_line("<body>")?;

        for line in lines {
            let line = line?;
            self.lines_read += 1;
            match self.state {
                ScanState::ScanningNormal => self.scan(line)?,
                ScanState::InList => self.continue_list(line)?,
            }
        }
        if self.state == ScanState::InList {
            self.close_list(None)?;
        }

        self.write_line("</body>")?;
        self.write_line("</html>")?;
        self.out.flush()
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn scan(&mut self, line: String) -> io::Result<()> {
        match LineKind::classify(&line) {
            LineKind::Header(text) => {
                debug!(line = self.lines_read, "header");
                self.write_carried(&format!("<h1>{text}</h1>"))
            }
            LineKind::Blank => {
                debug!(line = self.lines_read, "blank");
                self.write_carried("<p>")
            }
            LineKind::ListItem => {
                debug!(line = self.lines_read, "list start");
                self.state = ScanState::InList;
                self.write_line("<ul>")?;
                self.write_item(&line)
            }
            LineKind::Normal => self.write_carried(&rewrite_links(&line)),
        }
    }

    fn continue_list(&mut self, line: String) -> io::Result<()> {
        if is_list_item(&line) {
            self.write_item(&line)
        } else {
            self.close_list(Some(line))
        }
    }

    /// Leave list mode. `pending` is the line that ended the list, if input did not run out.
    fn close_list(&mut self, pending: Option<String>) -> io::Result<()> {
        debug!(line = self.lines_read, "list end");
        self.write_line("</ul>")?;
        self.state = ScanState::ScanningNormal;
        match pending {
            Some(line) => self.write_carried(&rewrite_links(&line)),
            None => Ok(()),
        }
    }

    fn write_item(&mut self, line: &str) -> io::Result<()> {
        self.write_line(&format!("<li>{}</li>", list_item_text(line)))
    }

    fn write_carried(&mut self, text: &str) -> io::Result<()> {
        self.write_line(&format!("{text}{LINE_BREAK}"))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.lines_written += 1;
        Ok(())
    }
}

/// Convert everything readable from `reader` into `writer`, returning (lines read, lines written).
///
/// The input is read in full before emitting, then split with [`split_lines`]. Input that is
/// not UTF-8 fails with [`io::ErrorKind::InvalidData`] before anything is written.
pub fn convert_reader<R: Read, W: Write>(
    mut reader: R,
    writer: W,
) -> io::Result<(usize, usize)> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;

    let mut emitter = Emitter::new(writer);
    emitter.run(split_lines(&source).map(|line| Ok(line.to_string())))?;
    Ok((emitter.lines_read(), emitter.lines_written()))
}

/// Convert an in-memory document.
///
/// Infallible: the source is already UTF-8 and writing into a `Vec` cannot fail.
pub fn convert_str(source: &str) -> String {
    let mut html = Vec::with_capacity(source.len() * 2);
    convert_reader(source.as_bytes(), &mut html).expect("converting into a Vec does not fail");
    String::from_utf8_lossy(&html).into_owned()
}
