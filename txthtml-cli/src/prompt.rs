//! Interactive input path prompt.
//!
//! Prints `Input file: ` and takes the first whitespace-delimited token typed
//! in. Reader and writer are parameters so tests can drive it without a
//! terminal.

use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Input file: ";

/// Prompt on `output` and read one path token from `input`.
///
/// Blank lines are skipped. Returns `None` when input ends before a token
/// shows up.
pub fn prompt_for_path<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<Option<String>> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
    }
}
