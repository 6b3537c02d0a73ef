//! Output file naming

/// Derive the HTML output path for `input`.
///
/// Everything from the last `.` onward is replaced with `.html`; a path without a dot gets
/// `.html` appended. The dot is searched in the whole string, directories included, and the
/// filesystem is never consulted.
pub fn derive_output_path(input: &str) -> String {
    match input.rfind('.') {
        Some(index) => format!("{}.html", &input[..index]),
        None => format!("{input}.html"),
    }
}
