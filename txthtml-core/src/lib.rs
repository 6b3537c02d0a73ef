//! Plain text to HTML conversion
//!
//!     This crate turns a text file written with a handful of line conventions into an HTML
//!     document. It is a pure lib: it powers txthtml-cli but is shell agnostic, that is no code
//!     here prompts, prints or reads env vars. Diagnostics go through `tracing`.
//!
//! Markup
//!
//!     Four line categories are recognised, tested in this order:
//!
//!     - Header:    `_Title_`        → `<h1>Title</h1><br />`
//!     - Blank:     empty or spaces  → `<p><br />`
//!     - List item: `- item`         → `<ul>` / `<li>item</li>` ... / `</ul>`
//!     - Normal:    anything else    → the line with links rewritten, plus `<br />`
//!
//!     Links use the bracket notation `[[url][label]]` and become `<a href="url">label</a>`.
//!     Input text is not escaped, so raw HTML in the source passes through untouched.
//!
//!     The file structure :
//!     .
//!     ├── error.rs          # ConvertError
//!     ├── classify.rs       # LineKind, the priority ordered line classifier
//!     ├── lines.rs          # line splitting on \n, \r\n, \r and Unicode separators
//!     ├── links.rs          # [[url][label]] rewriting
//!     ├── output_path.rs    # input path → output path
//!     ├── emitter.rs        # line scanner state machine writing HTML
//!     ├── convert.rs        # file level conversion
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── html
//!         ├── export.rs     # end to end documents
//!         └── properties.rs # proptest properties
//!
//!     Rust does not discover tests in subdirectories by default, so they are included from
//!     tests/lib.rs.

pub mod classify;
pub mod convert;
pub mod emitter;
pub mod error;
pub mod lines;
pub mod links;
pub mod output_path;

pub use classify::LineKind;
pub use convert::{convert, ConversionSummary, Converter};
pub use emitter::{convert_reader, convert_str, Emitter};
pub use error::ConvertError;
pub use links::rewrite_links;
pub use output_path::derive_output_path;
