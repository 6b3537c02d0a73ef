//! Support code for the txthtml binary.
//!
//! Everything that touches the process console lives here so the conversion
//! library never has to.

pub mod prompt;
