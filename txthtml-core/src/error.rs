//! Error types for conversion

use std::io;
use std::path::PathBuf;

/// Errors that can occur while converting a file
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input path does not exist
    #[error("Input file does not exist: {}", .0.display())]
    NotFound(PathBuf),
    /// A path exists (or was expected to be creatable) but could not be opened
    #[error("Could not open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Read or write failure after both files were opened
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
