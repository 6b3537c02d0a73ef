//! File level conversion
//!
//! Checks the input exists, derives the output path, opens both files and runs the emitter.
//! Both handles are owned by [`Converter::convert`] and closed when it returns, whether the
//! conversion finished or failed half way. A failed conversion may leave a partial output
//! file behind.

use crate::emitter::convert_reader;
use crate::error::ConvertError;
use crate::output_path::derive_output_path;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What a successful conversion produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub lines_read: usize,
    pub lines_written: usize,
}

/// Converts text files to HTML files
#[derive(Debug, Clone, Default)]
pub struct Converter {
    output_dir: Option<PathBuf>,
}

impl Converter {
    /// A converter writing each output next to its input
    pub fn new() -> Self {
        Self::default()
    }

    /// Place outputs in `dir` instead, keeping the derived file name.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Where the output for `input` will be written
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let derived = PathBuf::from(derive_output_path(&input.to_string_lossy()));
        match (&self.output_dir, derived.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => derived,
        }
    }

    pub fn convert(&self, input: impl AsRef<Path>) -> Result<ConversionSummary, ConvertError> {
        let input = input.as_ref();
        if !input.exists() {
            debug!(path = %input.display(), "input does not exist");
            return Err(ConvertError::NotFound(input.to_path_buf()));
        }
        if input.is_dir() {
            return Err(ConvertError::Open {
                path: input.to_path_buf(),
                source: io::Error::other("is a directory"),
            });
        }

        let output = self.output_path_for(input);
        let reader = File::open(input).map_err(|source| ConvertError::Open {
            path: input.to_path_buf(),
            source,
        })?;
        let writer = File::create(&output).map_err(|source| ConvertError::Open {
            path: output.clone(),
            source,
        })?;

        let (lines_read, lines_written) =
            convert_reader(BufReader::new(reader), BufWriter::new(writer))?;
        info!(
            input = %input.display(),
            output = %output.display(),
            lines_read,
            lines_written,
            "converted"
        );

        Ok(ConversionSummary {
            input: input.to_path_buf(),
            output,
            lines_read,
            lines_written,
        })
    }
}

/// Convert `input` with default settings, writing the HTML next to it.
pub fn convert(input: impl AsRef<Path>) -> Result<ConversionSummary, ConvertError> {
    Converter::new().convert(input)
}
