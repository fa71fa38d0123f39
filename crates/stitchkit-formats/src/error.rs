//! Error types for the format encoders.
//!
//! This module provides structured error types for encoding designs into
//! machine formats and writing the resulting files.

use crate::format::FileFormat;
use std::io;
use std::path::PathBuf;
use stitchkit_core::DesignError;
use thiserror::Error;

/// Errors that can occur while encoding or writing an embroidery file.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error while writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The finished file could not be moved into place.
    #[error("Failed to write {}: {reason}", .path.display())]
    Persist { path: PathBuf, reason: String },

    /// The design itself is malformed (bad color string, broken invariant).
    #[error("Invalid design: {0}")]
    Design(#[from] DesignError),

    /// The palette does not fit the format's color table.
    #[error("{format} supports at most {max} thread colors, design has {count}")]
    TooManyColors {
        format: FileFormat,
        count: usize,
        max: usize,
    },

    /// The stitch count does not fit the format's count field.
    #[error("{format} stores at most {max} stitches, design has {count}")]
    TooManyStitches {
        format: FileFormat,
        count: usize,
        max: usize,
    },

    /// A header dimension cannot be represented in the format.
    #[error("Design {axis} of {value_mm} mm cannot be stored in {format}")]
    DimensionOutOfRange {
        format: FileFormat,
        axis: &'static str,
        value_mm: f64,
    },

    /// The fixed-size header area was overrun.
    #[error("{format} header is {len} bytes, exceeding the {limit}-byte fixed area")]
    HeaderOverflow {
        format: FileFormat,
        len: usize,
        limit: usize,
    },

    /// The requested file format is not supported.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for encoder operations.
pub type FormatResult<T> = Result<T, FormatError>;
