//! Error handling for StitchKit
//!
//! Provides the error type shared by the stitch model and the designer layer:
//! - Geometry errors (malformed or non-finite coordinate lists)
//! - Parameter errors (density, hoop dimensions)
//! - Design invariant violations (palette indices, duplicate colors)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Design error type
///
/// Represents errors raised while turning drawn shapes into stitches
/// or while assembling an [`EmbroideryDesign`](crate::EmbroideryDesign).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// A shape's coordinate list does not describe a valid geometry
    #[error("Invalid {kind} geometry: {reason}")]
    InvalidGeometry {
        /// The shape kind being converted.
        kind: String,
        /// Why the coordinates were rejected.
        reason: String,
    },

    /// Stitch density must be finite and strictly positive
    #[error("Invalid stitch density: {density}")]
    InvalidDensity {
        /// The rejected density value.
        density: f64,
    },

    /// A thread color is not a `#RRGGBB` hex string
    #[error("Invalid thread color '{color}': {reason}")]
    InvalidColor {
        /// The rejected color text.
        color: String,
        /// Why the color was rejected.
        reason: String,
    },

    /// A stitch references a palette slot that does not exist
    #[error("Color index {index} out of range for palette of {palette_len} colors")]
    ColorIndexOutOfRange {
        /// The offending color index.
        index: usize,
        /// Number of colors in the palette.
        palette_len: usize,
    },

    /// The same thread color appears twice in the palette
    #[error("Duplicate thread color in palette: {color}")]
    DuplicateColor {
        /// The duplicated color.
        color: String,
    },

    /// A design must contain at least one stitch
    #[error("Design contains no stitches")]
    EmptyDesign,

    /// Hoop dimensions could not be parsed or are not positive
    #[error("Invalid hoop size '{value}': {reason}")]
    InvalidHoop {
        /// The rejected hoop text.
        value: String,
        /// Why the hoop was rejected.
        reason: String,
    },
}

impl DesignError {
    /// Create a geometry error for the given shape kind
    pub fn geometry(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        DesignError::InvalidGeometry {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, DesignError::InvalidGeometry { .. })
    }
}

/// Result type using DesignError
pub type DesignResult<T> = std::result::Result<T, DesignError>;
