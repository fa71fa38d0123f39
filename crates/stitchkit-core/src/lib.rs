//! # StitchKit Core
//!
//! Core types and utilities for StitchKit.
//! Provides the stitch model shared by the designer and the format
//! encoders, unit conversions between canvas pixels, millimeters and
//! machine units, and the design error type.

pub mod color;
pub mod error;
pub mod stitch;
pub mod units;

pub use color::ThreadColor;
pub use error::{DesignError, DesignResult};
pub use stitch::{EmbroideryDesign, StitchPoint, StitchType};
pub use units::{
    px_to_mm, to_machine_units, validate_density, HoopSize, DEFAULT_DENSITY, DENSITY_PRESETS,
    PIXELS_PER_MM, UNITS_PER_MM,
};
