//! Unit conversion utilities
//!
//! Handles conversion between canvas pixels, millimeters and machine units.
//! Canvas pixels are treated as tenths of a millimeter and every supported
//! embroidery format counts in machine units of 0.1 mm.

use crate::error::{DesignError, DesignResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canvas pixels per millimeter
pub const PIXELS_PER_MM: f64 = 10.0;

/// Machine units per millimeter (one unit = 0.1 mm)
pub const UNITS_PER_MM: f64 = 10.0;

/// Stitch density used when the caller does not pick one
pub const DEFAULT_DENSITY: f64 = 2.0;

/// Density presets offered by the export dialog
pub const DENSITY_PRESETS: [f64; 5] = [1.0, 1.5, 2.0, 2.5, 3.0];

/// Convert a canvas pixel coordinate to millimeters
#[inline]
pub fn px_to_mm(px: f64) -> f64 {
    px / PIXELS_PER_MM
}

/// Convert millimeters to integer machine units.
///
/// Truncates toward zero rather than rounding, so `0.19 mm` becomes `1`
/// and `-0.19 mm` becomes `-1`.
#[inline]
pub fn to_machine_units(mm: f64) -> i32 {
    (mm * UNITS_PER_MM).trunc() as i32
}

/// Reject densities that are not finite and strictly positive
pub fn validate_density(density: f64) -> DesignResult<f64> {
    if density.is_finite() && density > 0.0 {
        Ok(density)
    } else {
        Err(DesignError::InvalidDensity { density })
    }
}

/// Embroidery hoop (frame) size in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoopSize {
    /// 100 x 100 mm
    Hoop100x100,
    /// 130 x 180 mm
    Hoop130x180,
    /// 200 x 200 mm
    Hoop200x200,
    /// 300 x 200 mm
    Hoop300x200,
    /// Any other frame
    Custom {
        /// Width in mm
        width: f64,
        /// Height in mm
        height: f64,
    },
}

impl HoopSize {
    /// Standard hoops in the order the export dialog lists them
    pub const PRESETS: [HoopSize; 4] = [
        HoopSize::Hoop100x100,
        HoopSize::Hoop130x180,
        HoopSize::Hoop200x200,
        HoopSize::Hoop300x200,
    ];

    /// Width and height in millimeters
    pub fn as_mm(&self) -> (f64, f64) {
        match *self {
            Self::Hoop100x100 => (100.0, 100.0),
            Self::Hoop130x180 => (130.0, 180.0),
            Self::Hoop200x200 => (200.0, 200.0),
            Self::Hoop300x200 => (300.0, 200.0),
            Self::Custom { width, height } => (width, height),
        }
    }

    /// Build a hoop from raw dimensions, preferring a matching preset
    pub fn from_mm(width: f64, height: f64) -> DesignResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(DesignError::InvalidHoop {
                value: format!("{}x{}", width, height),
                reason: "dimensions must be positive".to_string(),
            });
        }
        Ok(Self::PRESETS
            .into_iter()
            .find(|preset| preset.as_mm() == (width, height))
            .unwrap_or(Self::Custom { width, height }))
    }
}

impl Default for HoopSize {
    fn default() -> Self {
        Self::Hoop100x100
    }
}

impl fmt::Display for HoopSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.as_mm();
        write!(f, "{}x{}", width, height)
    }
}

impl FromStr for HoopSize {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DesignError::InvalidHoop {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| invalid("expected WIDTHxHEIGHT"))?;
        let width: f64 = w.trim().parse().map_err(|_| invalid("width is not a number"))?;
        let height: f64 = h
            .trim()
            .parse()
            .map_err(|_| invalid("height is not a number"))?;

        Self::from_mm(width, height)
    }
}
