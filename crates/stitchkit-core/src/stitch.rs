//! Stitch model shared by the designer and the format encoders.

use crate::error::{DesignError, DesignResult};
use crate::units::{to_machine_units, HoopSize};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// What the machine does at a stitch point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StitchType {
    /// Needle penetration at this position with the current thread
    Normal,
    /// Move without stitching
    Jump,
    /// Cut the thread. Reserved; the tessellator never emits it.
    Trim,
    /// Switch to the next thread, position unchanged
    ColorChange,
    /// Terminal marker closing an outline
    End,
}

impl StitchType {
    /// Numeric stitch code (0 = normal ... 4 = end)
    pub fn code(&self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Jump => 1,
            Self::Trim => 2,
            Self::ColorChange => 3,
            Self::End => 4,
        }
    }
}

impl TryFrom<u8> for StitchType {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Jump),
            2 => Ok(Self::Trim),
            3 => Ok(Self::ColorChange),
            4 => Ok(Self::End),
            other => Err(other),
        }
    }
}

impl fmt::Display for StitchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Jump => write!(f, "jump"),
            Self::Trim => write!(f, "trim"),
            Self::ColorChange => write!(f, "color change"),
            Self::End => write!(f, "end"),
        }
    }
}

/// A single stitch in design space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StitchPoint {
    /// X position in millimeters
    pub x: f64,
    /// Y position in millimeters
    pub y: f64,
    pub stitch_type: StitchType,
    /// Index into the design's thread palette
    pub color_index: usize,
}

impl StitchPoint {
    pub fn new(x: f64, y: f64, stitch_type: StitchType, color_index: usize) -> Self {
        Self {
            x,
            y,
            stitch_type,
            color_index,
        }
    }

    /// Shorthand for a `Normal` stitch
    pub fn normal(x: f64, y: f64, color_index: usize) -> Self {
        Self::new(x, y, StitchType::Normal, color_index)
    }

    /// Position in machine units (0.1 mm, truncated)
    pub fn machine_position(&self) -> (i32, i32) {
        (to_machine_units(self.x), to_machine_units(self.y))
    }
}

/// A complete design ready to be encoded.
///
/// Point order is stitch order and machine execution order. A design is
/// built once per export and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbroideryDesign {
    points: Vec<StitchPoint>,
    thread_colors: Vec<String>,
    size_mm: (f64, f64),
    hoop_size_mm: (f64, f64),
}

impl EmbroideryDesign {
    /// Assemble a design, checking its invariants.
    ///
    /// Every point's color index must address the palette. A design whose
    /// palette is empty may still reference slot 0: that is the synthetic
    /// origin stitch of a drawing without filled shapes.
    pub fn new(
        points: Vec<StitchPoint>,
        thread_colors: Vec<String>,
        size_mm: (f64, f64),
        hoop: HoopSize,
    ) -> DesignResult<Self> {
        if points.is_empty() {
            return Err(DesignError::EmptyDesign);
        }

        let mut seen = HashSet::with_capacity(thread_colors.len());
        for color in &thread_colors {
            if !seen.insert(color.as_str()) {
                return Err(DesignError::DuplicateColor {
                    color: color.clone(),
                });
            }
        }

        let slots = thread_colors.len().max(1);
        if let Some(point) = points.iter().find(|p| p.color_index >= slots) {
            return Err(DesignError::ColorIndexOutOfRange {
                index: point.color_index,
                palette_len: thread_colors.len(),
            });
        }

        tracing::trace!(
            points = points.len(),
            colors = thread_colors.len(),
            "assembled embroidery design"
        );

        Ok(Self {
            points,
            thread_colors,
            size_mm,
            hoop_size_mm: hoop.as_mm(),
        })
    }

    pub fn points(&self) -> &[StitchPoint] {
        &self.points
    }

    /// Palette as `#RRGGBB` strings, first-encounter order
    pub fn thread_colors(&self) -> &[String] {
        &self.thread_colors
    }

    /// Design extent (width, height) in millimeters
    pub fn size_mm(&self) -> (f64, f64) {
        self.size_mm
    }

    /// Target hoop (width, height) in millimeters. Never checked against `size_mm`.
    pub fn hoop_size_mm(&self) -> (f64, f64) {
        self.hoop_size_mm
    }

    pub fn stitch_count(&self) -> usize {
        self.points.len()
    }

    pub fn color_count(&self) -> usize {
        self.thread_colors.len()
    }

    /// Whether the design extent exceeds the hoop on either axis
    pub fn exceeds_hoop(&self) -> bool {
        self.size_mm.0 > self.hoop_size_mm.0 || self.size_mm.1 > self.hoop_size_mm.1
    }
}
