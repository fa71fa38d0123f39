//! Drawn shapes as handed over by the editor canvas.
//!
//! The canvas reports each item as a kind, a flat coordinate list in canvas
//! pixels and an optional fill color. [`Geometry`] is the validated form the
//! tessellator works on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use stitchkit_core::{DesignError, DesignResult};

/// Kinds of canvas items that can be stitched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Circle or oval given by its bounding box
    #[serde(alias = "oval", alias = "ellipse")]
    Circle,
    /// Axis-aligned rectangle
    Rectangle,
    /// Text item given by its anchor
    Text,
}

impl ShapeKind {
    /// Number of coordinates the canvas reports for this kind
    pub fn coordinate_count(&self) -> usize {
        match self {
            Self::Circle | Self::Rectangle => 4,
            Self::Text => 2,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle => write!(f, "circle"),
            Self::Rectangle => write!(f, "rectangle"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" | "oval" | "ellipse" => Ok(Self::Circle),
            "rectangle" | "rect" => Ok(Self::Rectangle),
            "text" => Ok(Self::Text),
            _ => Err(format!("Unknown shape kind: {}", s)),
        }
    }
}

/// A 2D point in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounds spanning two corners given in any order
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    pub fn from_point(p: Point) -> Self {
        Self::from_corners(p.x, p.y, p.x, p.y)
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Corner coordinates exactly as drawn (`x1,y1` then `x2,y2`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corners {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Corners {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Validated geometry of a drawn shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Circle(Corners),
    Rectangle(Corners),
    /// Text anchor; glyph outlines are not stitched
    Text(Point),
}

impl Geometry {
    /// Validate a canvas coordinate list for the given kind
    pub fn from_coords(kind: ShapeKind, coords: &[f64]) -> DesignResult<Self> {
        let expected = kind.coordinate_count();
        if coords.len() != expected {
            return Err(DesignError::geometry(
                kind.to_string(),
                format!("expected {} coordinates, got {}", expected, coords.len()),
            ));
        }
        if let Some(bad) = coords.iter().find(|c| !c.is_finite()) {
            return Err(DesignError::geometry(
                kind.to_string(),
                format!("non-finite coordinate {}", bad),
            ));
        }

        Ok(match kind {
            ShapeKind::Circle => {
                Self::Circle(Corners::new(coords[0], coords[1], coords[2], coords[3]))
            }
            ShapeKind::Rectangle => {
                Self::Rectangle(Corners::new(coords[0], coords[1], coords[2], coords[3]))
            }
            ShapeKind::Text => Self::Text(Point::new(coords[0], coords[1])),
        })
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Text(_) => ShapeKind::Text,
        }
    }

    /// Canvas extent of the shape. Text only contributes its anchor.
    pub fn bounds(&self) -> Bounds {
        match *self {
            Self::Circle(c) | Self::Rectangle(c) => Bounds::from_corners(c.x1, c.y1, c.x2, c.y2),
            Self::Text(anchor) => Bounds::from_point(anchor),
        }
    }
}

/// A canvas item in drawing order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnShape {
    pub kind: ShapeKind,
    pub coords: Vec<f64>,
    /// Fill color as `#RRGGBB`; empty or missing means unfilled
    #[serde(default)]
    pub fill: Option<String>,
}

impl DrawnShape {
    pub fn new(kind: ShapeKind, coords: Vec<f64>, fill: Option<String>) -> Self {
        Self { kind, coords, fill }
    }

    pub fn circle(x1: f64, y1: f64, x2: f64, y2: f64, fill: &str) -> Self {
        Self::new(ShapeKind::Circle, vec![x1, y1, x2, y2], Some(fill.to_string()))
    }

    pub fn rectangle(x1: f64, y1: f64, x2: f64, y2: f64, fill: &str) -> Self {
        Self::new(
            ShapeKind::Rectangle,
            vec![x1, y1, x2, y2],
            Some(fill.to_string()),
        )
    }

    pub fn text(x: f64, y: f64, fill: &str) -> Self {
        Self::new(ShapeKind::Text, vec![x, y], Some(fill.to_string()))
    }

    /// Drop the fill, leaving an outline-only item
    pub fn unfilled(mut self) -> Self {
        self.fill = None;
        self
    }

    /// The fill color, if the shape has a non-empty one
    pub fn fill_color(&self) -> Option<&str> {
        self.fill
            .as_deref()
            .map(str::trim)
            .filter(|fill| !fill.is_empty())
    }

    pub fn geometry(&self) -> DesignResult<Geometry> {
        Geometry::from_coords(self.kind, &self.coords)
    }
}

/// Parse the editor's JSON list of drawn shapes
pub fn parse_drawing(json: &str) -> serde_json::Result<Vec<DrawnShape>> {
    serde_json::from_str(json)
}
