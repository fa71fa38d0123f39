//! Design assembly from a drawing.

use crate::palette::build_palette;
use crate::shapes::{Bounds, DrawnShape};
use crate::tessellate::tessellate_shape;
use stitchkit_core::{
    px_to_mm, validate_density, DesignResult, EmbroideryDesign, HoopSize, StitchPoint,
    DEFAULT_DENSITY,
};

/// Design size reported when the drawing is empty, in millimeters
pub const EMPTY_DRAWING_SIZE_MM: (f64, f64) = (100.0, 100.0);

/// Converts a drawing into an [`EmbroideryDesign`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignBuilder {
    density: f64,
    hoop: HoopSize,
}

impl DesignBuilder {
    pub fn new(density: f64, hoop: HoopSize) -> Self {
        Self { density, hoop }
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn hoop(&self) -> HoopSize {
        self.hoop
    }

    /// Walk the shapes in drawing order and collect their stitches.
    ///
    /// Colors are resolved up front by [`build_palette`], so a shape that
    /// cannot be tessellated is logged and skipped while its color stays in
    /// the palette. Unfilled shapes are skipped. A drawing that
    /// yields no stitches gets a single stitch at the origin.
    pub fn build(&self, shapes: &[DrawnShape]) -> DesignResult<EmbroideryDesign> {
        let density = validate_density(self.density)?;

        let (colors, indices) = build_palette(shapes.iter().map(DrawnShape::fill_color));
        let mut points: Vec<StitchPoint> = Vec::new();
        let mut skipped = 0usize;

        for (position, (shape, color_index)) in shapes.iter().zip(indices).enumerate() {
            let Some(color_index) = color_index else {
                continue;
            };

            match tessellate_shape(shape.kind, &shape.coords, color_index, density) {
                Ok(stitches) => points.extend(stitches),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(position, kind = %shape.kind, "skipping shape: {}", e);
                }
            }
        }

        if points.is_empty() {
            points.push(StitchPoint::normal(0.0, 0.0, 0));
        }

        let size_mm = drawing_size_mm(shapes);
        tracing::info!(
            shapes = shapes.len(),
            skipped,
            stitches = points.len(),
            colors = colors.len(),
            width_mm = size_mm.0,
            height_mm = size_mm.1,
            "converted drawing to stitches"
        );

        EmbroideryDesign::new(points, colors, size_mm, self.hoop)
    }
}

impl Default for DesignBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_DENSITY, HoopSize::default())
    }
}

/// Bounding box of every shape with valid coordinates, filled or not
pub fn drawing_bounds(shapes: &[DrawnShape]) -> Option<Bounds> {
    shapes
        .iter()
        .filter_map(|shape| shape.geometry().ok())
        .map(|geometry| geometry.bounds())
        .reduce(|acc, b| acc.union(&b))
}

/// Drawing extent in millimeters, or [`EMPTY_DRAWING_SIZE_MM`] for an empty drawing
pub fn drawing_size_mm(shapes: &[DrawnShape]) -> (f64, f64) {
    drawing_bounds(shapes)
        .map(|b| (px_to_mm(b.width()), px_to_mm(b.height())))
        .unwrap_or(EMPTY_DRAWING_SIZE_MM)
}
