//! Stitch generation from drawn shapes.
//!
//! Every function works in canvas pixels and stores millimeters (pixels / 10)
//! into the emitted [`StitchPoint`]s.

use crate::shapes::{Corners, Geometry, Point, ShapeKind};
use std::f64::consts::PI;
use stitchkit_core::{
    px_to_mm, validate_density, DesignError, DesignResult, StitchPoint, StitchType,
};

/// Upper bound on stitches generated for a single shape
pub const MAX_STITCHES_PER_SHAPE: usize = 1_000_000;

/// Turn one shape into stitches.
///
/// `density` is stitches per pixel of radius for outlines and rows per pixel
/// for fills. The result is empty only when the shape has no extent. A shape
/// that would need more than [`MAX_STITCHES_PER_SHAPE`] stitches is rejected.
pub fn tessellate(
    geometry: &Geometry,
    color_index: usize,
    density: f64,
) -> DesignResult<Vec<StitchPoint>> {
    let density = validate_density(density)?;

    let points = match geometry {
        Geometry::Circle(corners) => circle_outline(corners, color_index, density)?,
        Geometry::Rectangle(corners) => rectangle_fill(corners, color_index, density)?,
        Geometry::Text(anchor) => text_anchor(anchor, color_index),
    };

    tracing::debug!(
        kind = %geometry.kind(),
        stitches = points.len(),
        density,
        "tessellated shape"
    );
    Ok(points)
}

/// Validate raw canvas coordinates for `kind` and tessellate them.
pub fn tessellate_shape(
    kind: ShapeKind,
    coords: &[f64],
    color_index: usize,
    density: f64,
) -> DesignResult<Vec<StitchPoint>> {
    let geometry = Geometry::from_coords(kind, coords)?;
    tessellate(&geometry, color_index, density)
}

/// Running stitch around an ellipse inscribed in the corners, closed by an
/// `End` stitch on the first point.
pub fn circle_outline(
    corners: &Corners,
    color_index: usize,
    density: f64,
) -> DesignResult<Vec<StitchPoint>> {
    let center_x = (corners.x1 + corners.x2) / 2.0;
    let center_y = (corners.y1 + corners.y2) / 2.0;
    let radius_x = (corners.x2 - corners.x1) / 2.0;
    let radius_y = (corners.y2 - corners.y1) / 2.0;

    let count = (radius_x.max(radius_y) * density).floor();
    if count < 1.0 {
        return Ok(Vec::new());
    }
    // One extra stitch closes the outline.
    let count = checked_stitch_count("circle", count + 1.0)? - 1;

    let mut points: Vec<StitchPoint> = (0..count)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / count as f64;
            StitchPoint::normal(
                px_to_mm(center_x + radius_x * angle.cos()),
                px_to_mm(center_y + radius_y * angle.sin()),
                color_index,
            )
        })
        .collect();

    let first = points[0];
    points.push(StitchPoint::new(first.x, first.y, StitchType::End, color_index));
    Ok(points)
}

/// Boustrophedon fill: horizontal rows `1 / density` pixels apart, each row
/// running opposite to the previous one.
pub fn rectangle_fill(
    corners: &Corners,
    color_index: usize,
    density: f64,
) -> DesignResult<Vec<StitchPoint>> {
    let spacing = 1.0 / density;
    let span = corners.y2 - corners.y1;
    if span < 0.0 {
        return Ok(Vec::new());
    }

    // Row positions come from the row index so float accumulation cannot drop the last row.
    let rows = checked_stitch_count("rectangle", 2.0 * row_count_f64(span, spacing))? / 2;
    let (left, right) = (px_to_mm(corners.x1), px_to_mm(corners.x2));

    let mut points = Vec::with_capacity(rows * 2);
    for row in 0..rows {
        let y = px_to_mm(corners.y1 + row as f64 * spacing);
        let (from, to) = if row % 2 == 0 {
            (left, right)
        } else {
            (right, left)
        };
        points.push(StitchPoint::normal(from, y, color_index));
        points.push(StitchPoint::normal(to, y, color_index));
    }
    Ok(points)
}

/// Placeholder for text: a single stitch at the anchor.
pub fn text_anchor(anchor: &Point, color_index: usize) -> Vec<StitchPoint> {
    vec![StitchPoint::normal(
        px_to_mm(anchor.x),
        px_to_mm(anchor.y),
        color_index,
    )]
}

/// Rows in a fill of height `span`: `floor(span / spacing) + 1`, saturating
pub fn row_count(span: f64, spacing: f64) -> usize {
    (((span / spacing) + 1e-9).floor() as usize).saturating_add(1)
}

fn row_count_f64(span: f64, spacing: f64) -> f64 {
    ((span / spacing) + 1e-9).floor() + 1.0
}

/// Convert a stitch count computed in floating point, refusing anything
/// above [`MAX_STITCHES_PER_SHAPE`] before it is used to allocate.
fn checked_stitch_count(kind: &str, count: f64) -> DesignResult<usize> {
    if count.is_nan() || count > MAX_STITCHES_PER_SHAPE as f64 {
        return Err(DesignError::geometry(
            kind,
            format!(
                "needs {} stitches, more than the {} allowed per shape",
                count, MAX_STITCHES_PER_SHAPE
            ),
        ));
    }
    Ok(count as usize)
}
