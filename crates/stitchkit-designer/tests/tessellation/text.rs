use stitchkit_core::StitchType;
use stitchkit_designer::{tessellate, Geometry, Point};

#[test]
fn test_text_emits_single_anchor_stitch() {
    let points = tessellate(&Geometry::Text(Point::new(125.0, 40.0)), 3, 2.5).unwrap();

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].stitch_type, StitchType::Normal);
    assert_eq!((points[0].x, points[0].y), (12.5, 4.0));
    assert_eq!(points[0].color_index, 3);
}

#[test]
fn test_text_ignores_extreme_density() {
    let points = tessellate(&Geometry::Text(Point::new(5.0, 5.0)), 0, 1e300).unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!((points[0].x, points[0].y), (0.5, 0.5));
}
