use stitchkit_core::StitchType;
use stitchkit_designer::{row_count, tessellate, Corners, Geometry};

fn rectangle(x1: f64, y1: f64, x2: f64, y2: f64) -> Geometry {
    Geometry::Rectangle(Corners::new(x1, y1, x2, y2))
}

#[test]
fn test_rectangle_row_count() {
    // spacing = 1 / 2.0 = 0.5 px over 20 px -> 41 rows
    let points = tessellate(&rectangle(0.0, 0.0, 20.0, 20.0), 0, 2.0).unwrap();
    assert_eq!(points.len(), 2 * 41);
    assert_eq!(row_count(20.0, 0.5), 41);
}

#[test]
fn test_rectangle_rows_alternate_direction() {
    let points = tessellate(&rectangle(10.0, 0.0, 30.0, 4.0), 0, 1.0).unwrap();
    let rows: Vec<_> = points.chunks(2).collect();
    assert_eq!(rows.len(), 5);

    for (i, row) in rows.iter().enumerate() {
        let (start, end) = (row[0], row[1]);
        assert_eq!(start.y, end.y);
        if i % 2 == 0 {
            assert_eq!((start.x, end.x), (1.0, 3.0));
        } else {
            assert_eq!((start.x, end.x), (3.0, 1.0));
        }
    }
}

#[test]
fn test_rectangle_rows_are_evenly_spaced() {
    let points = tessellate(&rectangle(0.0, 0.0, 10.0, 1.0), 0, 3.0).unwrap();
    // floor(1.0 / (1/3)) + 1 = 4 rows at 0, 1/3, 2/3, 1 px
    assert_eq!(points.len(), 8);
    let last_row_y = points[6].y * 10.0;
    assert!((last_row_y - 1.0).abs() < 1e-9);
    assert!(points
        .iter()
        .all(|p| p.stitch_type == StitchType::Normal));
}

#[test]
fn test_flat_rectangle_is_one_row() {
    let points = tessellate(&rectangle(0.0, 5.0, 10.0, 5.0), 1, 2.0).unwrap();
    assert_eq!(points.len(), 2);
    assert!(points.iter().all(|p| p.color_index == 1));
}

#[test]
fn test_inverted_rectangle_yields_nothing() {
    let points = tessellate(&rectangle(0.0, 10.0, 10.0, 0.0), 0, 2.0).unwrap();
    assert!(points.is_empty());
}

#[test]
fn test_oversized_fill_is_rejected_not_allocated() {
    let err = tessellate(&rectangle(0.0, 0.0, 20.0, 20.0), 0, 1e300).unwrap_err();
    assert!(err.is_geometry_error());

    let err = tessellate(&rectangle(0.0, -1e300, 10.0, 1e300), 0, 1.0).unwrap_err();
    assert!(err.is_geometry_error());

    // 1e9 rows per pixel over 20 px would need 4e10 stitches
    assert!(tessellate(&rectangle(0.0, 0.0, 20.0, 20.0), 0, 1e9).is_err());
}
