use super::{design_of, two_color_line};
use stitchkit_core::{StitchPoint, StitchType};
use stitchkit_formats::{DstExporter, EmbroideryExporter};

#[test]
fn test_dst_header() {
    let bytes = DstExporter.encode(&two_color_line()).unwrap();

    assert_eq!(&bytes[0..13], b"LA:Desktop   ");
    assert_eq!(&bytes[14..23], b"ST:    10");
    for offset in [42, 48, 54, 60] {
        assert_eq!(&bytes[offset..offset + 5], b"+   0");
    }
    assert!(bytes[65..512].iter().all(|&b| b == 0));
}

#[test]
fn test_dst_records_and_trailer() {
    let bytes = DstExporter.encode(&two_color_line()).unwrap();

    assert_eq!(bytes.len(), 512 + 10 * 3 + 3);
    assert_eq!(&bytes[512..515], &[0, 0, 0]);
    assert_eq!(&bytes[515..518], &[0, 5, 0]);
    assert_eq!(&bytes[bytes.len() - 3..], &[0x03, 0x00, 0x00]);
}

#[test]
fn test_dst_every_point_advances() {
    let design = design_of(vec![
        StitchPoint::normal(1.0, 0.0, 0),
        StitchPoint::new(4.0, 5.0, StitchType::End, 0),
        StitchPoint::normal(2.0, 0.0, 0),
    ]);
    let bytes = DstExporter.encode(&design).unwrap();
    let records = &bytes[512..];

    assert_eq!(&records[0..3], &[0x00, 10, 0]);
    assert_eq!(&records[3..6], &[0x20, 30, 9]);
    assert_eq!(&records[6..9], &[0x10, 20, 9]);
}

#[test]
fn test_dst_clamps_long_moves() {
    let design = design_of(vec![StitchPoint::new(50.0, 0.0, StitchType::Jump, 0)]);
    let bytes = DstExporter.encode(&design).unwrap();
    assert_eq!(&bytes[512..515], &[0x87, 121 % 41, 0]);
}
