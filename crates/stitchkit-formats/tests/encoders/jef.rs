use super::{design_of, two_color_line};
use stitchkit_core::{StitchPoint, StitchType};
use stitchkit_formats::{EmbroideryExporter, JefExporter};

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

#[test]
fn test_jef_header_and_color_table() {
    let bytes = JefExporter.encode(&two_color_line()).unwrap();

    assert_eq!(read_u32(&bytes, 0), 2);
    assert_eq!(read_u32(&bytes, 4), 10);
    assert_eq!(read_u32(&bytes, 8), 128 + 4 * 2);
    assert_eq!(read_u32(&bytes, 12), 45);
    assert_eq!(read_u32(&bytes, 20), 45);
    assert!(bytes[28..116].iter().all(|&b| b == 0));
    assert_eq!(read_u32(&bytes, 116), 1);
    assert_eq!(read_u32(&bytes, 120), 2);
}

#[test]
fn test_jef_stitches_and_terminator() {
    let bytes = JefExporter.encode(&two_color_line()).unwrap();
    let stitches = &bytes[124..];

    assert_eq!(stitches.len(), 10 * 2 + 1);
    assert_eq!(&stitches[2..4], &[5, 0]);
    assert_eq!(*stitches.last().unwrap(), 0x7F);
}

#[test]
fn test_jef_negative_moves_are_twos_complement() {
    let design = design_of(vec![
        StitchPoint::normal(-0.3, 0.0, 0),
        StitchPoint::new(0.0, -20.0, StitchType::Jump, 0),
        StitchPoint::new(0.0, 0.0, StitchType::End, 0),
    ]);
    let bytes = JefExporter.encode(&design).unwrap();
    let stitches = &bytes[116 + 4..];
    assert_eq!(stitches, &[0xFD, 0x00, 0x80, 0x03, 0x81, 0x7F]);
}
