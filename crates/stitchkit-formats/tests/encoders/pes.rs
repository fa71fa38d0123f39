use super::{design_of, two_color_line};
use stitchkit_core::{EmbroideryDesign, HoopSize, StitchPoint, StitchType};
use stitchkit_formats::{EmbroideryExporter, FormatError, PesExporter};

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

#[test]
fn test_pes_header_and_pec_offset() {
    let bytes = PesExporter.encode(&two_color_line()).unwrap();

    assert_eq!(&bytes[0..8], b"#PES0001");
    let pec_offset = read_u32(&bytes, 8) as usize;
    assert_eq!(pec_offset, 8 + 4 + 12 + 3 * 2);
    assert_eq!(&bytes[pec_offset..pec_offset + 8], b"#PEC0001");

    assert_eq!(read_u32(&bytes, 12), 45);
    assert_eq!(read_u32(&bytes, 16), 0);
    assert_eq!(read_u32(&bytes, 20), 2);
    assert_eq!(&bytes[24..30], &[0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF]);

    assert_eq!(&bytes[38..41], &[2, 1, 2]);
}

#[test]
fn test_pes_stitch_stream() {
    let bytes = PesExporter.encode(&two_color_line()).unwrap();
    let stitches = &bytes[41..];

    assert_eq!(stitches.len(), 10 * 2 + 1);
    assert_eq!(&stitches[0..2], &[0, 0]);
    for pair in stitches[2..20].chunks(2) {
        assert_eq!(pair, &[5, 0]);
    }
    assert_eq!(*stitches.last().unwrap(), 0xFF);
}

#[test]
fn test_pes_end_and_trim_emit_nothing() {
    let design = design_of(vec![
        StitchPoint::normal(1.0, 0.0, 0),
        StitchPoint::new(5.0, 5.0, StitchType::End, 0),
        StitchPoint::new(5.0, 5.0, StitchType::Trim, 0),
        StitchPoint::normal(2.0, 0.0, 0),
    ]);
    let bytes = PesExporter.encode(&design).unwrap();
    let stitches = &bytes[8 + 4 + 12 + 3 + 8 + 1 + 1..];
    assert_eq!(stitches, &[10, 0, 10, 0, 0xFF]);
}

#[test]
fn test_pes_jump_and_color_change() {
    let design = design_of(vec![
        StitchPoint::new(-1.0, 2.0, StitchType::Jump, 0),
        StitchPoint::new(9.0, 9.0, StitchType::ColorChange, 0),
        StitchPoint::normal(-1.0, 2.5, 0),
    ]);
    let bytes = PesExporter.encode(&design).unwrap();
    let stitches = &bytes[8 + 4 + 12 + 3 + 8 + 1 + 1..];
    assert_eq!(stitches, &[0xC0, 0xF6, 20, 0xFE, 0, 5, 0xFF]);
}

#[test]
fn test_pes_rejects_malformed_color() {
    let design = EmbroideryDesign::new(
        vec![StitchPoint::normal(0.0, 0.0, 0)],
        vec!["red".to_string()],
        (1.0, 1.0),
        HoopSize::Hoop100x100,
    )
    .unwrap();
    let err = PesExporter.encode(&design).unwrap_err();
    assert!(matches!(err, FormatError::Design(_)));
}

#[test]
fn test_pes_rejects_oversized_palette() {
    let colors: Vec<String> = (0..256).map(|i| format!("#{:06X}", i)).collect();
    let design = EmbroideryDesign::new(
        vec![StitchPoint::normal(0.0, 0.0, 0)],
        colors,
        (1.0, 1.0),
        HoopSize::Hoop100x100,
    )
    .unwrap();
    let err = PesExporter.encode(&design).unwrap_err();
    assert!(matches!(
        err,
        FormatError::TooManyColors {
            count: 256,
            max: 255,
            ..
        }
    ));
}
