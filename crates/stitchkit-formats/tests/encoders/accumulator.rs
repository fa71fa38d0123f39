use super::{design_of, reference_deltas};
use proptest::prelude::*;
use stitchkit_core::StitchPoint;
use stitchkit_formats::dst::{DST_END, DST_HEADER_LEN, DST_MAX_DELTA};
use stitchkit_formats::pes::PES_MAX_DELTA;
use stitchkit_formats::{delta_stream, DstExporter, EmbroideryExporter, JefExporter, PesExporter};

fn decode_pairs(stitches: &[u8]) -> Vec<(i32, i32)> {
    stitches
        .chunks(2)
        .map(|pair| (pair[0] as i8 as i32, pair[1] as i8 as i32))
        .collect()
}

/// Normal-stitch DST record for a move: coarse direction flags, then
/// magnitudes modulo 41
fn dst_record((dx, dy): (i32, i32)) -> [u8; 3] {
    let mut flags = 0u8;
    if dx > 40 {
        flags |= 0x04;
    }
    if dx < -40 {
        flags |= 0x08;
    }
    if dy > 40 {
        flags |= 0x20;
    }
    if dy < -40 {
        flags |= 0x10;
    }
    [flags, (dx.abs() % 41) as u8, (dy.abs() % 41) as u8]
}

fn targets_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 1..40)
}

fn normal_points(targets: &[(f64, f64)]) -> Vec<StitchPoint> {
    targets
        .iter()
        .map(|&(x, y)| StitchPoint::normal(x, y, 0))
        .collect()
}

proptest! {
    #[test]
    fn prop_pes_moves_are_cumulative_clamped_deltas(targets in targets_strategy()) {
        let bytes = PesExporter.encode(&design_of(normal_points(&targets))).unwrap();
        let stitches = &bytes[37..bytes.len() - 1];
        prop_assert_eq!(decode_pairs(stitches), reference_deltas(&targets, PES_MAX_DELTA));
    }

    #[test]
    fn prop_jef_moves_are_cumulative_clamped_deltas(targets in targets_strategy()) {
        let bytes = JefExporter.encode(&design_of(normal_points(&targets))).unwrap();
        let stitches = &bytes[120..bytes.len() - 1];
        prop_assert_eq!(decode_pairs(stitches), reference_deltas(&targets, 127));
    }

    #[test]
    fn prop_dst_moves_are_cumulative_clamped_deltas(targets in targets_strategy()) {
        let bytes = DstExporter.encode(&design_of(normal_points(&targets))).unwrap();
        prop_assert_eq!(&bytes[bytes.len() - 3..], &DST_END[..]);

        let records: Vec<[u8; 3]> = bytes[DST_HEADER_LEN..bytes.len() - 3]
            .chunks(3)
            .map(|r| [r[0], r[1], r[2]])
            .collect();
        let expected: Vec<[u8; 3]> = reference_deltas(&targets, DST_MAX_DELTA)
            .into_iter()
            .map(dst_record)
            .collect();
        prop_assert_eq!(records, expected);
    }

    #[test]
    fn prop_position_is_sum_of_moves(targets in targets_strategy()) {
        let points = normal_points(&targets);
        let mut sum = (0, 0);
        for delta in delta_stream(&points, PES_MAX_DELTA, |_| true) {
            prop_assert!(delta.dx.abs() <= PES_MAX_DELTA && delta.dy.abs() <= PES_MAX_DELTA);
            sum = (sum.0 + delta.dx, sum.1 + delta.dy);
            prop_assert_eq!(delta.position, sum);
        }
    }
}

#[test]
fn test_large_move_is_truncated_not_split() {
    let points = [StitchPoint::normal(100.0, 0.0, 0), StitchPoint::normal(100.0, 0.0, 0)];
    let deltas: Vec<_> = delta_stream(&points, PES_MAX_DELTA, |_| true).collect();
    assert_eq!(deltas.len(), 2);
    assert_eq!(deltas[0].dx, 127);
    assert_eq!(deltas[1].dx, 127);
    assert_eq!(deltas[1].position, (254, 0));
}
