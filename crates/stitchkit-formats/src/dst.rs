//! Tajima DST encoder.
//!
//! A 512-byte text header followed by one 3-byte record per point and a
//! 3-byte end marker.

use crate::error::FormatResult;
use crate::exporter::EmbroideryExporter;
use crate::format::FileFormat;
use crate::stream::{delta_stream, StitchDelta};
use stitchkit_core::{EmbroideryDesign, StitchType};

pub const DST_HEADER_LEN: usize = 512;
pub const DST_MAX_DELTA: i32 = 121;
pub const DST_END: [u8; 3] = [0x03, 0x00, 0x00];

const LABEL_OFFSET: usize = 0;
const STITCH_COUNT_OFFSET: usize = 14;
const EXTENT_OFFSETS: [usize; 4] = [42, 48, 54, 60];

const LABEL: &[u8] = b"LA:Desktop   ";
const EMPTY_EXTENT: &[u8] = b"+   0";

/// Moves beyond this many units set the coarse direction flag
const COARSE_STEP: i32 = 40;
const FINE_MODULUS: i32 = 41;

const DX_POSITIVE: u8 = 0x04;
const DX_NEGATIVE: u8 = 0x08;
const DY_NEGATIVE: u8 = 0x10;
const DY_POSITIVE: u8 = 0x20;
const JUMP_FLAGS: u8 = 0x83;
const COLOR_CHANGE_FLAGS: u8 = 0xC3;

#[derive(Debug, Clone, Copy, Default)]
pub struct DstExporter;

impl DstExporter {
    fn header(&self, stitch_count: usize) -> [u8; DST_HEADER_LEN] {
        let mut header = [0u8; DST_HEADER_LEN];
        put(&mut header, LABEL_OFFSET, LABEL);
        put(
            &mut header,
            STITCH_COUNT_OFFSET,
            format!("ST:{:>6}", stitch_count).as_bytes(),
        );
        for offset in EXTENT_OFFSETS {
            put(&mut header, offset, EMPTY_EXTENT);
        }
        header
    }
}

impl EmbroideryExporter for DstExporter {
    fn format(&self) -> FileFormat {
        FileFormat::Dst
    }

    fn encode(&self, design: &EmbroideryDesign) -> FormatResult<Vec<u8>> {
        let points = design.points();
        let mut out = Vec::with_capacity(DST_HEADER_LEN + (points.len() + 1) * 3);
        out.extend_from_slice(&self.header(points.len()));

        // Every DST record carries a move, so the needle always advances.
        for delta in delta_stream(points, DST_MAX_DELTA, |_| true) {
            out.extend_from_slice(&stitch_record(&delta));
        }
        out.extend_from_slice(&DST_END);

        tracing::debug!(bytes = out.len(), stitches = points.len(), "encoded DST");
        Ok(out)
    }
}

/// Copy `field` into the header at `offset`, dropping anything past the end.
fn put(header: &mut [u8; DST_HEADER_LEN], offset: usize, field: &[u8]) {
    let end = (offset + field.len()).min(DST_HEADER_LEN);
    header[offset..end].copy_from_slice(&field[..end - offset]);
}

fn stitch_record(delta: &StitchDelta) -> [u8; 3] {
    let StitchDelta { dx, dy, .. } = *delta;

    let mut b1 = 0u8;
    if dx > COARSE_STEP {
        b1 |= DX_POSITIVE;
    }
    if dx < -COARSE_STEP {
        b1 |= DX_NEGATIVE;
    }
    if dy > COARSE_STEP {
        b1 |= DY_POSITIVE;
    }
    if dy < -COARSE_STEP {
        b1 |= DY_NEGATIVE;
    }
    match delta.stitch_type {
        StitchType::Jump => b1 |= JUMP_FLAGS,
        StitchType::ColorChange => b1 |= COLOR_CHANGE_FLAGS,
        StitchType::Normal | StitchType::Trim | StitchType::End => {}
    }

    let b2 = (dx.abs() % FINE_MODULUS) as u8;
    let b3 = (dy.abs() % FINE_MODULUS) as u8;
    [b1, b2, b3]
}
