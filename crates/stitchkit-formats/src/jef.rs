//! Janome JEF encoder.
//!
//! Fixed 116-byte header area, a u32 color table, then the stitch
//! records. All integers are little endian.

use crate::error::{FormatError, FormatResult};
use crate::exporter::EmbroideryExporter;
use crate::format::FileFormat;
use crate::stream::{carries_coordinates, delta_stream, StitchDelta};
use stitchkit_core::{to_machine_units, EmbroideryDesign, StitchType};

/// Size of the fixed header area preceding the color table
pub const JEF_HEADER_LEN: usize = 116;
/// Base of the stitch data offset; each color adds four bytes
pub const JEF_DATA_OFFSET_BASE: usize = 128;
pub const JEF_MAX_DELTA: i32 = 127;

const JUMP: u8 = 0x80;
const COLOR_CHANGE: u8 = 0x7C;
const END_OF_STITCHES: u8 = 0x7F;

#[derive(Debug, Clone, Copy, Default)]
pub struct JefExporter;

impl JefExporter {
    fn write_header(&self, out: &mut Vec<u8>, design: &EmbroideryDesign) -> FormatResult<()> {
        let color_count = design.color_count();
        let data_offset = JEF_DATA_OFFSET_BASE + 4 * color_count;

        let count_field = |value: usize| {
            u32::try_from(value).map_err(|_| FormatError::TooManyColors {
                format: FileFormat::Jef,
                count: value,
                max: u32::MAX as usize,
            })
        };
        out.extend_from_slice(&count_field(color_count)?.to_le_bytes());
        out.extend_from_slice(&stitch_count_field(design.stitch_count())?.to_le_bytes());
        out.extend_from_slice(&count_field(data_offset)?.to_le_bytes());

        let (width_mm, height_mm) = design.size_mm();
        let width = to_machine_units(width_mm);
        let height = to_machine_units(height_mm);
        for value in [width, height, width, height] {
            out.extend_from_slice(&value.to_le_bytes());
        }

        let padding = JEF_HEADER_LEN
            .checked_sub(out.len())
            .ok_or(FormatError::HeaderOverflow {
                format: FileFormat::Jef,
                len: out.len(),
                limit: JEF_HEADER_LEN,
            })?;
        out.resize(out.len() + padding, 0);
        Ok(())
    }

    fn write_color_table(&self, out: &mut Vec<u8>, color_count: usize) {
        for index in 0..color_count {
            out.extend_from_slice(&(index as u32 + 1).to_le_bytes());
        }
    }
}

impl EmbroideryExporter for JefExporter {
    fn format(&self) -> FileFormat {
        FileFormat::Jef
    }

    fn encode(&self, design: &EmbroideryDesign) -> FormatResult<Vec<u8>> {
        let mut out = Vec::with_capacity(
            JEF_HEADER_LEN + 4 * design.color_count() + 2 * design.stitch_count() + 1,
        );
        self.write_header(&mut out, design)?;
        self.write_color_table(&mut out, design.color_count());

        for delta in delta_stream(design.points(), JEF_MAX_DELTA, carries_coordinates) {
            write_stitch(&mut out, &delta);
        }
        out.push(END_OF_STITCHES);

        tracing::debug!(
            bytes = out.len(),
            stitches = design.stitch_count(),
            "encoded JEF"
        );
        Ok(out)
    }
}

fn stitch_count_field(count: usize) -> FormatResult<u32> {
    u32::try_from(count).map_err(|_| FormatError::TooManyStitches {
        format: FileFormat::Jef,
        count,
        max: u32::MAX as usize,
    })
}

fn write_stitch(out: &mut Vec<u8>, delta: &StitchDelta) {
    let dx = delta.dx as i8 as u8;
    let dy = delta.dy as i8 as u8;
    match delta.stitch_type {
        StitchType::Normal => out.extend_from_slice(&[dx, dy]),
        StitchType::Jump => out.extend_from_slice(&[JUMP, dx, dy]),
        StitchType::ColorChange => out.push(COLOR_CHANGE),
        StitchType::Trim | StitchType::End => {}
    }
}
