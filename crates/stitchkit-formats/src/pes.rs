//! Brother PES encoder.
//!
//! Layout: `#PES0001`, a u32 pointer to the PEC section, design size and
//! RGB palette, then the PEC section with its color table and the stitch
//! records. All integers are little endian.

use crate::error::{FormatError, FormatResult};
use crate::exporter::EmbroideryExporter;
use crate::format::FileFormat;
use crate::stream::{carries_coordinates, delta_stream, StitchDelta};
use std::io::{Cursor, Seek, SeekFrom, Write};
use stitchkit_core::{to_machine_units, EmbroideryDesign, StitchType, ThreadColor};

pub const PES_MAGIC: &[u8; 8] = b"#PES0001";
pub const PEC_MAGIC: &[u8; 8] = b"#PEC0001";

/// Largest move a single stitch record can hold
pub const PES_MAX_DELTA: i32 = 127;
/// PEC stores the color count in one byte
pub const PES_MAX_COLORS: usize = 255;

/// Offset of the PEC pointer placeholder
const PEC_POINTER_OFFSET: u64 = 8;

const JUMP: u8 = 0xC0;
const COLOR_CHANGE: u8 = 0xFE;
const END_OF_STITCHES: u8 = 0xFF;

#[derive(Debug, Clone, Copy, Default)]
pub struct PesExporter;

impl PesExporter {
    fn write_header(
        &self,
        out: &mut Cursor<Vec<u8>>,
        design: &EmbroideryDesign,
        palette: &[ThreadColor],
    ) -> FormatResult<()> {
        let (width_mm, height_mm) = design.size_mm();
        let width = header_dimension("width", width_mm)?;
        let height = header_dimension("height", height_mm)?;

        out.write_all(PES_MAGIC)?;
        out.write_all(&0u32.to_le_bytes())?;
        out.write_all(&width.to_le_bytes())?;
        out.write_all(&height.to_le_bytes())?;
        out.write_all(&(palette.len() as u32).to_le_bytes())?;
        for color in palette {
            out.write_all(&color.to_rgb())?;
        }
        Ok(())
    }

    /// Point the header at the section about to be written.
    fn patch_pec_pointer(&self, out: &mut Cursor<Vec<u8>>) -> FormatResult<()> {
        let pec_offset = out.position() as u32;
        out.seek(SeekFrom::Start(PEC_POINTER_OFFSET))?;
        out.write_all(&pec_offset.to_le_bytes())?;
        out.seek(SeekFrom::End(0))?;
        Ok(())
    }

    fn write_pec(&self, out: &mut Cursor<Vec<u8>>, color_count: usize) -> FormatResult<()> {
        out.write_all(PEC_MAGIC)?;
        out.write_all(&[color_count as u8])?;
        for index in 0..color_count {
            out.write_all(&[(index + 1) as u8])?;
        }
        Ok(())
    }

    fn write_stitches(
        &self,
        out: &mut Cursor<Vec<u8>>,
        design: &EmbroideryDesign,
    ) -> FormatResult<()> {
        for delta in delta_stream(design.points(), PES_MAX_DELTA, carries_coordinates) {
            out.write_all(&stitch_record(&delta))?;
        }
        out.write_all(&[END_OF_STITCHES])?;
        Ok(())
    }
}

impl EmbroideryExporter for PesExporter {
    fn format(&self) -> FileFormat {
        FileFormat::Pes
    }

    fn encode(&self, design: &EmbroideryDesign) -> FormatResult<Vec<u8>> {
        let color_count = design.color_count();
        if color_count > PES_MAX_COLORS {
            return Err(FormatError::TooManyColors {
                format: FileFormat::Pes,
                count: color_count,
                max: PES_MAX_COLORS,
            });
        }
        let palette = design
            .thread_colors()
            .iter()
            .map(|hex| ThreadColor::from_hex(hex))
            .collect::<Result<Vec<_>, _>>()?;

        let mut out = Cursor::new(Vec::with_capacity(64 + design.stitch_count() * 2));
        self.write_header(&mut out, design, &palette)?;
        self.patch_pec_pointer(&mut out)?;
        self.write_pec(&mut out, color_count)?;
        self.write_stitches(&mut out, design)?;

        tracing::debug!(
            bytes = out.get_ref().len(),
            stitches = design.stitch_count(),
            "encoded PES"
        );
        Ok(out.into_inner())
    }
}

fn header_dimension(axis: &'static str, value_mm: f64) -> FormatResult<u32> {
    u32::try_from(to_machine_units(value_mm)).map_err(|_| FormatError::DimensionOutOfRange {
        format: FileFormat::Pes,
        axis,
        value_mm,
    })
}

fn stitch_record(delta: &StitchDelta) -> Vec<u8> {
    match delta.stitch_type {
        StitchType::Normal => vec![delta.dx as u8, delta.dy as u8],
        StitchType::Jump => vec![JUMP, delta.dx as u8, delta.dy as u8],
        StitchType::ColorChange => vec![COLOR_CHANGE],
        StitchType::Trim | StitchType::End => Vec::new(),
    }
}
