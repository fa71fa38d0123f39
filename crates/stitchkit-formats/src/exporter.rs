//! Exporter trait and file writing.

use crate::error::{FormatError, FormatResult};
use crate::format::FileFormat;
use std::io::Write;
use std::path::Path;
use stitchkit_core::EmbroideryDesign;

/// Encodes an [`EmbroideryDesign`] into one machine format.
pub trait EmbroideryExporter {
    /// Format produced by this exporter
    fn format(&self) -> FileFormat;

    /// Encode the whole design into an in-memory file image.
    fn encode(&self, design: &EmbroideryDesign) -> FormatResult<Vec<u8>>;

    /// Encode `design` and write it to `path`.
    ///
    /// Nothing is written at `path` unless encoding and writing both succeed.
    fn export(&self, design: &EmbroideryDesign, path: &Path) -> FormatResult<()> {
        let bytes = self.encode(design)?;
        write_atomically(path, &bytes)?;
        tracing::info!(
            format = %self.format(),
            path = %path.display(),
            bytes = bytes.len(),
            stitches = design.stitch_count(),
            colors = design.color_count(),
            "exported embroidery file"
        );
        Ok(())
    }
}

/// Write `bytes` to a temp file next to `path`, then rename it over `path`.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> FormatResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::Builder::new()
        .prefix(".stitchkit-")
        .suffix(".part")
        .tempfile_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;

    file.persist(path).map_err(|e| FormatError::Persist {
        path: path.to_path_buf(),
        reason: e.error.to_string(),
    })?;
    Ok(())
}

/// Export `design` to `path` in `format`.
///
/// Returns `false` and logs the cause on any failure.
pub fn export_to_format(design: &EmbroideryDesign, path: &Path, format: FileFormat) -> bool {
    match format.exporter().export(design, path) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(%format, path = %path.display(), "export failed: {}", e);
            false
        }
    }
}

/// Export `design`, choosing the format from the extension of `path`.
pub fn export_to_path(design: &EmbroideryDesign, path: &Path) -> FormatResult<FileFormat> {
    let format = FileFormat::from_path(path).ok_or_else(|| {
        FormatError::UnsupportedFormat(
            path.extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default(),
        )
    })?;
    format.exporter().export(design, path)?;
    Ok(format)
}
