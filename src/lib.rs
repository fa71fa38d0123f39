//! # StitchKit
//!
//! Converts vector shapes drawn in an editor into embroidery stitches and
//! writes them as machine files:
//! - Brother PES (with PEC section)
//! - Tajima DST
//! - Janome JEF
//!
//! ## Architecture
//!
//! StitchKit is organized as a workspace with multiple crates:
//!
//! 1. **stitchkit-core** - Stitch model, units, hoops, thread colors, design errors
//! 2. **stitchkit-designer** - Drawn shapes, tessellation, palette, design builder
//! 3. **stitchkit-formats** - PES/DST/JEF encoders and file writing
//! 4. **stitchkit-settings** - Export preferences and recent exports
//! 5. **stitchkit** - This facade, tying the pipeline together
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use stitchkit::{export_drawing_as, DrawnShape, FileFormat, HoopSize};
//!
//! let shapes = vec![
//!     DrawnShape::circle(10.0, 10.0, 60.0, 60.0, "#CC0000"),
//!     DrawnShape::rectangle(0.0, 80.0, 100.0, 120.0, "#0033AA"),
//! ];
//! let ok = export_drawing_as(
//!     &shapes,
//!     2.0,
//!     HoopSize::Hoop100x100,
//!     FileFormat::Pes,
//!     Path::new("flag.pes"),
//! );
//! assert!(ok);
//! ```

use std::path::{Path, PathBuf};

pub use stitchkit_core as model;
pub use stitchkit_designer as designer;
pub use stitchkit_formats as formats;
pub use stitchkit_settings as settings;

pub use stitchkit_core::{
    DesignError, DesignResult, EmbroideryDesign, HoopSize, StitchPoint, StitchType, ThreadColor,
    DEFAULT_DENSITY, DENSITY_PRESETS,
};
pub use stitchkit_designer::{parse_drawing, DesignBuilder, DrawnShape, ShapeKind};
pub use stitchkit_formats::{
    export_to_format, DstExporter, EmbroideryExporter, FileFormat, FormatError, FormatResult,
    JefExporter, PesExporter,
};
pub use stitchkit_settings::{ExportSettings, RecentExport, SettingsError, SettingsResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr
/// - RUST_LOG environment variable support, INFO by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(version = VERSION, build_date = BUILD_DATE, "logging initialized");
    Ok(())
}

/// Convert `shapes` and write them to `path`.
///
/// The format follows the extension of `path` when it names a supported
/// format, otherwise the settings' default format is used. Density and hoop
/// come from the settings, and a successful export is added to the settings'
/// recent exports. Returns `false` and logs the cause on failure.
pub fn export_drawing(
    shapes: &[DrawnShape],
    settings: &mut ExportSettings,
    path: &Path,
) -> bool {
    let format = FileFormat::from_path(path).unwrap_or(settings.export.default_format);
    let exported = export_drawing_as(
        shapes,
        settings.export.density,
        settings.export.hoop,
        format,
        path,
    );
    if exported {
        settings.add_recent_export(path.to_path_buf(), format);
    }
    exported
}

/// Convert `shapes` at `density` for `hoop` and write them to `path` as `format`.
///
/// Returns `false` and logs the cause on failure.
pub fn export_drawing_as(
    shapes: &[DrawnShape],
    density: f64,
    hoop: HoopSize,
    format: FileFormat,
    path: &Path,
) -> bool {
    let design = match DesignBuilder::new(density, hoop).build(shapes) {
        Ok(design) => design,
        Err(e) => {
            tracing::error!(%format, path = %path.display(), "conversion failed: {}", e);
            return false;
        }
    };

    if design.exceeds_hoop() {
        tracing::warn!(
            width_mm = design.size_mm().0,
            height_mm = design.size_mm().1,
            hoop = %hoop,
            "design is larger than the hoop"
        );
    }

    export_to_format(&design, path, format)
}

/// Proposed output path for a design named `stem`, in the settings'
/// output directory with the default format's extension
pub fn default_export_path(settings: &ExportSettings, stem: &str) -> PathBuf {
    settings.export_path(stem)
}
