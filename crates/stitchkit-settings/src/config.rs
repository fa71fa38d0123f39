//! Export settings.
//!
//! Settings are organized into an `export` section holding the defaults the
//! export dialog starts from, plus a bounded list of recent exports. Files
//! are JSON or TOML, chosen by extension.

use crate::error::{SettingsError, SettingsResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stitchkit_core::{validate_density, HoopSize, DEFAULT_DENSITY};
use stitchkit_formats::FileFormat;

/// Directory under the platform config dir holding StitchKit settings
const CONFIG_DIR_NAME: &str = "stitchkit";
const CONFIG_FILE_NAME: &str = "settings.toml";

/// Defaults for the export dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSection {
    /// Format preselected in the dialog
    #[serde(default)]
    pub default_format: FileFormat,
    /// Stitch density in stitches per canvas pixel
    pub density: f64,
    /// Directory new exports are proposed in
    pub output_directory: PathBuf,
    /// Number of recent exports to remember
    pub recent_exports_count: usize,
    /// Target hoop
    #[serde(default)]
    pub hoop: HoopSize,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            default_format: FileFormat::default(),
            density: DEFAULT_DENSITY,
            output_directory: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            recent_exports_count: 10,
            hoop: HoopSize::default(),
        }
    }
}

/// One previously written file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentExport {
    pub path: PathBuf,
    pub format: FileFormat,
    pub exported_at: DateTime<Utc>,
}

/// Complete export configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExportSettings {
    pub export: ExportSection,
    /// Most recent first
    #[serde(default)]
    pub recent_exports: Vec<RecentExport>,
}

#[derive(Debug, Clone, Copy)]
enum FileKind {
    Json,
    Toml,
}

impl FileKind {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}

impl ExportSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let kind = FileKind::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let settings: Self = match kind {
            FileKind::Json => serde_json::from_str(&content)?,
            FileKind::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        tracing::debug!(path = %path.display(), "loaded export settings");
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save settings to file (JSON or TOML), creating the parent directory
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileKind::from_path(path)? {
            FileKind::Json => serde_json::to_string_pretty(self)?,
            FileKind::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "saved export settings");
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        validate_density(self.export.density)
            .map_err(|e| SettingsError::invalid("export.density", e.to_string()))?;

        let (width, height) = self.export.hoop.as_mm();
        if !(width > 0.0 && height > 0.0) {
            return Err(SettingsError::invalid(
                "export.hoop",
                format!("hoop dimensions must be > 0, got {}", self.export.hoop),
            ));
        }

        if self.export.recent_exports_count == 0 {
            return Err(SettingsError::invalid(
                "export.recent_exports_count",
                "must be > 0",
            ));
        }

        Ok(())
    }

    /// Record an export made now
    pub fn add_recent_export(&mut self, path: PathBuf, format: FileFormat) {
        self.record_export(RecentExport {
            path,
            format,
            exported_at: Utc::now(),
        });
    }

    /// Put `entry` at the front of the recent list, dropping older duplicates
    pub fn record_export(&mut self, entry: RecentExport) {
        self.recent_exports.retain(|e| e.path != entry.path);
        self.recent_exports.insert(0, entry);
        self.recent_exports
            .truncate(self.export.recent_exports_count);
    }

    /// Proposed output path for a design named `stem` in the default format
    pub fn export_path(&self, stem: &str) -> PathBuf {
        self.export
            .output_directory
            .join(stem)
            .with_extension(self.export.default_format.extension())
    }
}

/// Platform location of the settings file, e.g. `~/.config/stitchkit/settings.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })
}
