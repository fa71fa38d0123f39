//! Supported machine formats and their file naming.

use crate::dst::DstExporter;
use crate::error::FormatError;
use crate::exporter::EmbroideryExporter;
use crate::jef::JefExporter;
use crate::pes::PesExporter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Embroidery file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Brother PES (with embedded PEC section)
    Pes,
    /// Tajima DST
    Dst,
    /// Janome JEF
    Jef,
}

impl FileFormat {
    /// All formats in the order the export dialog lists them
    pub fn all() -> [FileFormat; 3] {
        [Self::Pes, Self::Dst, Self::Jef]
    }

    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pes => "pes",
            Self::Dst => "dst",
            Self::Jef => "jef",
        }
    }

    /// Machine manufacturer the format belongs to
    pub fn machine_brand(&self) -> &'static str {
        match self {
            Self::Pes => "Brother",
            Self::Dst => "Tajima",
            Self::Jef => "Janome",
        }
    }

    /// Label for a format picker, e.g. `Brother (*.pes)`
    pub fn dialog_label(&self) -> String {
        format!("{} (*.{})", self.machine_brand(), self.extension())
    }

    /// Guess the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    /// The encoder for this format
    pub fn exporter(&self) -> Box<dyn EmbroideryExporter> {
        match self {
            Self::Pes => Box::new(PesExporter),
            Self::Dst => Box::new(DstExporter),
            Self::Jef => Box::new(JefExporter),
        }
    }
}

impl Default for FileFormat {
    fn default() -> Self {
        Self::Pes
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pes => write!(f, "PES"),
            Self::Dst => write!(f, "DST"),
            Self::Jef => write!(f, "JEF"),
        }
    }
}

impl FromStr for FileFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix('.').unwrap_or(name);
        match name.to_lowercase().as_str() {
            "pes" => Ok(Self::Pes),
            "dst" => Ok(Self::Dst),
            "jef" => Ok(Self::Jef),
            _ => Err(FormatError::UnsupportedFormat(s.to_string())),
        }
    }
}
