//! StitchKit Settings Crate
//!
//! Export preferences (format, density, hoop, output directory) and the
//! list of recent exports, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{default_config_path, ExportSection, ExportSettings, RecentExport};
pub use error::{SettingsError, SettingsResult};
