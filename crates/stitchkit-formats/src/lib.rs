//! # StitchKit Formats
//!
//! Binary encoders for home and industrial embroidery machines.
//!
//! Each format implements [`EmbroideryExporter`]; [`FileFormat`] maps a
//! user-facing format choice or file extension to its encoder. All
//! encoders share the relative-move fold in [`stream`].
//!
//! | Format | Machines | Max move |
//! |--------|----------|----------|
//! | PES    | Brother  | ±127     |
//! | DST    | Tajima   | ±121     |
//! | JEF    | Janome   | ±127     |

pub mod dst;
pub mod error;
pub mod exporter;
pub mod format;
pub mod jef;
pub mod pes;
pub mod stream;

pub use dst::DstExporter;
pub use error::{FormatError, FormatResult};
pub use exporter::{export_to_format, export_to_path, write_atomically, EmbroideryExporter};
pub use format::FileFormat;
pub use jef::JefExporter;
pub use pes::PesExporter;
pub use stream::{delta_stream, StitchCursor, StitchDelta};
