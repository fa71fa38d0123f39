//! # StitchKit Designer
//!
//! Turns the shapes drawn on the editor canvas into an ordered stitch
//! sequence and its thread palette.
//!
//! ## Pipeline
//!
//! ```text
//! DrawnShape (kind, canvas coords, fill)
//!   ├── Geometry      (validated coordinates)
//!   ├── ThreadPalette (first-seen color indices)
//!   └── tessellate    (circle outline, rectangle fill, text anchor)
//!
//! DesignBuilder
//!   └── EmbroideryDesign (stitches, palette, size, hoop)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stitchkit_core::HoopSize;
//! use stitchkit_designer::{DesignBuilder, DrawnShape};
//!
//! let shapes = vec![DrawnShape::rectangle(0.0, 0.0, 20.0, 20.0, "#FF0000")];
//! let design = DesignBuilder::new(2.0, HoopSize::Hoop100x100)
//!     .build(&shapes)
//!     .unwrap();
//! assert_eq!(design.thread_colors(), ["#FF0000"]);
//! ```

pub mod builder;
pub mod palette;
pub mod shapes;
pub mod tessellate;

pub use builder::{drawing_bounds, drawing_size_mm, DesignBuilder, EMPTY_DRAWING_SIZE_MM};
pub use palette::{build_palette, ThreadPalette};
pub use shapes::{parse_drawing, Bounds, Corners, DrawnShape, Geometry, Point, ShapeKind};
pub use tessellate::{
    circle_outline, rectangle_fill, row_count, tessellate, tessellate_shape, text_anchor,
    MAX_STITCHES_PER_SHAPE,
};
