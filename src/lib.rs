//! shapegen: rasterize simple filled shapes into RGBA canvases and PNG files.
//!
//! ```no_run
//! use shapegen::{RgbaColor, ShapeKind, ShapeOptions, rasterize};
//!
//! let canvas = rasterize(
//!     ShapeKind::Star,
//!     64,
//!     64,
//!     RgbaColor::opaque(255, 200, 0),
//!     &ShapeOptions::default(),
//! )?;
//! shapegen::io::write_png(&canvas, std::path::Path::new("star.png"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod logger;

pub mod canvas;
pub mod cli;
pub mod color;
pub mod fuzzy;
pub mod io;
pub mod ops;
pub mod validation;

pub use canvas::Canvas;
pub use color::{ColorError, RgbaColor, normalize_color};
pub use io::OutputError;
pub use ops::{
    ArrowDirection, Point, ShapeError, ShapeKind, ShapeOptions, rasterize, rasterize_generic,
};
pub use validation::{ShapeRegistry, ValidationError};
