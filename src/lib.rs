//! # Trueno-Raster
//!
//! Integer raster canvas with pixel-exact drawing primitives.
//!
//! A [`Canvas`](canvas::Canvas) is a fixed-size RGB buffer addressed by
//! `(row, col)`. The rasterizers in [`render`] turn lines, circles, discs,
//! rectangles and dragon curves into point lists using integer arithmetic
//! only, and write them through the canvas's validated pixel API.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut canvas = Canvas::new(64, 64)?;
//! draw_line(&mut canvas, Point::new(0, 0), Point::new(63, 63), Rgb::WHITE)?;
//! draw_disc(&mut canvas, Point::new(32, 32), 10, Rgb::RED)?;
//! generate(&mut canvas, Point::new(32, 16), Point::new(32, 48), 6, Rgb::WHITE)?;
//!
//! let png = PngEncoder::to_bytes(&canvas)?;
//! assert!(!png.is_empty());
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Guarantees
//!
//! - Pixel access outside the canvas is an [`Error::OutOfBounds`], never clipped.
//! - Multi-pixel operations validate every target first; a failing draw
//!   leaves the canvas untouched.
//! - Shapes are checked against the canvas before they are rasterized, and
//!   coordinate arithmetic never overflows; extreme input is an error.
//! - Derived colors follow an explicit [`ColorPolicy`](color::ColorPolicy).
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade; install any logger to see them.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and channel derivation policy.
pub mod color;

/// Fixed-size pixel buffer.
pub mod canvas;

/// Integer points, segments and rectangles.
pub mod geometry;

/// Drawing configuration.
pub mod config;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization algorithms.
pub mod render;

/// Output encoders.
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, SharedCanvas};
    pub use crate::color::{ColorPolicy, Rgb};
    pub use crate::config::{Config, DragonConfig};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Point, Rect, Segment};
    pub use crate::output::PngEncoder;
    pub use crate::render::{
        draw_circle, draw_disc, draw_line, draw_square, fill_span, generate, Circle, Disc,
        Drawable, DragonCurve,
    };
}
