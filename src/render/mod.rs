//! Rasterization of geometric primitives.
//!
//! Every draw first checks the shape's extent against the canvas, so an
//! oversized shape fails before its point list is built. The point list is
//! then written with one validated canvas call, so a shape that does not fit
//! is rejected as a whole rather than half-drawn.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer line drawing with a row-major tie-break
//! - **Midpoint Circle**: four-point symmetric outline from a shared step sequence
//! - **Span Fill**: discs and rectangles as vertical runs of pixels
//! - **Dragon Curve**: iterative segment folding
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Heighway, J., Banks, B., & Harter, W. (1966). Paper-folding dragon curve.

mod circle;
mod dragon;
mod fill;
mod line;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::Point;

pub use circle::{circle_points, draw_circle, Circle, MidpointSteps, MAX_RADIUS};
pub use dragon::{fold_point, generate, DragonCurve, DEPTH_CEILING};
pub use fill::{disc_points, draw_disc, draw_square, square_points, Disc};
pub use line::{draw_line, fill_span, line_points, span_points};

/// Trait for single-color drawable primitives.
pub trait Drawable {
    /// Pixels covered by this primitive, possibly with repeats.
    fn rasterize(&self) -> Result<Vec<Point>>;

    /// Draw this primitive to a canvas.
    ///
    /// Nothing is written unless every pixel lies on the canvas. The
    /// built-in primitives override this to reject oversized shapes before
    /// rasterizing them.
    fn draw(&self, canvas: &mut Canvas, color: Rgb) -> Result<()> {
        canvas.set_pixels(&self.rasterize()?, color)
    }
}
