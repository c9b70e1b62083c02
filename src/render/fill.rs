//! Filled discs and rectangles built from vertical spans.

use super::circle::{check_reach, MidpointSteps};
use super::line::span_points;
use super::Drawable;
use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};

/// Rasterize a filled disc.
///
/// Walks the same [`MidpointSteps`] as the outline, but each step fills the
/// two columns `center.col ± x` from `center.row - y` through
/// `center.row + y`. The upper bound passed to [`span_points`] is one past
/// `center.row + y`, so the outline pixels on both ends are part of the
/// span and the disc covers its outline.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] for a negative radius, one above
/// [`MAX_RADIUS`], or a disc reaching past the coordinate range.
///
/// [`MAX_RADIUS`]: super::MAX_RADIUS
pub fn disc_points(center: Point, radius: i32) -> Result<Vec<Point>> {
    let (row, col) = (i64::from(center.row), i64::from(center.col));
    let mut points = Vec::new();
    for step in MidpointSteps::new(radius)? {
        let (y, x) = (i64::from(step.row), i64::from(step.col));
        let top_left = Point::try_from_wide(row - y, col - x)?;
        // +1 keeps the bottom outline pixel in the span; without it the disc
        // is no longer a superset of the circle outline.
        let bottom_right = Point::try_from_wide(row + y + 1, col + x)?;
        points.extend(span_points(bottom_right.col, bottom_right.row, top_left.row));
        points.extend(span_points(top_left.col, bottom_right.row, top_left.row));
    }
    Ok(points)
}

/// Draw a filled disc.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] for an invalid radius and
/// [`Error::OutOfBounds`] if the disc leaves the canvas. Nothing is drawn on
/// error.
pub fn draw_disc(canvas: &mut Canvas, center: Point, radius: i32, color: Rgb) -> Result<()> {
    check_reach(canvas, center, radius)?;
    canvas.set_pixels(&disc_points(center, radius)?, color)
}

fn check_corners(corner1: Point, corner2: Point) -> Result<()> {
    if corner2.row < corner1.row || corner2.col < corner1.col {
        return Err(Error::InvalidGeometry(format!(
            "rectangle corner {corner2:?} precedes {corner1:?}"
        )));
    }
    Ok(())
}

/// Rasterize the rectangle `[corner1.row, corner2.row) x [corner1.col, corner2.col)`.
///
/// One span per column; each pixel appears exactly once. Equal corners on
/// either axis give an empty rectangle.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] if `corner2` lies above or left of
/// `corner1`.
pub fn square_points(corner1: Point, corner2: Point) -> Result<Vec<Point>> {
    check_corners(corner1, corner2)?;
    Ok((corner1.col..corner2.col)
        .flat_map(|col| span_points(col, corner2.row, corner1.row))
        .collect())
}

/// Draw a filled rectangle from `corner1` (inclusive) to `corner2` (exclusive).
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] for inverted corners and
/// [`Error::OutOfBounds`] if the rectangle leaves the canvas. Nothing is
/// drawn on error.
pub fn draw_square(canvas: &mut Canvas, corner1: Point, corner2: Point, color: Rgb) -> Result<()> {
    check_corners(corner1, corner2)?;
    if corner1.row < corner2.row && corner1.col < corner2.col {
        canvas.check_extent(
            (i64::from(corner1.row), i64::from(corner1.col)),
            (i64::from(corner2.row) - 1, i64::from(corner2.col) - 1),
        )?;
    }
    canvas.set_pixels(&square_points(corner1, corner2)?, color)
}

/// A filled disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disc {
    /// Center pixel.
    pub center: Point,
    /// Radius in pixels.
    pub radius: i32,
}

impl Disc {
    /// Create a new disc.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }
}

impl Drawable for Disc {
    fn rasterize(&self) -> Result<Vec<Point>> {
        disc_points(self.center, self.radius)
    }

    fn draw(&self, canvas: &mut Canvas, color: Rgb) -> Result<()> {
        draw_disc(canvas, self.center, self.radius, color)
    }
}

impl Drawable for Rect {
    fn rasterize(&self) -> Result<Vec<Point>> {
        square_points(self.top_left, self.bottom_right)
    }

    fn draw(&self, canvas: &mut Canvas, color: Rgb) -> Result<()> {
        draw_square(canvas, self.top_left, self.bottom_right, color)
    }
}
