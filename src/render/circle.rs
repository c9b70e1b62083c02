//! Midpoint circle rasterization.
//!
//! [`MidpointSteps`] owns the decision-variable state machine and nothing
//! else. Outlines ([`circle_points`]) and filled discs
//! ([`super::fill::disc_points`]) both consume the same step sequence; they
//! only differ in what they emit for each step.

use super::Drawable;
use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Largest radius [`MidpointSteps`] accepts.
///
/// Keeps every step offset, including the column overshoot of up to one
/// past the radius, inside the `i32` range.
pub const MAX_RADIUS: i32 = 1 << 30;

/// Lazy sequence of `(row, col)` offsets from the midpoint decision algorithm.
///
/// The sequence starts at `(radius, 0)` and ends once the row offset would
/// go negative. Offsets cover one quadrant; callers mirror them. The
/// iterator is `Clone`, and [`MidpointSteps::new`] with the same radius
/// restarts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidpointSteps {
    /// Column offset.
    x: i64,
    /// Row offset.
    y: i64,
    delta: i64,
}

impl MidpointSteps {
    /// Start the step sequence for `radius`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] for a negative radius or one above
    /// [`MAX_RADIUS`].
    pub fn new(radius: i32) -> Result<Self> {
        check_radius(radius)?;
        let radius = i64::from(radius);
        Ok(Self {
            x: 0,
            y: radius,
            delta: 1 - 2 * radius,
        })
    }
}

impl Iterator for MidpointSteps {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.y < 0 {
            return None;
        }
        // Both offsets are bounded by MAX_RADIUS + 1.
        let step = Point::new(self.y as i32, self.x as i32);

        if self.delta < 0 && 2 * (self.delta + self.y) - 1 <= 0 {
            // Horizontal move.
            self.x += 1;
            self.delta += 2 * self.x + 1;
        } else if self.delta > 0 && 2 * (self.delta - self.x) - 1 > 0 {
            // Vertical move.
            self.y -= 1;
            self.delta += 1 - 2 * self.y;
        } else {
            // Diagonal move.
            self.x += 1;
            self.y -= 1;
            self.delta += 2 * (self.x - self.y);
        }

        Some(step)
    }
}

fn check_radius(radius: i32) -> Result<()> {
    if radius < 0 {
        return Err(Error::InvalidGeometry(format!(
            "radius must be non-negative, got {radius}"
        )));
    }
    if radius > MAX_RADIUS {
        return Err(Error::InvalidGeometry(format!(
            "radius {radius} exceeds the maximum of {MAX_RADIUS}"
        )));
    }
    Ok(())
}

/// Fail fast unless the circle of `radius` around `center` can fit.
///
/// Every outline and disc covers rows `center.row ± radius` in the center
/// column, so those pixels must be on the canvas before anything is
/// rasterized.
pub(super) fn check_reach(canvas: &Canvas, center: Point, radius: i32) -> Result<()> {
    check_radius(radius)?;
    let (row, col, radius) = (
        i64::from(center.row),
        i64::from(center.col),
        i64::from(radius),
    );
    canvas.check_extent((row - radius, col), (row + radius, col))
}

/// Rasterize the outline of a circle.
///
/// Every step contributes its four mirror images across the row and column
/// axes through `center` (four-point symmetry; the octant mirror is not
/// applied). Mirrors of a zero offset repeat, so the sequence may hold
/// duplicates.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] for a negative radius, one above
/// [`MAX_RADIUS`], or an outline reaching past the coordinate range.
pub fn circle_points(center: Point, radius: i32) -> Result<Vec<Point>> {
    let (row, col) = (i64::from(center.row), i64::from(center.col));
    let mut points = Vec::new();
    for step in MidpointSteps::new(radius)? {
        let (y, x) = (i64::from(step.row), i64::from(step.col));
        for (d_row, d_col) in [(y, x), (-y, x), (y, -x), (-y, -x)] {
            points.push(Point::try_from_wide(row + d_row, col + d_col)?);
        }
    }
    Ok(points)
}

/// Draw a circle outline.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] for an invalid radius and
/// [`Error::OutOfBounds`] if the outline leaves the canvas. Nothing is drawn
/// on error.
pub fn draw_circle(canvas: &mut Canvas, center: Point, radius: i32, color: Rgb) -> Result<()> {
    check_reach(canvas, center, radius)?;
    canvas.set_pixels(&circle_points(center, radius)?, color)
}

/// A circle outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    /// Center pixel.
    pub center: Point,
    /// Radius in pixels.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }
}

impl Drawable for Circle {
    fn rasterize(&self) -> Result<Vec<Point>> {
        circle_points(self.center, self.radius)
    }

    fn draw(&self, canvas: &mut Canvas, color: Rgb) -> Result<()> {
        draw_circle(canvas, self.center, self.radius, color)
    }
}
