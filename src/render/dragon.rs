//! Dragon curve generation by recursive segment folding.
//!
//! Each level replaces a segment `(a, b)` by the two segments `(b, m)` and
//! `(a, m)`, where `m` is the midpoint rotated a quarter turn about the
//! segment. Every level darkens the color by [`DragonConfig::darken_step`].
//! Subdivision runs on an explicit work stack, so memory grows with the
//! depth rather than the call stack, and the depth itself is capped by
//! [`DragonConfig::max_depth`].

use super::line::line_points;
use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::config::DragonConfig;
use crate::error::{Error, Result};
use crate::geometry::{Point, Segment};

/// Hard ceiling on the depth, independent of configuration (2^24 leaves).
pub const DEPTH_CEILING: u32 = 24;

/// The fold point of the segment `a -> b`.
///
/// Halves use floor division, so odd coordinates round towards negative
/// infinity.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] if the fold lands outside the
/// coordinate range.
pub fn fold_point(a: Point, b: Point) -> Result<Point> {
    let (a_row, a_col) = (i64::from(a.row), i64::from(a.col));
    let (b_row, b_col) = (i64::from(b.row), i64::from(b.col));
    Point::try_from_wide(
        (a_row + b_row).div_euclid(2) - (b_col - a_col).div_euclid(2),
        (a_col + b_col).div_euclid(2) + (b_row - a_row).div_euclid(2),
    )
}

/// A dragon curve between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragonCurve {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
    /// Number of folding levels; the curve has `2^depth` segments.
    pub depth: u32,
    config: DragonConfig,
}

impl DragonCurve {
    /// Create a curve with the default configuration.
    #[must_use]
    pub fn new(start: Point, end: Point, depth: u32) -> Self {
        Self {
            start,
            end,
            depth,
            config: DragonConfig::default(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: DragonConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &DragonConfig {
        &self.config
    }

    /// Every leaf segment with its color, in drawing order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthLimitExceeded`] if `depth` is above the
    /// configured maximum (or [`DEPTH_CEILING`]), [`Error::InvalidColor`]
    /// if the color policy is strict and a channel would underflow, and
    /// [`Error::InvalidGeometry`] if a fold leaves the coordinate range.
    pub fn segments(&self, color: Rgb) -> Result<Vec<(Segment, Rgb)>> {
        let max_depth = self.config.max_depth.min(DEPTH_CEILING);
        if self.depth > max_depth {
            log::warn!("rejected dragon curve of depth {}", self.depth);
            return Err(Error::DepthLimitExceeded {
                depth: self.depth,
                max_depth,
            });
        }

        let mut leaves = Vec::with_capacity(1usize << self.depth);
        let mut stack = vec![(Segment::new(self.start, self.end), self.depth, color)];

        while let Some((segment, depth, color)) = stack.pop() {
            if depth == 0 {
                leaves.push((segment, color));
                continue;
            }
            let mid = fold_point(segment.start, segment.end)?;
            let child = self
                .config
                .color_policy
                .darken(color, self.config.darken_step)?;
            // Pushed in reverse so (end, mid) is expanded first.
            stack.push((Segment::new(segment.start, mid), depth - 1, child));
            stack.push((Segment::new(segment.end, mid), depth - 1, child));
        }

        log::debug!(
            "dragon curve depth {} produced {} segments",
            self.depth,
            leaves.len()
        );
        Ok(leaves)
    }

    /// Rasterize the whole curve into colored pixels.
    ///
    /// Later segments overwrite earlier ones where they cross.
    ///
    /// # Errors
    ///
    /// See [`DragonCurve::segments`].
    pub fn rasterize(&self, color: Rgb) -> Result<Vec<(Point, Rgb)>> {
        Ok(colored_pixels(self.segments(color)?))
    }

    /// Draw the curve.
    ///
    /// The leaf endpoints are checked against the canvas before any segment
    /// is rasterized.
    ///
    /// # Errors
    ///
    /// Errors from [`DragonCurve::segments`], or [`Error::OutOfBounds`] if
    /// any part of the curve leaves the canvas. Nothing is drawn on error.
    pub fn draw(&self, canvas: &mut Canvas, color: Rgb) -> Result<()> {
        let leaves = self.segments(color)?;
        canvas.check_points_extent(
            leaves
                .iter()
                .flat_map(|(segment, _)| [segment.start, segment.end]),
        )?;
        canvas.set_colored_pixels(&colored_pixels(leaves))
    }
}

fn colored_pixels(leaves: Vec<(Segment, Rgb)>) -> Vec<(Point, Rgb)> {
    leaves
        .into_iter()
        .flat_map(|(segment, color)| {
            line_points(segment.start, segment.end)
                .into_iter()
                .map(move |p| (p, color))
        })
        .collect()
}

/// Draw a dragon curve from `start` to `end` with the default configuration.
///
/// # Errors
///
/// See [`DragonCurve::draw`].
pub fn generate(
    canvas: &mut Canvas,
    start: Point,
    end: Point,
    depth: u32,
    color: Rgb,
) -> Result<()> {
    DragonCurve::new(start, end, depth).draw(canvas, color)
}
