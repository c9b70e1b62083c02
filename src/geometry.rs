//! Integer geometric primitives.
//!
//! Every coordinate is named by axis: `row` is vertical (top to bottom) and
//! `col` is horizontal (left to right). Nothing in this crate uses `x`/`y`
//! for pixel addresses.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A pixel address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Point {
    /// Vertical coordinate.
    pub row: i32,
    /// Horizontal coordinate.
    pub col: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Narrow coordinates computed in `i64` back to a point.
    ///
    /// Rasterizers do their offset arithmetic wide and come back through
    /// here, so a shape reaching past the `i32` range is an error instead of
    /// an overflow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] if either coordinate does not fit.
    pub fn try_from_wide(row: i64, col: i64) -> Result<Self> {
        match (i32::try_from(row), i32::try_from(col)) {
            (Ok(row), Ok(col)) => Ok(Self::new(row, col)),
            _ => Err(Error::InvalidGeometry(format!(
                "pixel ({row}, {col}) is outside the coordinate range"
            ))),
        }
    }

    /// Chebyshev distance, the number of king moves between two pixels.
    #[must_use]
    pub const fn chebyshev(self, other: Self) -> u32 {
        let d_row = self.row.abs_diff(other.row);
        let d_col = self.col.abs_diff(other.col);
        if d_row > d_col {
            d_row
        } else {
            d_col
        }
    }
}

impl From<(i32, i32)> for Point {
    /// Converts a `(row, col)` pair.
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from `(row, col)` coordinates.
    #[must_use]
    pub const fn from_coords(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self::new(Point::new(row0, col0), Point::new(row1, col1))
    }

    /// Number of pixels a rasterized segment covers.
    #[must_use]
    pub fn pixel_len(&self) -> usize {
        self.start.chebyshev(self.end) as usize + 1
    }
}

/// Axis-aligned rectangle spanning the half-open ranges
/// `[top_left.row, bottom_right.row) x [top_left.col, bottom_right.col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Inclusive corner.
    pub top_left: Point,
    /// Exclusive corner.
    pub bottom_right: Point,
}

impl Rect {
    /// Create a rectangle from two corner points.
    #[must_use]
    pub const fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Width in columns (negative for an inverted rectangle).
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.bottom_right.col - self.top_left.col
    }

    /// Height in rows (negative for an inverted rectangle).
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom_right.row - self.top_left.row
    }

    /// Check if a point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (self.top_left.row..self.bottom_right.row).contains(&point.row)
            && (self.top_left.col..self.bottom_right.col).contains(&point.col)
    }

    /// Get the area of the rectangle, zero when inverted.
    #[must_use]
    pub fn area(&self) -> usize {
        (self.width().max(0) as usize) * (self.height().max(0) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_try_from_wide() {
        assert_eq!(Point::try_from_wide(2, -6).unwrap(), Point::new(2, -6));
        assert_eq!(
            Point::try_from_wide(i64::from(i32::MIN), i64::from(i32::MAX)).unwrap(),
            Point::new(i32::MIN, i32::MAX)
        );
        assert!(matches!(
            Point::try_from_wide(i64::from(i32::MAX) + 1, 0),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(Point::try_from_wide(0, i64::from(i32::MIN) - 1).is_err());
    }

    #[test]
    fn test_chebyshev_spans_full_range() {
        assert_eq!(Point::new(0, 0).chebyshev(Point::new(-3, 1)), 3);
        assert_eq!(Point::new(i32::MIN, 0).chebyshev(Point::new(i32::MAX, 0)), u32::MAX);
    }

    #[test]
    fn test_point_from_tuple_is_row_col() {
        let p: Point = (7, 2).into();
        assert_eq!(p.row, 7);
        assert_eq!(p.col, 2);
    }

    #[test]
    fn test_segment_pixel_len() {
        assert_eq!(Segment::from_coords(0, 0, 2, 5).pixel_len(), 6);
        assert_eq!(Segment::from_coords(4, 4, 4, 4).pixel_len(), 1);
        assert_eq!(Segment::from_coords(0, 0, -3, 1).pixel_len(), 4);
        assert_eq!(
            Segment::from_coords(0, i32::MIN, 0, i32::MAX).pixel_len(),
            u32::MAX as usize + 1
        );
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::from_corners(Point::new(0, 0), Point::new(10, 5));
        assert!(rect.contains(Point::new(9, 4)));
        assert!(!rect.contains(Point::new(10, 4)));
        assert!(!rect.contains(Point::new(9, 5)));
    }

    #[test]
    fn test_rect_area() {
        let rect = Rect::from_corners(Point::new(2, 1), Point::new(7, 4));
        assert_eq!(rect.area(), 15);
        let inverted = Rect::from_corners(Point::new(7, 4), Point::new(2, 1));
        assert_eq!(inverted.area(), 0);
    }
}
