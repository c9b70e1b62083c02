//! Bresenham line rasterization and vertical span fills.

use super::Drawable;
use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::{Point, Segment};

/// Rasterize the segment from `start` to `end` with Bresenham's algorithm.
///
/// The longer axis is the major axis; on a tie the row axis wins, which
/// fixes the shape of 45-degree lines. The result holds exactly
/// `max(|d_row|, |d_col|) + 1` points, starts at `start`, ends at `end`,
/// and every consecutive pair is 8-connected.
///
/// # References
///
/// Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
#[must_use]
pub fn line_points(start: Point, end: Point) -> Vec<Point> {
    // Deltas between two i32 coordinates need 33 bits.
    let d_col = i64::from(end.col) - i64::from(start.col);
    let d_row = i64::from(end.row) - i64::from(start.row);
    let sign_col = d_col.signum();
    let sign_row = d_row.signum();
    let d_col = d_col.abs();
    let d_row = d_row.abs();

    // (axis-aligned step, error increment, major length)
    let (straight, es, el) = if d_col > d_row {
        ((0, sign_col), d_row, d_col)
    } else {
        ((sign_row, 0), d_col, d_row)
    };

    // The accumulator starts at half the major length; doubling every term
    // keeps that exact for odd lengths.
    let mut error = el;
    let (mut row, mut col) = (i64::from(start.row), i64::from(start.col));
    let mut points = Vec::with_capacity(Segment::new(start, end).pixel_len());
    points.push(start);

    for _ in 0..el {
        error -= 2 * es;
        if error < 0 {
            error += 2 * el;
            row += sign_row;
            col += sign_col;
        } else {
            row += straight.0;
            col += straight.1;
        }
        // Never leaves the box spanned by the endpoints, so it fits in i32.
        points.push(Point::new(row as i32, col as i32));
    }

    points
}

/// Draw a line from `start` to `end`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if any pixel of the line falls
/// outside the canvas; nothing is drawn in that case.
pub fn draw_line(canvas: &mut Canvas, start: Point, end: Point, color: Rgb) -> Result<()> {
    // A line stays inside the box of its endpoints.
    canvas.check_points_extent([start, end])?;
    canvas.set_pixels(&line_points(start, end), color)
}

/// Points of the vertical span at `col` covering rows `row_end..row_start`.
///
/// The range is half-open: `row_end` is included, `row_start` is not, and
/// the span is empty unless `row_end < row_start`. Adjacent spans that share
/// a boundary row therefore never paint it twice.
pub fn span_points(col: i32, row_start: i32, row_end: i32) -> impl Iterator<Item = Point> {
    (row_end..row_start).map(move |row| Point::new(row, col))
}

/// Fill the vertical span at `col` over rows `row_end..row_start`.
///
/// See [`span_points`] for the exact range.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the span leaves the canvas;
/// nothing is drawn in that case.
pub fn fill_span(
    canvas: &mut Canvas,
    col: i32,
    row_start: i32,
    row_end: i32,
    color: Rgb,
) -> Result<()> {
    if row_end < row_start {
        let col = i64::from(col);
        canvas.check_extent((i64::from(row_end), col), (i64::from(row_start) - 1, col))?;
    }
    let points: Vec<Point> = span_points(col, row_start, row_end).collect();
    canvas.set_pixels(&points, color)
}

impl Drawable for Segment {
    fn rasterize(&self) -> Result<Vec<Point>> {
        Ok(line_points(self.start, self.end))
    }

    fn draw(&self, canvas: &mut Canvas, color: Rgb) -> Result<()> {
        draw_line(canvas, self.start, self.end, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    #[test]
    fn test_diagonal_on_10x10() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        draw_line(&mut canvas, Point::new(0, 0), Point::new(9, 9), Rgb::WHITE).unwrap();

        assert_eq!(canvas.count_color(Rgb::WHITE), 10);
        for i in 0..10 {
            assert_eq!(canvas.get_pixel(Point::new(i, i)).unwrap(), Rgb::WHITE);
        }
    }

    #[test]
    fn test_shallow_line() {
        let points = line_points(Point::new(0, 0), Point::new(2, 5));
        assert_eq!(
            points,
            pts(&[(0, 0), (0, 1), (1, 2), (1, 3), (2, 4), (2, 5)])
        );
    }

    #[test]
    fn test_steep_line() {
        let points = line_points(Point::new(0, 0), Point::new(3, 1));
        assert_eq!(points, pts(&[(0, 0), (1, 0), (2, 1), (3, 1)]));
    }

    #[test]
    fn test_line_towards_upper_right() {
        let points = line_points(Point::new(4, 1), Point::new(1, 6));
        assert_eq!(
            points,
            pts(&[(4, 1), (3, 2), (3, 3), (2, 4), (2, 5), (1, 6)])
        );
    }

    #[test]
    fn test_horizontal_and_vertical() {
        assert_eq!(
            line_points(Point::new(0, 0), Point::new(0, 3)),
            pts(&[(0, 0), (0, 1), (0, 2), (0, 3)])
        );
        assert_eq!(
            line_points(Point::new(3, 2), Point::new(0, 2)),
            pts(&[(3, 2), (2, 2), (1, 2), (0, 2)])
        );
    }

    #[test]
    fn test_zero_length_line() {
        assert_eq!(line_points(Point::new(4, 4), Point::new(4, 4)), pts(&[(4, 4)]));
    }

    #[test]
    fn test_line_out_of_bounds_leaves_canvas_untouched() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        let result = draw_line(&mut canvas, Point::new(5, 5), Point::new(5, 12), Rgb::WHITE);
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
        assert_eq!(canvas.count_color(Rgb::WHITE), 0);
    }

    #[test]
    fn test_far_off_canvas_line_fails_before_rasterizing() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        let result = draw_line(
            &mut canvas,
            Point::new(0, 0),
            Point::new(0, 1_000_000_000),
            Rgb::WHITE,
        );
        assert!(matches!(
            result,
            Err(Error::OutOfBounds { row: 0, col: 1_000_000_000, .. })
        ));

        let result = Segment::from_coords(i32::MIN, i32::MIN, i32::MAX, i32::MAX)
            .draw(&mut canvas, Rgb::WHITE);
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
        assert_eq!(canvas.count_color(Rgb::WHITE), 0);
    }

    #[test]
    fn test_line_near_coordinate_limits() {
        let points = line_points(Point::new(i32::MAX - 2, 0), Point::new(i32::MAX, 1));
        assert_eq!(
            points,
            pts(&[(i32::MAX - 2, 0), (i32::MAX - 1, 0), (i32::MAX, 1)])
        );

        let points = line_points(Point::new(0, i32::MIN), Point::new(1, i32::MIN + 3));
        assert_eq!(points.len(), 4);
        assert_eq!(points.last(), Some(&Point::new(1, i32::MIN + 3)));
    }

    #[test]
    fn test_fill_span_far_off_canvas() {
        let mut canvas = Canvas::new(5, 5).unwrap();
        let result = fill_span(&mut canvas, 2, i32::MAX, i32::MIN, Rgb::WHITE);
        assert!(matches!(
            result,
            Err(Error::OutOfBounds { row: i32::MIN, col: 2, .. })
        ));
        assert_eq!(canvas.count_color(Rgb::WHITE), 0);
    }

    #[test]
    fn test_fill_span_excludes_row_start() {
        let mut canvas = Canvas::new(5, 10).unwrap();
        fill_span(&mut canvas, 2, 6, 3, Rgb::WHITE).unwrap();

        for row in 0..10 {
            let expected = if (3..6).contains(&row) { Rgb::WHITE } else { Rgb::BLACK };
            assert_eq!(canvas.get_pixel(Point::new(row, 2)).unwrap(), expected, "row {row}");
        }
        assert_eq!(canvas.count_color(Rgb::WHITE), 3);
    }

    #[test]
    fn test_fill_span_empty_when_not_ascending() {
        assert_eq!(span_points(0, 3, 3).count(), 0);
        assert_eq!(span_points(0, 2, 5).count(), 0);
    }

    #[test]
    fn test_drawable_segment() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        Segment::from_coords(0, 0, 0, 9)
            .draw(&mut canvas, Rgb::RED)
            .unwrap();
        assert_eq!(canvas.count_color(Rgb::RED), 10);
    }
}
