//! Core canvas for pixel rendering.
//!
//! A [`Canvas`] is allocated once at a fixed size and fill color and is only
//! ever mutated in place. Every access is bounds-checked and reports
//! [`Error::OutOfBounds`] instead of clipping, and multi-pixel writes are
//! all-or-nothing.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::Point;
use std::sync::{Arc, Mutex, PoisonError};

/// Bytes per pixel (R, G, B).
const CHANNELS: usize = 3;

/// Fixed-size RGB pixel buffer addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels (number of columns).
    width: u32,
    /// Height in pixels (number of rows).
    height: u32,
    /// RGB pixels in row-major order, 3 bytes per pixel, no padding.
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas with every pixel set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::canvas::Canvas;
    /// use trueno_raster::color::Rgb;
    ///
    /// let canvas = Canvas::create(800, 600, Rgb::BLACK).unwrap();
    /// assert_eq!(canvas.width(), 800);
    /// assert_eq!(canvas.height(), 600);
    /// ```
    pub fn create(width: u32, height: u32, fill: Rgb) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * CHANNELS;
        let mut canvas = Self {
            width,
            height,
            pixels: vec![0; size],
        };
        canvas.clear(fill);

        log::debug!("created {width}x{height} canvas filled with {fill:?}");
        Ok(canvas)
    }

    /// Create a black canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::create(width, height, Rgb::BLACK)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `point` addresses a pixel of this canvas.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.row >= 0
            && point.col >= 0
            && (point.row as u32) < self.height
            && (point.col as u32) < self.width
    }

    /// Fail fast unless the inclusive box from `top_left` to `bottom_right`,
    /// both `(row, col)`, lies on the canvas.
    ///
    /// Drawing operations call this with the extent of a shape before
    /// rasterizing it, so an oversized shape is rejected without building its
    /// point list. Coordinates are `i64` so extents computed from `i32`
    /// inputs cannot overflow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] naming the first corner off the canvas,
    /// saturated to the `i32` range.
    pub fn check_extent(&self, top_left: (i64, i64), bottom_right: (i64, i64)) -> Result<()> {
        let rows = 0..i64::from(self.height);
        let cols = 0..i64::from(self.width);
        let Some((row, col)) = [top_left, bottom_right]
            .into_iter()
            .find(|(row, col)| !rows.contains(row) || !cols.contains(col))
        else {
            return Ok(());
        };

        log::warn!("rejected shape spanning {top_left:?}..={bottom_right:?}");
        Err(Error::OutOfBounds {
            row: saturate(row),
            col: saturate(col),
            width: self.width,
            height: self.height,
        })
    }

    /// [`Canvas::check_extent`] over the bounding box of `points`.
    ///
    /// An empty iterator always passes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the bounding box leaves the canvas.
    pub fn check_points_extent(&self, points: impl IntoIterator<Item = Point>) -> Result<()> {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Ok(());
        };
        let (top_left, bottom_right) = points.fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.row.min(p.row), lo.col.min(p.col)),
                Point::new(hi.row.max(p.row), hi.col.max(p.col)),
            )
        });
        self.check_extent(
            (i64::from(top_left.row), i64::from(top_left.col)),
            (i64::from(bottom_right.row), i64::from(bottom_right.col)),
        )
    }

    /// Tightly packed RGB bytes, row-major.
    ///
    /// This is the buffer handed to export collaborators such as
    /// [`crate::output::PngEncoder`].
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, row: u32) -> Option<&[u8]> {
        if row >= self.height {
            return None;
        }
        let row_bytes = (self.width as usize) * CHANNELS;
        let start = (row as usize) * row_bytes;
        Some(&self.pixels[start..start + row_bytes])
    }

    /// Refill every pixel with `color` in place.
    pub fn clear(&mut self, color: Rgb) {
        let rgb = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&rgb);
        }
    }

    /// Count the pixels currently holding `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgb) -> usize {
        let rgb = color.to_array();
        self.pixels
            .chunks_exact(CHANNELS)
            .filter(|chunk| *chunk == rgb)
            .count()
    }

    /// Get the color at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `point` lies outside the canvas.
    pub fn get_pixel(&self, point: Point) -> Result<Rgb> {
        let idx = self.pixel_index(point)?;
        Ok(Rgb::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ))
    }

    /// Set the color at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `point` lies outside the canvas.
    pub fn set_pixel(&mut self, point: Point, color: Rgb) -> Result<()> {
        let idx = self.pixel_index(point)?;
        self.write(idx, color);
        Ok(())
    }

    /// Set every point in `points` to `color`.
    ///
    /// All points are validated before the first write, so on error the
    /// canvas is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for the first point outside the canvas.
    pub fn set_pixels(&mut self, points: &[Point], color: Rgb) -> Result<()> {
        let indices = self.pixel_indices(points)?;
        for idx in indices {
            self.write(idx, color);
        }
        log::trace!("set {} pixels to {color:?}", points.len());
        Ok(())
    }

    /// Set each `(point, color)` pair, validating every point first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for the first point outside the canvas.
    pub fn set_colored_pixels(&mut self, pixels: &[(Point, Rgb)]) -> Result<()> {
        let indices = pixels
            .iter()
            .map(|&(point, _)| self.pixel_index(point))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|e| log::warn!("rejected multi-color write: {e}"))?;
        for (idx, &(_, color)) in indices.into_iter().zip(pixels) {
            self.write(idx, color);
        }
        log::trace!("set {} colored pixels", pixels.len());
        Ok(())
    }

    fn pixel_indices(&self, points: &[Point]) -> Result<Vec<usize>> {
        points
            .iter()
            .map(|&point| self.pixel_index(point))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|e| log::warn!("rejected {}-pixel write: {e}", points.len()))
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, point: Point) -> Result<usize> {
        if !self.contains(point) {
            return Err(Error::OutOfBounds {
                row: point.row,
                col: point.col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(((point.row as usize) * (self.width as usize) + point.col as usize) * CHANNELS)
    }

    #[inline]
    fn write(&mut self, idx: usize, color: Rgb) {
        self.pixels[idx..idx + CHANNELS].copy_from_slice(&color.to_array());
    }
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Default for Canvas {
    /// A single black pixel.
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![0; CHANNELS],
        }
    }
}

/// Cloneable handle serializing access to one canvas.
///
/// Each [`SharedCanvas::with_canvas`] call holds the canvas lock for its
/// whole closure, so a multi-pixel draw is never interleaved with another.
#[derive(Debug, Clone, Default)]
pub struct SharedCanvas {
    inner: Arc<Mutex<Canvas>>,
}

impl SharedCanvas {
    /// Wrap a canvas for shared use.
    #[must_use]
    pub fn new(canvas: Canvas) -> Self {
        Self {
            inner: Arc::new(Mutex::new(canvas)),
        }
    }

    /// Run `f` with exclusive access to the canvas.
    ///
    /// A poisoned lock is recovered: every canvas operation validates before
    /// it mutates, so a panicking holder cannot leave a half-drawn shape.
    pub fn with_canvas<T>(&self, f: impl FnOnce(&mut Canvas) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Copy the current canvas state.
    #[must_use]
    pub fn snapshot(&self) -> Canvas {
        self.with_canvas(|canvas| canvas.clone())
    }
}
