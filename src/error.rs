//! Error types for trueno-raster operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel access outside `[0, height) x [0, width)`.
    #[error("Pixel ({row}, {col}) is out of bounds for a {width}x{height} canvas")]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
        /// Canvas width.
        width: u32,
        /// Canvas height.
        height: u32,
    },

    /// Geometrically meaningless input (negative radius, inverted rectangle, ...).
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Recursion depth above the configured guard.
    #[error("Curve depth {depth} exceeds the maximum of {max_depth}")]
    DepthLimitExceeded {
        /// Requested depth.
        depth: u32,
        /// Configured maximum.
        max_depth: u32,
    },

    /// Color channel outside `[0, 255]`.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}
