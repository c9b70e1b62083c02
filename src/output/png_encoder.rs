//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use crate::canvas::Canvas;
use crate::error::Result;

/// PNG encoder for canvas output.
pub struct PngEncoder;

impl PngEncoder {
    /// Encode a canvas to 8-bit RGB PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(canvas: &Canvas) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();

        {
            let mut encoder = png::Encoder::new(&mut buffer, canvas.width(), canvas.height());
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(canvas.as_bytes())?;
        }

        log::debug!(
            "encoded {}x{} canvas into {} PNG bytes",
            canvas.width(),
            canvas.height(),
            buffer.len()
        );
        Ok(buffer)
    }
}
