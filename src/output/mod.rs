//! Export adapters.
//!
//! The canvas exposes its pixels as tightly packed RGB bytes; encoders here
//! turn that buffer into an interchange format. Display and file handling
//! stay with the caller.

mod png_encoder;

pub use png_encoder::PngEncoder;
