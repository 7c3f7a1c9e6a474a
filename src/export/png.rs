//! PNG encoding

use std::sync::Arc;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};

use crate::canvas::Canvas;
use crate::errors::{BackendError, Result};
use crate::figure::Figure;

/// First eight bytes of every PNG file
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Encode a canvas as an RGBA8 PNG
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let rgba = canvas.to_rgba8();
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&rgba, canvas.width, canvas.height, ColorType::Rgba8)
        .map_err(|e| BackendError::Encode(Arc::new(e.to_string())))?;
    Ok(png)
}

/// Render `figure` with a transparent background and encode it
pub fn render_png(figure: &Figure) -> Result<Vec<u8>> {
    encode_png(&figure.render(true)?)
}
