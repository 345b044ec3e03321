use std::path::Path;

use crate::foundation::core::PixelBuffer;
use crate::foundation::error::{GlyphloomError, GlyphloomResult};

/// Encode `buffer` as an RGBA PNG at `path`.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> GlyphloomResult<()> {
    image::save_buffer_with_format(
        path,
        buffer.as_bytes(),
        buffer.width(),
        buffer.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| GlyphloomError::encode(format!("write png '{}': {e}", path.display())))
}
