use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::foundation::core::PixelBuffer;
use crate::foundation::error::{GlyphloomError, GlyphloomResult};
use crate::foundation::palette::Palette;

/// Per-frame display time of animated output, in centiseconds.
pub const GIF_FRAME_DELAY_CS: u16 = 15;

/// Encode `frames` as an infinitely looping GIF into `writer`.
///
/// Every frame is mapped onto `palette` first, so the file uses at most the palette's colors.
/// The encoder still writes a local color table per frame rather than one global table.
pub fn encode_gif<W: Write>(
    frames: &[PixelBuffer],
    palette: &Palette,
    delay_cs: u16,
    writer: W,
) -> GlyphloomResult<()> {
    if frames.is_empty() {
        return Err(GlyphloomError::encode("gif needs at least one frame"));
    }

    let mut encoder = image::codecs::gif::GifEncoder::new(writer);
    encoder
        .set_repeat(image::codecs::gif::Repeat::Infinite)
        .map_err(|e| GlyphloomError::encode(format!("gif repeat: {e}")))?;

    let delay = image::Delay::from_numer_denom_ms(u32::from(delay_cs) * 10, 1);
    for (idx, frame) in frames.iter().enumerate() {
        let rgba = palette.quantize(frame).to_rgba_image()?;
        encoder
            .encode_frame(image::Frame::from_parts(rgba, 0, 0, delay))
            .map_err(|e| GlyphloomError::encode(format!("gif frame {idx}: {e}")))?;
    }
    Ok(())
}

/// Write `frames` as a looping GIF file at `path`.
pub fn write_gif(
    frames: &[PixelBuffer],
    palette: &Palette,
    delay_cs: u16,
    path: &Path,
) -> GlyphloomResult<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create gif file '{}'", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    encode_gif(frames, palette, delay_cs, &mut writer)?;
    writer
        .flush()
        .with_context(|| format!("flush gif file '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
