use rayon::prelude::*;

use crate::foundation::error::{GlyphloomError, GlyphloomResult};

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Construct a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Construct a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Channels as `[r, g, b, a]`.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build from `[r, g, b, a]`.
    pub const fn from_array(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }
}

/// A `width x height` grid of straight-alpha RGBA8 pixels, row-major and tightly packed.
///
/// Buffers are moved between stages (synthesizer, compositor, encoder) and never shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba8::TRANSPARENT)
    }

    /// Buffer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: color.to_array().repeat(len),
        }
    }

    /// Wrap raw RGBA8 bytes; the length must be `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> GlyphloomResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| GlyphloomError::validation("pixel buffer size overflow"))?;
        if data.len() != expected {
            return Err(GlyphloomError::validation(format!(
                "pixel buffer expects {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel, filling rows in parallel.
    pub fn from_fn_par<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> Rgba8 + Sync,
    {
        let mut out = Self::new(width, height);
        let stride = (width as usize) * 4;
        if stride == 0 {
            return out;
        }
        out.data
            .par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    px.copy_from_slice(&f(x as u32, y as u32).to_array());
                }
            });
        out
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Raw RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA8 bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba8> + '_ {
        self.data
            .chunks_exact(4)
            .map(|px| Rgba8::new(px[0], px[1], px[2], px[3]))
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba8> {
        let idx = self.index_of(x, y)?;
        let px = &self.data[idx..idx + 4];
        Some(Rgba8::new(px[0], px[1], px[2], px[3]))
    }

    /// Overwrite the pixel at `(x, y)`; coordinates outside the buffer are ignored.
    pub fn put(&mut self, x: i32, y: i32, color: Rgba8) {
        if let Some(idx) = self.index_of(x, y) {
            self.data[idx..idx + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgba8) {
        let rgba = color.to_array();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Copy into an [`image::RgbaImage`] for encoding.
    pub fn to_rgba_image(&self) -> GlyphloomResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| GlyphloomError::encode("pixel buffer does not match its dimensions"))
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
