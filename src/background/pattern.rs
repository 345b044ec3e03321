use crate::foundation::core::{PixelBuffer, Rgba8};

/// XOR bit pattern: `v = x ^ (y + (x + y) / 2)` truncated to 8 bits.
pub fn xor_pattern(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn_par(width, height, xor_pixel)
}

fn xor_pixel(x: u32, y: u32) -> Rgba8 {
    let v = (x ^ (y + (x + y) / 2)) as u8;
    let b = ((u32::from(v) * 3) % 255) as u8;
    Rgba8::opaque(v, 255 - v, b)
}

/// Sine/cosine waves over distance and angle from the image center.
pub fn radial(width: u32, height: u32) -> PixelBuffer {
    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    PixelBuffer::from_fn_par(width, height, move |x, y| radial_pixel(x, y, cx, cy))
}

fn radial_pixel(x: u32, y: u32, cx: f64, cy: f64) -> Rgba8 {
    let dx = f64::from(x) - cx;
    let dy = f64::from(y) - cy;
    let dist = (dx * dx + dy * dy).sqrt();
    let angle = dy.atan2(dx);

    let r = ((dist / 20.0 + angle * 5.0).sin().abs() * 255.0) as u8;
    let g = ((dist / 30.0 - angle * 3.0).cos().abs() * 255.0) as u8;
    let b = ((dist / 40.0 + angle * 7.0).sin().abs() * 255.0) as u8;
    Rgba8::opaque(r, g, b)
}

#[cfg(test)]
#[path = "../../tests/unit/background/pattern.rs"]
mod tests;
