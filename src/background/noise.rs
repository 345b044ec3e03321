use std::f64::consts::PI;

use crate::foundation::core::PixelBuffer;
use crate::foundation::palette::Palette;

const SMOOTH_OCTAVES: usize = 6;
const SMOOTH_AMPLITUDE_DECAY: f64 = 0.6;
const SMOOTH_FREQUENCY_GROWTH: f64 = 1.8;

/// Four summed sine/cosine terms at decreasing spatial frequencies, mapped onto `palette`.
pub fn perlin_like(width: u32, height: u32, palette: &Palette) -> PixelBuffer {
    PixelBuffer::from_fn_par(width, height, |x, y| {
        palette.gradient(perlin_like_value(f64::from(x), f64::from(y)))
    })
}

/// Normalized noise value in `[0, 1]`.
pub(crate) fn perlin_like_value(x: f64, y: f64) -> f64 {
    let v1 = (x / 50.0).sin() + (y / 40.0).cos();
    let v2 = (x / 25.0).sin() + (y / 20.0).cos() * 0.5;
    let v3 = (x / 12.5).sin() + (y / 10.0).cos() * 0.25;
    let v4 = (x / 80.0).sin() + (y / 60.0).cos() * 1.5;

    ((v1 + v2 + v3 + v4 + 4.0) / 8.0).clamp(0.0, 1.0)
}

/// Six-octave trigonometric noise over normalized coordinates, S-curved with `tanh`.
pub fn perlin_smooth(width: u32, height: u32, palette: &Palette) -> PixelBuffer {
    let (w, h) = (f64::from(width), f64::from(height));
    PixelBuffer::from_fn_par(width, height, |x, y| {
        palette.gradient(perlin_smooth_value(f64::from(x) / w, f64::from(y) / h))
    })
}

/// Normalized noise value in `[0, 1]` for `fx, fy` in `[0, 1)`.
pub(crate) fn perlin_smooth_value(fx: f64, fy: f64) -> f64 {
    let mut noise = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;

    for _ in 0..SMOOTH_OCTAVES {
        let n1 = (fx * frequency * PI * 4.0).sin() * (fy * frequency * PI * 3.0).cos();
        let n2 = (fx * frequency * PI * 3.0).cos() * (fy * frequency * PI * 4.0).sin();
        let n3 = ((fx + fy) * frequency * PI * 2.0).sin();
        let n4 = ((fx - fy) * frequency * PI * 2.5).cos();

        noise += amplitude * (n1 + n2 + n3 + n4) / 4.0;
        amplitude *= SMOOTH_AMPLITUDE_DECAY;
        frequency *= SMOOTH_FREQUENCY_GROWTH;
    }

    (noise.tanh() + 1.0) / 2.0
}

#[cfg(test)]
#[path = "../../tests/unit/background/noise.rs"]
mod tests;
