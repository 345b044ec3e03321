use crate::foundation::core::Rgba8;

/// `round(x * y / 255)` for 8-bit channel products.
pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// Per-channel linear blend `c1 * (1 - t) + c2 * t`, truncated, with alpha forced opaque.
pub fn interpolate_color(c1: Rgba8, c2: Rgba8, t: f64) -> Rgba8 {
    let mix = |a: u8, b: u8| -> u8 { (f64::from(a) * (1.0 - t) + f64::from(b) * t) as u8 };
    Rgba8::opaque(mix(c1.r, c2.r), mix(c1.g, c2.g), mix(c1.b, c2.b))
}

/// Multiply RGB channels by `factor` (truncated), alpha forced opaque.
pub fn scale_color(c: Rgba8, factor: f64) -> Rgba8 {
    let scale = |v: u8| -> u8 { (f64::from(v) * factor) as u8 };
    Rgba8::opaque(scale(c.r), scale(c.g), scale(c.b))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
