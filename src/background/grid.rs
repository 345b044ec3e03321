use crate::foundation::core::PixelBuffer;
use crate::foundation::math::scale_color;
use crate::foundation::palette::Palette;

/// Stripe period along the anti-diagonal `x + y`, in pixels.
pub const TILE_SIZE: u32 = 50;

const DARK_FACTOR: f64 = 0.7;

/// Diagonal stripes: each tile is half palette color, half the same color darkened.
pub fn diagonal_grid(width: u32, height: u32, palette: &Palette) -> PixelBuffer {
    PixelBuffer::from_fn_par(width, height, |x, y| {
        let d = x + y;
        let base = palette.cyclic((d / TILE_SIZE) as usize);
        if d % TILE_SIZE < TILE_SIZE / 2 {
            base
        } else {
            scale_color(base, DARK_FACTOR)
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/background/grid.rs"]
mod tests;
