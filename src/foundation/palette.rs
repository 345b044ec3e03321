use crate::foundation::core::{PixelBuffer, Rgba8};
use crate::foundation::math::interpolate_color;

/// Upper bound on palette entries (GIF color table size).
pub const MAX_PALETTE_SIZE: usize = 256;

const STUDIO_COLORS: [Rgba8; 16] = [
    // forest
    Rgba8::opaque(34, 89, 34),
    Rgba8::opaque(85, 139, 47),
    Rgba8::opaque(154, 205, 50),
    Rgba8::opaque(173, 255, 47),
    // sky and water
    Rgba8::opaque(70, 130, 180),
    Rgba8::opaque(135, 206, 235),
    Rgba8::opaque(176, 224, 230),
    Rgba8::opaque(240, 248, 255),
    // earth
    Rgba8::opaque(160, 82, 45),
    Rgba8::opaque(205, 133, 63),
    Rgba8::opaque(222, 184, 135),
    Rgba8::opaque(245, 222, 179),
    // accents
    Rgba8::opaque(255, 182, 193),
    Rgba8::opaque(221, 160, 221),
    Rgba8::opaque(230, 230, 250),
    Rgba8::opaque(255, 228, 181),
];

/// Immutable ordered color list shared by background gradients and GIF quantization.
///
/// Index 0 is black and index 1 is white; the rest is a fixed set of opaque thematic colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::studio()
    }
}

impl Palette {
    /// The built-in palette: black, white, then the 16 studio colors.
    pub fn studio() -> Self {
        let mut colors = Vec::with_capacity(2 + STUDIO_COLORS.len());
        colors.push(Rgba8::BLACK);
        colors.push(Rgba8::WHITE);
        for c in STUDIO_COLORS {
            if colors.len() >= MAX_PALETTE_SIZE {
                break;
            }
            colors.push(c);
        }
        Self { colors }
    }

    /// All entries in order.
    pub fn colors(&self) -> &[Rgba8] {
        &self.colors
    }

    /// Number of entries; never exceeds [`MAX_PALETTE_SIZE`].
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false` for constructed palettes.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entry at `index` wrapped modulo the palette length.
    pub fn cyclic(&self, index: usize) -> Rgba8 {
        self.colors[index % self.colors.len()]
    }

    /// Map `t` in `[0, 1]` onto the palette with linear blending between neighbours.
    pub fn gradient(&self, t: f64) -> Rgba8 {
        let last = self.colors.len() - 1;
        let pos = t * last as f64;
        let idx = pos as usize;
        if idx >= last {
            return self.colors[last];
        }
        let frac = pos - idx as f64;
        interpolate_color(self.colors[idx], self.colors[idx + 1], frac)
    }

    /// Index of the entry closest to `c` by squared RGBA distance; ties keep the lower index.
    pub fn nearest_index(&self, c: Rgba8) -> usize {
        let mut best = 0usize;
        let mut best_dist = u32::MAX;
        for (i, p) in self.colors.iter().enumerate() {
            let d = sq_dist(c, *p);
            if d < best_dist {
                best = i;
                best_dist = d;
                if d == 0 {
                    break;
                }
            }
        }
        best
    }

    /// Replace every pixel of `buf` by its nearest palette entry.
    pub fn quantize(&self, buf: &PixelBuffer) -> PixelBuffer {
        let mut out = buf.clone();
        for px in out.as_bytes_mut().chunks_exact_mut(4) {
            let c = Rgba8::new(px[0], px[1], px[2], px[3]);
            px.copy_from_slice(&self.colors[self.nearest_index(c)].to_array());
        }
        out
    }
}

fn sq_dist(a: Rgba8, b: Rgba8) -> u32 {
    let d = |x: u8, y: u8| -> u32 {
        let v = i32::from(x) - i32::from(y);
        (v * v) as u32
    };
    d(a.r, b.r) + d(a.g, b.g) + d(a.b, b.b) + d(a.a, b.a)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/palette.rs"]
mod tests;
