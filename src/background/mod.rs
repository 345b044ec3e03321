//! Procedural background synthesis.
//!
//! Every generator is a pure function of `(width, height)` (plus the shared [`Palette`] for the
//! palette-mapped kinds). Pixels are computed independently and rows are filled in parallel.

mod grid;
mod noise;
mod pattern;

use std::fmt;
use std::str::FromStr;

use crate::foundation::core::PixelBuffer;
use crate::foundation::error::GlyphloomError;
use crate::foundation::palette::Palette;

pub use grid::{TILE_SIZE, diagonal_grid};
pub use noise::{perlin_like, perlin_smooth};
pub use pattern::{radial, xor_pattern};

/// Closed set of background generators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BackgroundKind {
    /// XOR bit pattern (`default`).
    #[default]
    #[serde(rename = "default")]
    Pattern,
    /// Four-term trigonometric pseudo-noise mapped onto the palette (`perlin`).
    #[serde(rename = "perlin")]
    Perlin,
    /// Six-octave smooth pseudo-noise mapped onto the palette (`perlin-s`).
    #[serde(rename = "perlin-s")]
    PerlinSmooth,
    /// Polar-coordinate waves around the image center (`radial`).
    #[serde(rename = "radial")]
    Radial,
    /// Two-tone diagonal stripes cycling through the palette (`diagonal`).
    #[serde(rename = "diagonal")]
    Diagonal,
}

impl BackgroundKind {
    /// Every kind, in declaration order.
    pub const ALL: [BackgroundKind; 5] = [
        BackgroundKind::Pattern,
        BackgroundKind::Perlin,
        BackgroundKind::PerlinSmooth,
        BackgroundKind::Radial,
        BackgroundKind::Diagonal,
    ];

    /// Configuration key for this kind.
    pub fn key(self) -> &'static str {
        match self {
            BackgroundKind::Pattern => "default",
            BackgroundKind::Perlin => "perlin",
            BackgroundKind::PerlinSmooth => "perlin-s",
            BackgroundKind::Radial => "radial",
            BackgroundKind::Diagonal => "diagonal",
        }
    }

    /// All keys sorted lexicographically, for help output.
    pub fn sorted_keys() -> Vec<&'static str> {
        let mut keys: Vec<_> = Self::ALL.iter().map(|k| k.key()).collect();
        keys.sort_unstable();
        keys
    }
}

impl fmt::Display for BackgroundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BackgroundKind {
    type Err = GlyphloomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| GlyphloomError::validation(format!("invalid background type: {s}")))
    }
}

/// Generate a `width x height` background of the given kind.
pub fn synthesize(kind: BackgroundKind, width: u32, height: u32, palette: &Palette) -> PixelBuffer {
    match kind {
        BackgroundKind::Pattern => xor_pattern(width, height),
        BackgroundKind::Perlin => perlin_like(width, height, palette),
        BackgroundKind::PerlinSmooth => perlin_smooth(width, height, palette),
        BackgroundKind::Radial => radial(width, height),
        BackgroundKind::Diagonal => diagonal_grid(width, height, palette),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/background/synthesize.rs"]
mod tests;
