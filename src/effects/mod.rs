//! Render effects and the pixel compositing they are built from.

/// Pixel-level blending and masking.
pub mod composite;
mod effect;

pub use composite::apply_text_mask;
pub use effect::RenderEffect;
