//! Text compositing and frame assembly.

/// Drawing lines of text with effects.
pub mod compositor;
/// Frame assembly.
pub mod pipeline;

pub use compositor::{OUTLINE_OFFSETS, TextRenderer, is_emoji};
pub use pipeline::{
    ANIMATION_CYCLES, ANIMATION_EFFECTS, Generated, generate, generate_animated, generate_static,
    render_to_sink, static_effect,
};
