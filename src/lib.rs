//! Glyphloom renders a line of text over a procedurally generated background, as a PNG still or
//! a short looping GIF.
//!
//! A generation request runs in three stages:
//!
//! - [`synthesize`] a background from one of the [`BackgroundKind`] generators
//! - [`fit`] the text into the canvas, stepping the font size down and wrapping as needed
//! - draw the lines with a [`RenderEffect`] through a [`TextRenderer`]
//!
//! [`generate_static`] and [`generate_animated`] run the whole pipeline against any
//! [`FaceProvider`]; [`FontLibrary`] is the provider backed by `.ttf` files on disk. Frames can
//! be written directly ([`write_png`], [`write_gif`]) or streamed into a [`FrameSink`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod background;
pub mod config;
pub mod effects;
pub mod encode;
pub mod foundation;
pub mod layout;
pub mod render;
pub mod text;

pub use crate::background::{BackgroundKind, synthesize};
pub use crate::config::RenderConfig;
pub use crate::effects::{RenderEffect, apply_text_mask};
pub use crate::encode::{
    FrameSink, GIF_FRAME_DELAY_CS, GifSink, InMemorySink, PngSink, SinkConfig, output_path,
    sanitize_filename, write_gif, write_png,
};
pub use crate::foundation::core::{PixelBuffer, Rgba8};
pub use crate::foundation::error::{GlyphloomError, GlyphloomResult};
pub use crate::foundation::palette::{MAX_PALETTE_SIZE, Palette};
pub use crate::layout::{LayoutResult, fit, wrap_words};
pub use crate::render::{
    ANIMATION_CYCLES, ANIMATION_EFFECTS, Generated, TextRenderer, generate, generate_animated,
    generate_static, render_to_sink,
};
pub use crate::text::{FaceProvider, FontFace, FontLibrary, FontStyle, ParleyFace, TextExtent};
