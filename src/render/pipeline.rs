use crate::background::synthesize;
use crate::config::RenderConfig;
use crate::effects::RenderEffect;
use crate::encode::gif::GIF_FRAME_DELAY_CS;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::PixelBuffer;
use crate::foundation::error::GlyphloomResult;
use crate::foundation::palette::Palette;
use crate::layout::{LayoutResult, fit};
use crate::render::compositor::TextRenderer;
use crate::text::face::{FaceProvider, FontFace};

/// Effects of the distinct animation frames, in display order.
pub const ANIMATION_EFFECTS: [RenderEffect; 4] = [
    RenderEffect::Outlined,
    RenderEffect::Reveal,
    RenderEffect::Plain,
    RenderEffect::RevealOutlined,
];

/// How many times the distinct frames are repeated in animated output.
pub const ANIMATION_CYCLES: usize = 2;

/// Output of [`generate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Generated {
    /// One still frame.
    Static(PixelBuffer),
    /// Frames of a looping animation, in display order.
    Animated(Vec<PixelBuffer>),
}

impl Generated {
    /// Frames in display order.
    pub fn frames(&self) -> &[PixelBuffer] {
        match self {
            Generated::Static(frame) => std::slice::from_ref(frame),
            Generated::Animated(frames) => frames,
        }
    }

    /// Whether this is animated output.
    pub fn is_animated(&self) -> bool {
        matches!(self, Generated::Animated(_))
    }

    /// File extension matching the output kind.
    pub fn extension(&self) -> &'static str {
        if self.is_animated() { "gif" } else { "png" }
    }
}

/// Effect used for a still frame.
pub fn static_effect(config: &RenderConfig) -> RenderEffect {
    if config.reveal {
        RenderEffect::Reveal
    } else {
        RenderEffect::Outlined
    }
}

fn layout_for<P: FaceProvider>(
    text: &str,
    config: &RenderConfig,
    provider: &P,
) -> GlyphloomResult<LayoutResult<P::Face>> {
    config.validate()?;
    fit(
        text,
        config.font_style,
        provider,
        config.width,
        config.height,
        config.font_size,
    )
}

fn compose_frame<F: FontFace>(
    config: &RenderConfig,
    palette: &Palette,
    layout: &mut LayoutResult<F>,
    effect: RenderEffect,
) -> PixelBuffer {
    let mut frame = synthesize(config.background, config.width, config.height, palette);
    let (face, lines) = layout.parts_mut();
    TextRenderer::new(face).render(&mut frame, lines, effect);
    frame
}

/// Render `text` as a single frame.
#[tracing::instrument(skip(text, provider, palette), fields(chars = text.chars().count()))]
pub fn generate_static<P: FaceProvider>(
    text: &str,
    config: &RenderConfig,
    provider: &P,
    palette: &Palette,
) -> GlyphloomResult<PixelBuffer> {
    let mut layout = layout_for(text, config, provider)?;
    tracing::debug!(
        font_size = layout.font_size(),
        lines = layout.lines().len(),
        "layout chosen"
    );
    Ok(compose_frame(config, palette, &mut layout, static_effect(config)))
}

/// Render `text` as a looping animation: one frame per [`ANIMATION_EFFECTS`] entry, repeated
/// [`ANIMATION_CYCLES`] times.
#[tracing::instrument(skip(text, provider, palette), fields(chars = text.chars().count()))]
pub fn generate_animated<P: FaceProvider>(
    text: &str,
    config: &RenderConfig,
    provider: &P,
    palette: &Palette,
) -> GlyphloomResult<Vec<PixelBuffer>> {
    let mut layout = layout_for(text, config, provider)?;
    tracing::debug!(
        font_size = layout.font_size(),
        lines = layout.lines().len(),
        "layout chosen"
    );

    let distinct: Vec<PixelBuffer> = ANIMATION_EFFECTS
        .iter()
        .map(|&effect| compose_frame(config, palette, &mut layout, effect))
        .collect();

    let total = distinct.len() * ANIMATION_CYCLES;
    Ok(distinct.iter().cycle().take(total).cloned().collect())
}

/// Render `text` as a still or an animation depending on `config.animate`.
pub fn generate<P: FaceProvider>(
    text: &str,
    config: &RenderConfig,
    provider: &P,
    palette: &Palette,
) -> GlyphloomResult<Generated> {
    if config.animate {
        generate_animated(text, config, provider, palette).map(Generated::Animated)
    } else {
        generate_static(text, config, provider, palette).map(Generated::Static)
    }
}

/// Generate `text` and stream the resulting frames into `sink`.
///
/// Nothing reaches the sink unless generation succeeds.
#[tracing::instrument(skip(text, provider, palette, sink))]
pub fn render_to_sink<P: FaceProvider>(
    text: &str,
    config: &RenderConfig,
    provider: &P,
    palette: &Palette,
    sink: &mut dyn FrameSink,
) -> GlyphloomResult<Generated> {
    let generated = generate(text, config, provider, palette)?;
    let frames = generated.frames();

    sink.begin(SinkConfig {
        width: config.width,
        height: config.height,
        frame_count: frames.len(),
        frame_delay_cs: GIF_FRAME_DELAY_CS,
    })?;
    for (idx, frame) in frames.iter().enumerate() {
        sink.push_frame(idx, frame)?;
    }
    sink.end()?;
    tracing::info!(frames = frames.len(), "frames written to sink");
    Ok(generated)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
