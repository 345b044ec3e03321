use std::borrow::Cow;

use crate::effects::composite::blend_premul_region;
use crate::foundation::core::{PixelBuffer, Rgba8};
use crate::foundation::error::{GlyphloomError, GlyphloomResult};
use crate::text::face::{FontFace, TextExtent};

// Probe text used to read line metrics; ascent/descent come from the font, not the glyphs.
const METRICS_PROBE: &str = "H";

/// [`FontFace`] backed by Parley shaping and `vello_cpu` glyph rasterization.
pub struct ParleyFace {
    size: f32,
    family_name: String,
    font: vello_cpu::peniko::FontData,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    ascent: f32,
    descent: f32,
}

impl std::fmt::Debug for ParleyFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyFace")
            .field("size", &self.size)
            .field("family_name", &self.family_name)
            .field("ascent", &self.ascent)
            .field("descent", &self.descent)
            .finish()
    }
}

impl ParleyFace {
    /// Build a face from raw font bytes at `size` points.
    pub fn new(font_bytes: Vec<u8>, size: f32) -> GlyphloomResult<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(GlyphloomError::face_creation(format!(
                "font size must be finite and > 0, got {size}"
            )));
        }

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            GlyphloomError::asset_load("failed to parse font: no font families registered")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| GlyphloomError::asset_load("registered font family has no name"))?
            .to_string();

        let mut face = Self {
            size,
            family_name,
            font: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0),
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            ascent: 0.0,
            descent: 0.0,
        };

        let probe = face.layout(METRICS_PROBE);
        let metrics = probe
            .lines()
            .next()
            .map(|line| *line.metrics())
            .ok_or_else(|| GlyphloomError::face_creation("font produced no line metrics"))?;
        face.ascent = metrics.ascent;
        face.descent = metrics.descent;
        Ok(face)
    }

    /// Family name registered from the font bytes.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    fn layout(&mut self, text: &str) -> parley::Layout<()> {
        let family = self.family_name.clone();
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

fn widest_line(layout: &parley::Layout<()>) -> f32 {
    layout
        .lines()
        .map(|line| line.metrics().advance)
        .fold(0.0f32, f32::max)
}

impl FontFace for ParleyFace {
    fn size(&self) -> f32 {
        self.size
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn descent(&self) -> f32 {
        self.descent
    }

    fn measure(&mut self, text: &str) -> TextExtent {
        if text.is_empty() {
            return TextExtent {
                width: 0,
                height: self.line_height(),
            };
        }
        let layout = self.layout(text);
        TextExtent {
            width: widest_line(&layout).ceil() as i32,
            height: self.line_height(),
        }
    }

    fn advance(&mut self, ch: char) -> i32 {
        let mut buf = [0u8; 4];
        self.measure(ch.encode_utf8(&mut buf)).width
    }

    fn draw(&mut self, target: &mut PixelBuffer, text: &str, x: i32, baseline: i32, color: Rgba8) {
        if text.is_empty() || color.a == 0 {
            return;
        }
        let layout = self.layout(text);

        // Margin for glyphs overhanging their advance box.
        let pad = (self.size * 0.5).ceil() as i32 + 1;
        let ascent_px = self.ascent_px();
        let surface_w = widest_line(&layout).ceil() as i32 + 2 * pad;
        let surface_h = self.line_height() + 2 * pad;
        let (Ok(w), Ok(h)) = (u16::try_from(surface_w), u16::try_from(surface_h)) else {
            tracing::warn!(surface_w, surface_h, "glyph surface exceeds u16, skipping draw");
            return;
        };

        let local_baseline = (pad + ascent_px) as f32;
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));

        for line in layout.lines() {
            let shift_y = local_baseline - line.metrics().baseline;
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let run_y = shift_y + run.baseline();
                let mut pen_x = pad as f32 + run.offset();
                let glyphs: Vec<vello_cpu::Glyph> = run
                    .glyphs()
                    .map(|g| {
                        let glyph = vello_cpu::Glyph {
                            id: g.id,
                            x: pen_x + g.x,
                            y: run_y - g.y,
                        };
                        pen_x += g.advance;
                        glyph
                    })
                    .collect();
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs.into_iter());
            }
        }

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        blend_premul_region(
            target,
            pixmap.data_as_u8_slice(),
            u32::from(w),
            u32::from(h),
            x - pad,
            baseline - pad - ascent_px,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/parley_face.rs"]
mod tests;
