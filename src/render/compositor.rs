use crate::effects::RenderEffect;
use crate::effects::composite::apply_text_mask;
use crate::foundation::core::{PixelBuffer, Rgba8};
use crate::layout::line_spacing_for;
use crate::text::face::FontFace;

/// Unit offsets of the eight outline passes: the four edges, then the four corners.
pub const OUTLINE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

const EMOJI_RANGES: [(u32, u32); 9] = [
    (0x1F600, 0x1F64F),
    (0x1F300, 0x1F5FF),
    (0x1F680, 0x1F6FF),
    (0x1F1E0, 0x1F1FF),
    (0x2600, 0x26FF),
    (0x2700, 0x27BF),
    (0xFE00, 0xFE0F),
    (0x1F900, 0x1F9FF),
    (0x1F018, 0x1F270),
];

/// Whether `ch` falls in one of the emoji/symbol blocks the renderer skips.
pub fn is_emoji(ch: char) -> bool {
    let cp = u32::from(ch);
    EMOJI_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Draws wrapped lines onto a buffer through a borrowed [`FontFace`].
pub struct TextRenderer<'a, F> {
    face: &'a mut F,
}

impl<'a, F: FontFace> TextRenderer<'a, F> {
    /// Renderer drawing with `face`.
    pub fn new(face: &'a mut F) -> Self {
        Self { face }
    }

    /// Draw `text` one char at a time with the pen starting at `(x, baseline)`.
    ///
    /// Emoji are skipped without advancing the pen.
    pub fn render_text(
        &mut self,
        buf: &mut PixelBuffer,
        text: &str,
        x: i32,
        baseline: i32,
        color: Rgba8,
    ) {
        let mut pen_x = x;
        let mut scratch = [0u8; 4];
        for ch in text.chars() {
            if is_emoji(ch) {
                continue;
            }
            self.face
                .draw(buf, ch.encode_utf8(&mut scratch), pen_x, baseline, color);
            pen_x += self.face.advance(ch);
        }
    }

    /// Draw `text` at each of the eight [`OUTLINE_OFFSETS`] around `(x, baseline)`.
    pub fn render_with_outline(
        &mut self,
        buf: &mut PixelBuffer,
        text: &str,
        x: i32,
        baseline: i32,
        color: Rgba8,
    ) {
        for (dx, dy) in OUTLINE_OFFSETS {
            self.render_text(buf, text, x + dx, baseline + dy, color);
        }
    }

    /// Left edge that centers `line` in a canvas `canvas_width` pixels wide, clamped at zero.
    pub fn line_x(&mut self, canvas_width: u32, line: &str) -> i32 {
        let width = self.face.measure(line).width;
        ((canvas_width as i32 - width) / 2).max(0)
    }

    /// Baseline of the first line when `line_count` lines are centered vertically.
    pub fn block_start_y(&self, canvas_height: u32, line_count: usize) -> i32 {
        let ascent = self.face.ascent_px();
        let total = (line_count as i32).saturating_mul(self.line_spacing());
        ((canvas_height as i32 - total) / 2 + ascent).max(ascent)
    }

    /// Baseline-to-baseline distance of the face.
    pub fn line_spacing(&self) -> i32 {
        line_spacing_for(self.face.line_height())
    }

    /// Draw `lines` centered on `buf` with `effect`.
    ///
    /// Reveal effects replace `buf` with a white field showing the original pixels only where
    /// the text mask was painted.
    pub fn render(&mut self, buf: &mut PixelBuffer, lines: &[String], effect: RenderEffect) {
        let placements = self.placements(buf.width(), buf.height(), lines);

        if effect.is_reveal() {
            let mut mask = PixelBuffer::new(buf.width(), buf.height());
            self.draw_lines(&mut mask, lines, &placements, effect.is_outlined(), Rgba8::BLACK);
            let mut output = PixelBuffer::filled(buf.width(), buf.height(), Rgba8::WHITE);
            apply_text_mask(buf, &mut output, &mask);
            *buf = output;
            return;
        }

        if effect.is_outlined() {
            for (line, &(x, y)) in lines.iter().zip(&placements) {
                self.render_with_outline(buf, line, x, y, Rgba8::BLACK);
                self.render_text(buf, line, x, y, Rgba8::WHITE);
            }
        } else {
            self.draw_lines(buf, lines, &placements, false, Rgba8::WHITE);
        }
    }

    fn placements(&mut self, width: u32, height: u32, lines: &[String]) -> Vec<(i32, i32)> {
        let start_y = self.block_start_y(height, lines.len());
        let spacing = self.line_spacing();
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| (self.line_x(width, line), start_y + i as i32 * spacing))
            .collect()
    }

    fn draw_lines(
        &mut self,
        buf: &mut PixelBuffer,
        lines: &[String],
        placements: &[(i32, i32)],
        outlined: bool,
        color: Rgba8,
    ) {
        for (line, &(x, y)) in lines.iter().zip(placements) {
            if outlined {
                self.render_with_outline(buf, line, x, y, color);
            }
            self.render_text(buf, line, x, y, color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
