use crate::foundation::error::GlyphloomResult;
use crate::layout::wrap::wrap_words;
use crate::text::face::{FaceProvider, FontFace};
use crate::text::fonts::FontStyle;

/// Smallest font size tried; also the size of the unconditional fallback layout.
pub const FLOOR_FONT_SIZE: f32 = 8.0;
/// Decrement between candidate font sizes.
pub const FONT_SIZE_STEP: f32 = 2.0;
/// Largest starting size accepted; larger requests are clamped to it.
pub const MAX_FONT_SIZE: f32 = 1000.0;
/// Line pitch as a percentage of the line height.
pub const LINE_SPACING_PERCENT: i32 = 120;

/// 90% of a box dimension, in whole pixels.
pub fn fit_limit(max: u32) -> i32 {
    (u64::from(max) * 9 / 10) as i32
}

/// Baseline-to-baseline distance for a given line height: `ceil(line_height * 1.2)`.
pub fn line_spacing_for(line_height: i32) -> i32 {
    let spacing = (i64::from(line_height) * i64::from(LINE_SPACING_PERCENT) + 99) / 100;
    spacing.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Outcome of [`fit`]: the accepted face, its size and the wrapped lines.
#[derive(Debug)]
pub struct LayoutResult<F> {
    face: F,
    font_size: f32,
    lines: Vec<String>,
}

impl<F: FontFace> LayoutResult<F> {
    /// Assemble a result from parts.
    pub fn new(face: F, lines: Vec<String>) -> Self {
        Self {
            font_size: face.size(),
            face,
            lines,
        }
    }

    /// Chosen font size in points.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The face the lines were measured with.
    pub fn face(&self) -> &F {
        &self.face
    }

    /// `ceil(ascent + descent)` of the chosen face.
    pub fn line_height(&self) -> i32 {
        self.face.line_height()
    }

    /// Baseline-to-baseline distance.
    pub fn line_spacing(&self) -> i32 {
        line_spacing_for(self.line_height())
    }

    /// Height of the whole block, `lines * line_spacing`.
    pub fn block_height(&self) -> i32 {
        (self.lines.len() as i32).saturating_mul(self.line_spacing())
    }

    /// Width of line `index`, measured on demand. Out-of-range lines measure as zero.
    pub fn line_width(&mut self, index: usize) -> i32 {
        match self.lines.get(index) {
            Some(line) => self.face.measure(line).width,
            None => 0,
        }
    }

    /// Borrow the face mutably alongside the lines, for drawing.
    pub fn parts_mut(&mut self) -> (&mut F, &[String]) {
        (&mut self.face, &self.lines)
    }

    /// Release the face and return the lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Pick the largest font size (stepping down from `starting_size`) at which `text` fits inside
/// 90% of `max_width x max_height`, either on one line or greedily wrapped.
///
/// `starting_size` is clamped to [`MAX_FONT_SIZE`]. Sizes whose face fails to load are skipped.
/// When no size fits, the text is wrapped at [`FLOOR_FONT_SIZE`] without any fit guarantee; the
/// only error is a failure to load that floor face.
#[tracing::instrument(skip(text, provider), fields(chars = text.chars().count()))]
pub fn fit<P: FaceProvider>(
    text: &str,
    style: FontStyle,
    provider: &P,
    max_width: u32,
    max_height: u32,
    starting_size: f32,
) -> GlyphloomResult<LayoutResult<P::Face>> {
    let limit_w = fit_limit(max_width);
    let limit_h = fit_limit(max_height);

    let start = if starting_size > MAX_FONT_SIZE {
        tracing::warn!(starting_size, max = MAX_FONT_SIZE, "clamping starting font size");
        MAX_FONT_SIZE
    } else {
        starting_size
    };
    let candidates = if start >= FLOOR_FONT_SIZE {
        ((start - FLOOR_FONT_SIZE) / FONT_SIZE_STEP).floor() as u32 + 1
    } else {
        0
    };

    for k in 0..candidates {
        let size = start - FONT_SIZE_STEP * k as f32;
        match provider.load_face(style, size) {
            Ok(mut face) => {
                let extent = face.measure(text);
                if extent.width <= limit_w && extent.height <= limit_h {
                    tracing::debug!(size, "text fits on one line");
                    return Ok(LayoutResult::new(face, vec![text.to_string()]));
                }

                let lines = wrap_words(text, limit_w, |s| face.measure(s).width);
                let spacing = line_spacing_for(face.line_height());
                let total_height = (lines.len() as i32).saturating_mul(spacing);
                if total_height <= limit_h
                    && lines.iter().all(|line| face.measure(line).width <= limit_w)
                {
                    tracing::debug!(size, lines = lines.len(), "wrapped text fits");
                    return Ok(LayoutResult::new(face, lines));
                }
                tracing::debug!(size, lines = lines.len(), total_height, "text does not fit");
            }
            Err(err) => {
                tracing::debug!(size, error = %err, "skipping font size");
            }
        }
    }

    tracing::warn!(
        size = FLOOR_FONT_SIZE,
        "no font size fits the box, falling back to floor size"
    );
    let mut face = provider.load_face(style, FLOOR_FONT_SIZE)?;
    let lines = wrap_words(text, limit_w, |s| face.measure(s).width);
    Ok(LayoutResult::new(face, lines))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
