//! Adaptive font sizing and line wrapping.

mod fit;
mod wrap;

pub use fit::{
    FLOOR_FONT_SIZE, FONT_SIZE_STEP, LINE_SPACING_PERCENT, LayoutResult, MAX_FONT_SIZE, fit,
    fit_limit, line_spacing_for,
};
pub use wrap::wrap_words;
