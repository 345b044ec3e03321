//! Generation settings and JSON job files.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::background::BackgroundKind;
use crate::foundation::error::{GlyphloomError, GlyphloomResult};
use crate::layout::MAX_FONT_SIZE;
use crate::text::fonts::{DEFAULT_FONTS_DIR, FontStyle};

/// Default output directory for written images.
pub const DEFAULT_OUTPUT_DIR: &str = "images";

/// One generation request.
///
/// Deserializes from a JSON job file; every field is optional there and falls back to its
/// default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Largest font size tried, in points.
    pub font_size: f32,
    /// Background generator.
    pub background: BackgroundKind,
    /// Font style key.
    pub font_style: FontStyle,
    /// Cut the text out of a white field instead of drawing it over the background.
    pub reveal: bool,
    /// Produce a looping GIF instead of a single PNG.
    pub animate: bool,
    /// Directory output files are written to.
    pub output_dir: PathBuf,
    /// Directory holding the font files.
    pub fonts_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 300,
            font_size: 48.0,
            background: BackgroundKind::default(),
            font_style: FontStyle::default(),
            reveal: false,
            animate: false,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fonts_dir: PathBuf::from(DEFAULT_FONTS_DIR),
        }
    }
}

impl RenderConfig {
    /// Load a JSON job file.
    pub fn from_path(path: impl AsRef<Path>) -> GlyphloomResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read config file '{}'", path.display()))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            GlyphloomError::validation(format!("invalid config file '{}': {e}", path.display()))
        })
    }

    /// Reject dimensions and font sizes the generator cannot work with.
    pub fn validate(&self) -> GlyphloomResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GlyphloomError::validation(
                "width and height must be positive",
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(GlyphloomError::validation("font size must be positive"));
        }
        if self.font_size > MAX_FONT_SIZE {
            return Err(GlyphloomError::validation(format!(
                "font size must be at most {MAX_FONT_SIZE}, got {}",
                self.font_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
