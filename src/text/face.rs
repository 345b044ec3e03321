use crate::foundation::core::{PixelBuffer, Rgba8};
use crate::foundation::error::GlyphloomResult;
use crate::text::fonts::FontStyle;

/// Pixel extent of a measured string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextExtent {
    /// Horizontal extent in whole pixels.
    pub width: i32,
    /// Vertical extent in whole pixels.
    pub height: i32,
}

/// A font loaded at one fixed size, able to measure and draw text.
///
/// Faces are request-scoped: they are created by a [`FaceProvider`], owned by whoever holds the
/// layout result, and released when dropped.
pub trait FontFace {
    /// Size in points (72 DPI, so points equal pixels).
    fn size(&self) -> f32;

    /// Distance from the baseline to the top of the line box, in pixels.
    fn ascent(&self) -> f32;

    /// Distance from the baseline to the bottom of the line box, in pixels.
    fn descent(&self) -> f32;

    /// Measure `text` as a single line.
    fn measure(&mut self, text: &str) -> TextExtent;

    /// Horizontal pen advance after drawing `ch`, in whole pixels.
    fn advance(&mut self, ch: char) -> i32;

    /// Draw `text` with its pen origin at `(x, baseline)`, blending over `target`.
    fn draw(&mut self, target: &mut PixelBuffer, text: &str, x: i32, baseline: i32, color: Rgba8);

    /// Ascent rounded up to whole pixels.
    fn ascent_px(&self) -> i32 {
        self.ascent().ceil() as i32
    }

    /// `ceil(ascent + descent)`.
    fn line_height(&self) -> i32 {
        (self.ascent() + self.descent()).ceil() as i32
    }
}

/// Source of [`FontFace`] values for a style at a requested size.
pub trait FaceProvider {
    /// Concrete face type produced by this provider.
    type Face: FontFace;

    /// Load `style` at `size` points.
    ///
    /// Fails with [`GlyphloomError::AssetLoad`](crate::GlyphloomError::AssetLoad) when the font
    /// bytes cannot be read or parsed, or
    /// [`GlyphloomError::FaceCreation`](crate::GlyphloomError::FaceCreation) when the size is
    /// rejected.
    fn load_face(&self, style: FontStyle, size: f32) -> GlyphloomResult<Self::Face>;
}

impl<P: FaceProvider + ?Sized> FaceProvider for &P {
    type Face = P::Face;

    fn load_face(&self, style: FontStyle, size: f32) -> GlyphloomResult<Self::Face> {
        (**self).load_face(style, size)
    }
}
