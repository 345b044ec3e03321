//! Font styles, font loading and the face abstraction the layout engine and compositor draw
//! through.
//!
//! [`FontFace`] is the only thing the rest of the crate knows about fonts. [`FontLibrary`]
//! reads `.ttf` files from disk and produces [`ParleyFace`] values (Parley for shaping and
//! metrics, `vello_cpu` for rasterizing glyphs).

/// The face abstraction.
pub mod face;
/// Font style table and the on-disk font library.
pub mod fonts;
/// Parley/vello_cpu backed faces.
pub mod parley_face;

pub use face::{FaceProvider, FontFace, TextExtent};
pub use fonts::{DEFAULT_FONTS_DIR, FontLibrary, FontStyle};
pub use parley_face::ParleyFace;
