//! Shared primitives: pixel buffers, colors, the palette, math helpers and errors.

/// Colors and pixel buffers.
pub mod core;
/// Error taxonomy.
pub mod error;
pub(crate) mod math;
/// The fixed color palette.
pub mod palette;
