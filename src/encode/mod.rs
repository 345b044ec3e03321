//! Output encoding: PNG stills, looping GIFs, frame sinks and output file naming.

/// Output file naming.
pub mod filename;
/// Looping GIF encoding.
pub mod gif;
/// PNG encoding.
pub mod png;
/// Frame sinks.
pub mod sink;

pub use filename::{output_path, sanitize_filename};
pub use gif::{GIF_FRAME_DELAY_CS, encode_gif, write_gif};
pub use png::write_png;
pub use sink::{FrameSink, GifSink, InMemorySink, PngSink, SinkConfig};
