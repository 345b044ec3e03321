use std::path::{Path, PathBuf};

use crate::encode::gif::write_gif;
use crate::encode::png::write_png;
use crate::foundation::core::PixelBuffer;
use crate::foundation::error::{GlyphloomError, GlyphloomResult};
use crate::foundation::palette::Palette;

/// Configuration provided to a [`FrameSink`] before any frame is pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Number of frames that will be pushed.
    pub frame_count: usize,
    /// Display time per frame in centiseconds (ignored by still-image sinks).
    pub frame_delay_cs: u16,
}

/// Sink contract for consuming generated frames in display order.
///
/// `push_frame` is called with indices `0..frame_count` in increasing order.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> GlyphloomResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: usize, frame: &PixelBuffer) -> GlyphloomResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> GlyphloomResult<()>;
}

fn check_frame(cfg: Option<&SinkConfig>, frame: &PixelBuffer) -> GlyphloomResult<()> {
    let cfg = cfg.ok_or_else(|| GlyphloomError::encode("push_frame called before begin"))?;
    if (frame.width(), frame.height()) != (cfg.width, cfg.height) {
        return Err(GlyphloomError::encode(format!(
            "frame is {}x{}, sink expects {}x{}",
            frame.width(),
            frame.height(),
            cfg.width,
            cfg.height
        )));
    }
    Ok(())
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(usize, PixelBuffer)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(usize, PixelBuffer)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> GlyphloomResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: usize, frame: &PixelBuffer) -> GlyphloomResult<()> {
        check_frame(self.cfg.as_ref(), frame)?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> GlyphloomResult<()> {
        Ok(())
    }
}

/// Writes a single frame as a PNG file.
#[derive(Debug)]
pub struct PngSink {
    path: PathBuf,
    cfg: Option<SinkConfig>,
    written: bool,
}

impl PngSink {
    /// Sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cfg: None,
            written: false,
        }
    }

    /// Destination file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameSink for PngSink {
    fn begin(&mut self, cfg: SinkConfig) -> GlyphloomResult<()> {
        if cfg.frame_count != 1 {
            return Err(GlyphloomError::encode(format!(
                "png sink writes exactly one frame, got {}",
                cfg.frame_count
            )));
        }
        self.cfg = Some(cfg);
        self.written = false;
        Ok(())
    }

    fn push_frame(&mut self, _idx: usize, frame: &PixelBuffer) -> GlyphloomResult<()> {
        check_frame(self.cfg.as_ref(), frame)?;
        if self.written {
            return Err(GlyphloomError::encode("png sink already received its frame"));
        }
        write_png(frame, &self.path)?;
        self.written = true;
        Ok(())
    }

    fn end(&mut self) -> GlyphloomResult<()> {
        if !self.written {
            return Err(GlyphloomError::encode("png sink finished without a frame"));
        }
        Ok(())
    }
}

/// Collects frames and writes them as a looping, palette-quantized GIF on `end`.
#[derive(Debug)]
pub struct GifSink {
    path: PathBuf,
    palette: Palette,
    cfg: Option<SinkConfig>,
    frames: Vec<PixelBuffer>,
}

impl GifSink {
    /// Sink writing to `path`, quantizing every frame to `palette`.
    pub fn new(path: impl Into<PathBuf>, palette: Palette) -> Self {
        Self {
            path: path.into(),
            palette,
            cfg: None,
            frames: Vec::new(),
        }
    }

    /// Destination file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> GlyphloomResult<()> {
        self.frames = Vec::with_capacity(cfg.frame_count);
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, _idx: usize, frame: &PixelBuffer) -> GlyphloomResult<()> {
        check_frame(self.cfg.as_ref(), frame)?;
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> GlyphloomResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| GlyphloomError::encode("end called before begin"))?;
        write_gif(&self.frames, &self.palette, cfg.frame_delay_cs, &self.path)?;
        self.frames.clear();
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
