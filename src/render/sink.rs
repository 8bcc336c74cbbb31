use std::path::PathBuf;

use crate::{
    foundation::{
        core::Millis,
        error::{ShapefieldError, ShapefieldResult},
    },
    render::raster::Frame,
};

/// Configuration handed to a [`RenderSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
}

/// Consumer of rendered frames.
///
/// `push_frame` is called with strictly increasing `at` values between one `begin` and `end`.
pub trait RenderSink {
    fn begin(&mut self, cfg: SinkConfig) -> ShapefieldResult<()>;
    fn push_frame(&mut self, at: Millis, frame: &Frame) -> ShapefieldResult<()>;
    fn end(&mut self) -> ShapefieldResult<()>;
}

/// Keeps every frame in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(Millis, Frame)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[(Millis, Frame)] {
        &self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl RenderSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ShapefieldResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, at: Millis, frame: &Frame) -> ShapefieldResult<()> {
        self.frames.push((at, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> ShapefieldResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Writes `frame_00000.png`, `frame_00001.png`, ... into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
    next_index: u32,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
            next_index: 0,
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl RenderSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> ShapefieldResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            ShapefieldError::render(format!(
                "create output dir '{}': {e}",
                self.dir.display()
            ))
        })?;
        self.cfg = Some(cfg);
        self.next_index = 0;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, _at: Millis, frame: &Frame) -> ShapefieldResult<()> {
        let Some(cfg) = self.cfg else {
            return Err(ShapefieldError::render("push_frame called before begin"));
        };
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(ShapefieldError::render(format!(
                "frame is {}x{}, sink expects {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }

        let path = self.dir.join(format!("frame_{:05}.png", self.next_index));
        image::save_buffer_with_format(
            &path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| ShapefieldError::render(format!("write png '{}': {e}", path.display())))?;

        self.next_index += 1;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> ShapefieldResult<()> {
        tracing::debug!(
            frames = self.written.len(),
            dir = %self.dir.display(),
            "png sequence complete"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
