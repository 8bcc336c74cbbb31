//! Turning shape sets into pictures: layers, SVG, RGBA frames and frame sinks.

pub mod raster;
pub mod scene;
pub mod sink;
pub mod svg;

use crate::{
    foundation::{
        core::Millis,
        error::{ShapefieldError, ShapefieldResult},
    },
    render::sink::{RenderSink, SinkConfig},
    runtime::backdrop::Backdrop,
};

/// Upper bound on the frames one [`render_sequence`] call may produce.
pub const MAX_SEQUENCE_FRAMES: usize = 1_000_000;

/// Options for [`render_sequence`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceOpts {
    pub fps: f64,
    /// Simulated clock value of the first frame.
    pub start: Millis,
    pub duration_ms: f64,
}

/// Drive `backdrop` over simulated time and push one frame per tick into `sink`.
///
/// The backdrop must already have a canvas. It is started at `opts.start` and stopped at the end.
pub fn render_sequence<R: rand::Rng>(
    backdrop: &mut Backdrop<R>,
    opts: SequenceOpts,
    sink: &mut dyn RenderSink,
) -> ShapefieldResult<usize> {
    if !(opts.fps.is_finite() && opts.fps > 0.0) {
        return Err(ShapefieldError::validation("fps must be finite and > 0"));
    }
    if !(opts.duration_ms.is_finite() && opts.duration_ms >= 0.0) {
        return Err(ShapefieldError::validation(
            "duration_ms must be finite and >= 0",
        ));
    }
    let Some(canvas) = backdrop.canvas() else {
        return Err(ShapefieldError::validation(
            "backdrop has no canvas; call resize first",
        ));
    };

    let (width, height) = canvas.pixel_size();
    let step_ms = 1000.0 / opts.fps;
    let frames = (opts.duration_ms / step_ms).floor() + 1.0;
    if !(frames.is_finite() && frames <= MAX_SEQUENCE_FRAMES as f64) {
        return Err(ShapefieldError::validation(format!(
            "sequence of {frames} frames exceeds the limit of {MAX_SEQUENCE_FRAMES}"
        )));
    }
    let count = frames as usize;

    sink.begin(SinkConfig {
        width,
        height,
        fps: opts.fps,
    })?;
    backdrop.start(opts.start);

    for i in 0..count {
        let now = opts.start.offset(i as f64 * step_ms);
        backdrop.tick(now);
        let frame = backdrop.render()?;
        sink.push_frame(now, &frame)?;
    }

    backdrop.stop();
    sink.end()?;
    tracing::debug!(frames = count, fps = opts.fps, "rendered sequence");
    Ok(count)
}
