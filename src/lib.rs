//! Shapefield generates decorative backgrounds made of soft geometric shapes.
//!
//! Two engines do the work:
//!
//! - the placement generator scatters a bounded number of randomly typed, randomly colored shapes
//!   over a canvas by rejection sampling, so that no two overlap beyond a signed padding;
//! - the morph engine periodically retargets every shape to another kind and interpolates (or
//!   cross-fades) toward it over a fixed duration.
//!
//! A [`Backdrop`] owns one shape set and drives both engines from clock values supplied by the
//! host. Frames can be rendered to SVG, to RGBA pixels, or streamed into a [`RenderSink`].
#![forbid(unsafe_code)]

mod foundation;

pub mod config;
pub mod morph;
pub mod placement;
pub mod render;
pub mod runtime;
pub mod shape;

pub use crate::foundation::color::{Color, Palette};
pub use crate::foundation::core::{BezPath, Canvas, Lerp, Millis, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{ShapefieldError, ShapefieldResult};

pub use crate::config::BackdropConfig;
pub use crate::morph::{
    blend::{Appearance, appearance, crossfade_opacities},
    ease::Ease,
    engine::{MorphEngine, pick_other_kind},
    timing::MorphTiming,
};
pub use crate::placement::{
    collision::{collides_with_any, padded_overlap},
    config::{PlacementConfig, ScaleRule, scale_for_canvas},
    generator::{PlacementRequest, generate},
};
pub use crate::render::{
    MAX_SEQUENCE_FRAMES, SequenceOpts,
    raster::{Frame, rasterize_svg, render_frame},
    render_sequence,
    scene::{Layer, RenderStyle, compose},
    sink::{InMemorySink, PngSequenceSink, RenderSink, SinkConfig},
    svg::to_svg,
};
pub use crate::runtime::{
    backdrop::{Backdrop, TickOutcome},
    timer::{FrameDriver, IntervalTimer},
};
pub use crate::shape::{
    form::{Corners, Form, Stretch},
    kind::{Family, ShapeKind},
    model::{MorphState, Shape, ShapeId, ShapeSet},
};
