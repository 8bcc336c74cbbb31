pub use kurbo::{BezPath, Point, Rect, Size, Vec2};

/// A point on the host clock, in milliseconds.
///
/// The crate never reads a wall clock itself; callers inject `now` into every time-dependent
/// operation, which keeps scheduling deterministic under test.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize,
)]
pub struct Millis(pub f64);

impl Millis {
    /// The clock origin.
    pub const ZERO: Self = Self(0.0);

    /// Milliseconds elapsed since `earlier`, floored at zero.
    pub fn since(self, earlier: Millis) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }

    /// This instant shifted by `ms` milliseconds.
    pub fn offset(self, ms: f64) -> Self {
        Self(self.0 + ms)
    }
}

/// Drawable area reported by the host, in device-independent units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
}

impl Canvas {
    /// Build a canvas from its dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A canvas with no usable area. Hosts report this before their first layout pass.
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0
    }

    /// The canvas as a rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Pixel dimensions for rasterization, rounded up and at least one pixel per axis.
    pub fn pixel_size(self) -> (u32, u32) {
        fn px(v: f64) -> u32 {
            if v.is_finite() {
                v.ceil().clamp(1.0, f64::from(u32::MAX)) as u32
            } else {
                1
            }
        }
        (px(self.width), px(self.height))
    }
}

/// Linear interpolation for values kurbo does not interpolate itself.
pub trait Lerp: Sized {
    /// Value at `t` along `a -> b`; `t = 0` yields `a`, `t = 1` yields `b`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + t * (b - a)
    }
}

impl Lerp for Rect {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Rect::new(
            f64::lerp(&a.x0, &b.x0, t),
            f64::lerp(&a.y0, &b.y0, t),
            f64::lerp(&a.x1, &b.x1, t),
            f64::lerp(&a.y1, &b.y1, t),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
