use crate::{foundation::core::Rect, shape::model::Shape};

/// Whether two bounding boxes collide under a signed `padding`.
///
/// Boxes are clear of each other only when, on some axis, one box ends more than `padding`
/// units before the other begins. A gap of exactly `padding` still collides.
pub fn padded_overlap(a: Rect, b: Rect, padding: f64) -> bool {
    !(a.x1 + padding < b.x0
        || b.x1 + padding < a.x0
        || a.y1 + padding < b.y0
        || b.y1 + padding < a.y0)
}

pub fn collides_with_any(candidate: Rect, accepted: &[Shape], padding: f64) -> bool {
    accepted
        .iter()
        .any(|s| padded_overlap(candidate, s.bounds, padding))
}

#[cfg(test)]
#[path = "../../tests/unit/placement/collision.rs"]
mod tests;
