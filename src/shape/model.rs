use std::fmt;

use crate::{
    foundation::{
        color::Color,
        core::{Millis, Rect},
    },
    shape::{
        form::{Form, Stretch},
        kind::ShapeKind,
    },
};

/// Stable shape identifier: the generation pass that created the shape and the placement
/// attempt that produced it. Unique within one backdrop since generations only increase.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct ShapeId {
    pub generation: u32,
    pub attempt: u32,
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape-{}-{}", self.generation, self.attempt)
    }
}

/// In-flight transition toward `target`. Present on a shape only while morphing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphState {
    pub target: ShapeKind,
    pub progress: f64, // 0..=1
    pub started_at: Millis,
    /// Rectangle bias direction for this transition, committed with the kind.
    pub stretch: Stretch,
    /// Start form when a retarget interrupted an earlier transition; `None` starts from the
    /// at-rest form of the current kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Form>,
}

impl MorphState {
    /// Progress at `now` for a transition lasting `duration_ms`; clamped to `0..=1`.
    pub fn progress_at(&self, now: Millis, duration_ms: f64) -> f64 {
        if duration_ms <= 0.0 {
            return 1.0;
        }
        (now.since(self.started_at) / duration_ms).min(1.0)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub bounds: Rect,
    pub color: Color,
    #[serde(default)]
    pub stretch: Stretch,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morph: Option<MorphState>,
}

impl Shape {
    pub fn is_morphing(&self) -> bool {
        self.morph.is_some()
    }

    /// Form drawn when no transition is in flight.
    pub fn rest_form(&self) -> Form {
        Form::derive(self.kind, self.bounds, self.stretch)
    }

    /// Start and end forms of the in-flight transition.
    pub fn morph_forms(&self) -> Option<(Form, Form)> {
        let m = self.morph.as_ref()?;
        let from = m.origin.unwrap_or_else(|| self.rest_form());
        let to = Form::derive(m.target, self.bounds, m.stretch);
        Some((from, to))
    }
}

/// The full shape collection produced by one generation pass.
///
/// Sets are replaced wholesale: regeneration builds a new set, and the morph steps map an
/// existing set into its successor. Shapes are never added or removed individually.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeSet {
    pub generation: u32,
    pub shapes: Vec<Shape>,
}

impl ShapeSet {
    pub fn new(generation: u32, shapes: Vec<Shape>) -> Self {
        Self { generation, shapes }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Successor set built by deriving each shape's next record.
    pub fn map(&self, f: impl FnMut(&Shape) -> Shape) -> Self {
        Self {
            generation: self.generation,
            shapes: self.shapes.iter().map(f).collect(),
        }
    }

    pub fn morphing_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.is_morphing()).count()
    }
}

impl<'a> IntoIterator for &'a ShapeSet {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/model.rs"]
mod tests;
