use rand::Rng;

use crate::{
    foundation::core::Millis,
    morph::{blend::appearance, timing::MorphTiming},
    shape::{
        form::Stretch,
        kind::ShapeKind,
        model::{MorphState, Shape, ShapeSet},
    },
};

/// State transitions of the morph lifecycle.
///
/// Both steps are pure: they read a set and `now` and return the successor set. Shape count,
/// ids, bounds and colors never change; only `kind`, `stretch` and `morph` do.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MorphEngine {
    pub timing: MorphTiming,
}

impl MorphEngine {
    pub fn new(timing: MorphTiming) -> Self {
        Self { timing }
    }

    /// Point every shape at a new kind, starting a transition at `now`.
    ///
    /// A shape caught mid-transition restarts from what it currently shows; a transition that
    /// has already run its full duration is committed first.
    #[tracing::instrument(level = "trace", skip(self, set, rng), fields(shapes = set.len()))]
    pub fn retarget<R: Rng>(&self, set: &ShapeSet, now: Millis, rng: &mut R) -> ShapeSet {
        set.map(|shape| {
            let shape = self.step(shape, now);
            let origin = shape
                .morph
                .is_some()
                .then(|| appearance(&shape, self.timing.ease).dominant());

            let target = pick_other_kind(shape.kind, rng);
            let stretch = if rng.random_bool(0.5) {
                Stretch::Wide
            } else {
                Stretch::Tall
            };

            Shape {
                morph: Some(MorphState {
                    target,
                    progress: 0.0,
                    started_at: now,
                    stretch,
                    origin,
                }),
                ..shape
            }
        })
    }

    /// Frame step: refresh progress of every in-flight transition and commit finished ones.
    pub fn advance(&self, set: &ShapeSet, now: Millis) -> ShapeSet {
        set.map(|shape| self.step(shape, now))
    }

    fn step(&self, shape: &Shape, now: Millis) -> Shape {
        let Some(morph) = shape.morph else {
            return shape.clone();
        };

        let progress = morph.progress_at(now, self.timing.duration_ms);
        if progress >= 1.0 {
            Shape {
                kind: morph.target,
                stretch: morph.stretch,
                morph: None,
                ..shape.clone()
            }
        } else {
            Shape {
                morph: Some(MorphState { progress, ..morph }),
                ..shape.clone()
            }
        }
    }
}

/// Uniform pick among all kinds except `current`.
pub fn pick_other_kind<R: Rng>(current: ShapeKind, rng: &mut R) -> ShapeKind {
    let others = ShapeKind::ALL.len() - 1;
    let i = rng.random_range(0..others);
    ShapeKind::ALL
        .into_iter()
        .filter(|k| *k != current)
        .nth(i)
        .unwrap_or(current)
}

#[cfg(test)]
#[path = "../../tests/unit/morph/engine.rs"]
mod tests;
