use rand::Rng;

use crate::{
    foundation::{
        color::Palette,
        core::{Canvas, Rect},
    },
    placement::{collision::collides_with_any, config::PlacementConfig},
    shape::{
        form::Stretch,
        kind::ShapeKind,
        model::{Shape, ShapeId},
    },
};

/// Inputs of one generation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRequest {
    pub canvas: Canvas,
    pub target_count: usize,
    /// Multiplier applied to the nominal footprint.
    pub scale: f64,
    /// Stamped into every [`ShapeId`] of the pass.
    pub generation: u32,
}

impl PlacementRequest {
    pub fn new(canvas: Canvas, target_count: usize, scale: f64) -> Self {
        Self {
            canvas,
            target_count,
            scale,
            generation: 0,
        }
    }

    pub fn with_generation(mut self, generation: u32) -> Self {
        self.generation = generation;
        self
    }
}

/// Place up to `req.target_count` shapes by bounded rejection sampling.
///
/// Each attempt draws a kind, a palette color and a stretch uniformly, then a whole-unit
/// top-left corner uniformly among positions that keep the box inside the canvas. Candidates
/// colliding with an accepted shape under `config.padding` are dropped. The pass ends at the
/// target count or after `config.max_attempts` attempts, so a short result is normal on dense
/// or small canvases. Degenerate canvases and footprints that cannot fit yield an empty list.
///
/// All randomness comes from `rng`; a seeded source reproduces the same shapes.
#[tracing::instrument(level = "debug", skip(palette, config, rng))]
pub fn generate<R: Rng>(
    req: &PlacementRequest,
    palette: &Palette,
    config: &PlacementConfig,
    rng: &mut R,
) -> Vec<Shape> {
    if req.canvas.is_degenerate() || req.target_count == 0 {
        return Vec::new();
    }

    let size = config.footprint(req.scale);
    let span_x = req.canvas.width - size.width;
    let span_y = req.canvas.height - size.height;
    if !(size.width > 0.0 && size.height > 0.0 && span_x > 0.0 && span_y > 0.0) {
        tracing::debug!(
            width = size.width,
            height = size.height,
            "footprint does not fit the canvas"
        );
        return Vec::new();
    }

    let mut accepted: Vec<Shape> = Vec::with_capacity(req.target_count);
    let mut attempts = 0u32;
    while accepted.len() < req.target_count && attempts < config.max_attempts {
        attempts += 1;

        let kind = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
        let color = palette.get(rng.random_range(0..palette.len()));
        let stretch = if rng.random_bool(0.5) {
            Stretch::Wide
        } else {
            Stretch::Tall
        };
        let left = rng.random_range(0.0..span_x).floor();
        let top = rng.random_range(0.0..span_y).floor();
        let bounds = Rect::new(left, top, left + size.width, top + size.height);

        if collides_with_any(bounds, &accepted, config.padding) {
            continue;
        }

        accepted.push(Shape {
            id: ShapeId {
                generation: req.generation,
                attempt: attempts,
            },
            kind,
            bounds,
            color,
            stretch,
            morph: None,
        });
    }

    if accepted.len() < req.target_count {
        tracing::debug!(
            accepted = accepted.len(),
            target = req.target_count,
            attempts,
            "placement attempts exhausted before reaching target"
        );
    } else {
        tracing::debug!(accepted = accepted.len(), attempts, "placement complete");
    }

    accepted
}

#[cfg(test)]
#[path = "../../tests/unit/placement/generator.rs"]
mod tests;
