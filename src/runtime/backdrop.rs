use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::{
    config::BackdropConfig,
    foundation::{
        color::Palette,
        core::{Canvas, Millis},
        error::{ShapefieldError, ShapefieldResult},
    },
    morph::engine::MorphEngine,
    placement::generator::{PlacementRequest, generate},
    render::{
        raster::{Frame, render_frame},
        scene::{Layer, compose},
    },
    runtime::timer::{FrameDriver, IntervalTimer},
    shape::model::ShapeSet,
};

/// What one [`Backdrop::tick`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The retarget timer fired on this tick.
    pub retargeted: bool,
    /// Transitions that finished on this tick.
    pub committed: usize,
}

/// Single owner of a shape set and the schedulers that mutate it.
///
/// The three triggers (canvas/palette change, retarget timer, frame tick) all go through
/// `&mut self` and replace the set wholesale, so they are serialized by construction. A host
/// with several threads wraps the backdrop in one `Mutex`.
#[derive(Debug)]
pub struct Backdrop<R = Pcg32> {
    config: BackdropConfig,
    palette: Palette,
    canvas: Option<Canvas>,
    set: ShapeSet,
    next_generation: u32,
    engine: MorphEngine,
    retarget_timer: IntervalTimer,
    driver: FrameDriver,
    rng: R,
}

impl Backdrop<Pcg32> {
    /// Build a backdrop seeded from `config.seed`, or from the OS when unset.
    pub fn new(config: BackdropConfig) -> ShapefieldResult<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Backdrop<R> {
    pub fn with_rng(config: BackdropConfig, rng: R) -> ShapefieldResult<Self> {
        config.validate()?;
        Ok(Self {
            palette: config.palette.clone(),
            engine: MorphEngine::new(config.timing),
            retarget_timer: IntervalTimer::new(config.timing.retarget_interval_ms),
            driver: FrameDriver::default(),
            canvas: None,
            set: ShapeSet::default(),
            next_generation: 0,
            config,
            rng,
        })
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn canvas(&self) -> Option<Canvas> {
        self.canvas
    }

    pub fn shapes(&self) -> &ShapeSet {
        &self.set
    }

    pub fn engine(&self) -> &MorphEngine {
        &self.engine
    }

    /// Canvas size reported by the host. A changed size rebuilds the set.
    pub fn resize(&mut self, canvas: Canvas) -> &ShapeSet {
        if self.canvas != Some(canvas) {
            self.canvas = Some(canvas);
            self.regenerate();
        }
        &self.set
    }

    /// Swap the palette. A different palette rebuilds the set, since colors are fixed per shape.
    pub fn set_palette(&mut self, palette: Palette) -> &ShapeSet {
        if self.palette != palette {
            self.palette = palette;
            if self.canvas.is_some() {
                self.regenerate();
            }
        }
        &self.set
    }

    /// Rebuild the whole set for the current canvas. A degenerate canvas yields an empty set.
    pub fn regenerate(&mut self) -> &ShapeSet {
        let Some(canvas) = self.canvas else {
            return &self.set;
        };

        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);

        let scale = self.config.placement.scale.scale_for(canvas);
        let req = PlacementRequest::new(canvas, self.config.target_count, scale)
            .with_generation(generation);
        let shapes = generate(&req, &self.palette, &self.config.placement, &mut self.rng);

        tracing::debug!(
            generation,
            shapes = shapes.len(),
            target = self.config.target_count,
            "regenerated shape set"
        );
        self.set = ShapeSet::new(generation, shapes);
        &self.set
    }

    /// Start both schedulers at `now`. The first retarget fires one interval later.
    pub fn start(&mut self, now: Millis) {
        self.retarget_timer.start(now);
        self.driver.start();
    }

    /// Stop both schedulers. Safe to call any number of times.
    pub fn stop(&mut self) {
        self.retarget_timer.stop();
        self.driver.stop();
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn frames(&self) -> u64 {
        self.driver.frames()
    }

    /// Run both schedulers at `now`: advance every transition, then retarget when the timer is
    /// due. Does nothing while stopped.
    ///
    /// Advancing first commits transitions that ran out since the last tick, so they are counted
    /// in `committed` even when the same tick retargets them.
    pub fn tick(&mut self, now: Millis) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if !self.driver.frame(now) {
            return outcome;
        }

        let before = self.set.morphing_count();
        self.set = self.engine.advance(&self.set, now);
        outcome.committed = before - self.set.morphing_count();

        if self.retarget_timer.poll(now) {
            self.set = self.engine.retarget(&self.set, now, &mut self.rng);
            outcome.retargeted = true;
            tracing::trace!(shapes = self.set.len(), "retargeted");
        }
        outcome
    }

    /// Drawable layers of the current set.
    pub fn layers(&self) -> Vec<Layer> {
        compose(&self.set, self.config.timing.ease)
    }

    /// Rasterize the current set onto the canvas.
    pub fn render(&self) -> ShapefieldResult<Frame> {
        let Some(canvas) = self.canvas else {
            return Err(ShapefieldError::render("backdrop has no canvas"));
        };
        render_frame(canvas, &self.config.style, &self.layers())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/backdrop.rs"]
mod tests;
