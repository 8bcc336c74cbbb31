use crate::foundation::{
    core::{Canvas, Size},
    error::{ShapefieldError, ShapefieldResult},
};

/// Nominal shape footprint at scale 1.0.
pub const NOMINAL_WIDTH: f64 = 235.79;
pub const NOMINAL_HEIGHT: f64 = 324.64;

fn default_max_attempts() -> u32 {
    2000
}

fn default_padding() -> f64 {
    10.0
}

fn default_nominal_width() -> f64 {
    NOMINAL_WIDTH
}

fn default_nominal_height() -> f64 {
    NOMINAL_HEIGHT
}

/// Tunables of the rejection sampler.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacementConfig {
    /// Attempt ceiling per generation pass.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Signed margin between bounding boxes. Positive enforces a gap, negative allows overlap.
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_nominal_width")]
    pub nominal_width: f64,
    #[serde(default = "default_nominal_height")]
    pub nominal_height: f64,
    #[serde(default)]
    pub scale: ScaleRule,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            padding: default_padding(),
            nominal_width: NOMINAL_WIDTH,
            nominal_height: NOMINAL_HEIGHT,
            scale: ScaleRule::default(),
        }
    }
}

impl PlacementConfig {
    pub fn validate(&self) -> ShapefieldResult<()> {
        if !self.padding.is_finite() {
            return Err(ShapefieldError::validation("placement.padding must be finite"));
        }
        if !(self.nominal_width.is_finite() && self.nominal_width > 0.0)
            || !(self.nominal_height.is_finite() && self.nominal_height > 0.0)
        {
            return Err(ShapefieldError::validation(
                "placement nominal footprint must be finite and > 0",
            ));
        }
        self.scale.validate()
    }

    /// Footprint of every shape at `scale`.
    pub fn footprint(&self, scale: f64) -> Size {
        Size::new(self.nominal_width * scale, self.nominal_height * scale)
    }
}

/// How the footprint scale follows the canvas size:
/// `clamp(base * min(w / reference_width, h / reference_height), min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScaleRule {
    pub reference_width: f64,
    pub reference_height: f64,
    pub base: f64,
    /// Floor that keeps shapes visible on very small canvases.
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleRule {
    fn default() -> Self {
        Self {
            reference_width: 1920.0,
            reference_height: 1080.0,
            base: 0.12,
            min: 0.12,
            max: 1.0,
        }
    }
}

impl ScaleRule {
    pub fn validate(&self) -> ShapefieldResult<()> {
        let all_positive = [
            self.reference_width,
            self.reference_height,
            self.base,
            self.min,
            self.max,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0);
        if !all_positive {
            return Err(ShapefieldError::validation(
                "scale rule values must be finite and > 0",
            ));
        }
        if self.min > self.max {
            return Err(ShapefieldError::validation("scale.min must be <= scale.max"));
        }
        Ok(())
    }

    /// Scale factor for `canvas`. Degenerate canvases get the floor.
    pub fn scale_for(&self, canvas: Canvas) -> f64 {
        if canvas.is_degenerate() {
            return self.min;
        }
        let fit = (canvas.width / self.reference_width).min(canvas.height / self.reference_height);
        (self.base * fit).clamp(self.min, self.max)
    }
}

/// Scale factor the placement footprint takes on `canvas` under `rule`.
pub fn scale_for_canvas(canvas: Canvas, rule: &ScaleRule) -> f64 {
    rule.scale_for(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/placement/config.rs"]
mod tests;
