use crate::{
    foundation::error::{ShapefieldError, ShapefieldResult},
    morph::ease::Ease,
};

fn default_retarget_interval_ms() -> f64 {
    2000.0
}

fn default_duration_ms() -> f64 {
    1000.0
}

/// Cadence of the two morph schedulers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphTiming {
    /// Period of the retarget timer.
    #[serde(default = "default_retarget_interval_ms")]
    pub retarget_interval_ms: f64,
    /// Length of one transition.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    #[serde(default)]
    pub ease: Ease,
}

impl Default for MorphTiming {
    fn default() -> Self {
        Self {
            retarget_interval_ms: default_retarget_interval_ms(),
            duration_ms: default_duration_ms(),
            ease: Ease::Linear,
        }
    }
}

impl MorphTiming {
    pub fn validate(&self) -> ShapefieldResult<()> {
        if !(self.retarget_interval_ms.is_finite() && self.retarget_interval_ms > 0.0) {
            return Err(ShapefieldError::validation(
                "timing.retarget_interval_ms must be finite and > 0",
            ));
        }
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return Err(ShapefieldError::validation(
                "timing.duration_ms must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/timing.rs"]
mod tests;
