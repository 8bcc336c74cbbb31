use crate::{
    foundation::{
        color::Palette,
        error::{ShapefieldError, ShapefieldResult},
    },
    morph::timing::MorphTiming,
    placement::config::PlacementConfig,
    render::scene::RenderStyle,
};

fn default_target_count() -> usize {
    19
}

/// Everything a [`crate::Backdrop`] needs besides the canvas size.
///
/// Loaded from JSON; every field is optional:
///
/// ```json
/// {
///   "palette": ["#E8E6D9", "#CEDFE6"],
///   "target_count": 19,
///   "placement": { "padding": -15 },
///   "timing": { "retarget_interval_ms": 2000, "duration_ms": 1000, "ease": "linear" },
///   "seed": 7
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BackdropConfig {
    #[serde(default)]
    pub palette: Palette,
    #[serde(default = "default_target_count")]
    pub target_count: usize,
    #[serde(default)]
    pub placement: PlacementConfig,
    #[serde(default)]
    pub timing: MorphTiming,
    #[serde(default)]
    pub style: RenderStyle,
    /// Seed of the random source; `None` seeds from the OS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            target_count: default_target_count(),
            placement: PlacementConfig::default(),
            timing: MorphTiming::default(),
            style: RenderStyle::default(),
            seed: None,
        }
    }
}

impl BackdropConfig {
    pub fn from_json(s: &str) -> ShapefieldResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| ShapefieldError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ShapefieldResult<()> {
        if self.palette.is_empty() {
            return Err(ShapefieldError::validation(
                "palette must contain at least one color",
            ));
        }
        self.placement.validate()?;
        self.timing.validate()?;
        self.style.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
