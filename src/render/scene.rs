use crate::{
    foundation::{
        color::Color,
        error::{ShapefieldError, ShapefieldResult},
    },
    morph::{
        blend::{Appearance, appearance},
        ease::Ease,
    },
    shape::{
        form::Form,
        model::{ShapeId, ShapeSet},
    },
};

fn default_background() -> Color {
    Color::rgba(0xF0, 0xF0, 0xF0, 0xFF)
}

fn default_overlay() -> Color {
    Color::rgba(0xFF, 0xFF, 0xFF, 0x00)
}

fn default_blur() -> f64 {
    1.0
}

/// Fills drawn below and above the shapes, and the softening applied to them.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderStyle {
    #[serde(default = "default_background")]
    pub background: Color,
    /// Full-canvas wash drawn over the shapes; transparent by default.
    #[serde(default = "default_overlay")]
    pub overlay: Color,
    /// Gaussian blur standard deviation over the shape layers, in canvas units. `0` disables it.
    #[serde(default = "default_blur")]
    pub blur: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: default_background(),
            overlay: default_overlay(),
            blur: default_blur(),
        }
    }
}

impl RenderStyle {
    /// A style with the same fills and no blur.
    pub fn sharp(self) -> Self {
        Self { blur: 0.0, ..self }
    }

    pub fn validate(&self) -> ShapefieldResult<()> {
        if !(self.blur.is_finite() && self.blur >= 0.0) {
            return Err(ShapefieldError::validation(
                "style.blur must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// One drawable primitive. A cross-fading shape contributes two layers with the same id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    pub shape_id: ShapeId,
    pub form: Form,
    pub color: Color,
    /// Multiplies the color's own alpha.
    pub opacity: f64,
}

/// Flatten a shape set into layers in paint order.
///
/// Layers that would be fully transparent are dropped.
pub fn compose(set: &ShapeSet, ease: Ease) -> Vec<Layer> {
    let mut out = Vec::with_capacity(set.len());
    for shape in set {
        let mut push = |form: Form, opacity: f64| {
            if opacity > 0.0 {
                out.push(Layer {
                    shape_id: shape.id,
                    form,
                    color: shape.color,
                    opacity: opacity.min(1.0),
                });
            }
        };

        match appearance(shape, ease) {
            Appearance::Solid(form) => push(form, 1.0),
            Appearance::CrossFade {
                from,
                from_opacity,
                to,
                to_opacity,
            } => {
                push(from, from_opacity);
                push(to, to_opacity);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
