use crate::{morph::ease::Ease, shape::form::Form, shape::model::Shape};

/// How a shape looks at its current progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Appearance {
    /// One form at full opacity: a shape at rest, or a same-family parameter blend.
    Solid(Form),
    /// Both forms drawn on top of each other.
    CrossFade {
        from: Form,
        from_opacity: f64,
        to: Form,
        to_opacity: f64,
    },
}

impl Appearance {
    /// The form that reads as "the" shape right now. A cross-fade hands over once the incoming
    /// form is at least as opaque as the outgoing one.
    pub fn dominant(&self) -> Form {
        match *self {
            Self::Solid(form) => form,
            Self::CrossFade {
                from,
                from_opacity,
                to,
                to_opacity,
            } => {
                if to_opacity >= from_opacity {
                    to
                } else {
                    from
                }
            }
        }
    }
}

/// Opacities `(from, to)` of a cross-fade at eased progress `t`.
///
/// The outgoing form is gone by the midpoint and the incoming one is fully opaque from the
/// midpoint on; the second half of the transition shows only the target.
pub fn crossfade_opacities(t: f64) -> (f64, f64) {
    ((1.0 - 2.0 * t).clamp(0.0, 1.0), (2.0 * t).clamp(0.0, 1.0))
}

pub fn appearance(shape: &Shape, ease: Ease) -> Appearance {
    let (Some(morph), Some((from, to))) = (shape.morph.as_ref(), shape.morph_forms()) else {
        return Appearance::Solid(shape.rest_form());
    };

    let t = ease.apply(morph.progress);
    match Form::interpolate(&from, &to, t) {
        Some(form) => Appearance::Solid(form),
        None => {
            let (from_opacity, to_opacity) = crossfade_opacities(t);
            Appearance::CrossFade {
                from,
                from_opacity,
                to,
                to_opacity,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/blend.rs"]
mod tests;
