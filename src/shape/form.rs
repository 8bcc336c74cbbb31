use kurbo::Shape as _;

use crate::{
    foundation::core::{BezPath, Lerp, Point, Rect, Vec2},
    shape::kind::{Family, ShapeKind},
};

/// Aspect ratio applied (area-preserving) to wide and tall ellipses.
pub const ELLIPSE_STRETCH: f64 = 1.6;
/// Width/height bias of the rectangle derivation.
pub const RECT_BIAS: f64 = 1.25;
/// Rounded-rectangle corner radius relative to the shorter box side (20 units on the nominal
/// 235.79 wide footprint).
pub const ROUNDED_CORNER_RATIO: f64 = 20.0 / 235.79;

const KAPPA: f64 = 0.552_284_749_830_793_6;
const PATH_TOLERANCE: f64 = 0.1;

/// Which way the rectangle derivation leans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stretch {
    #[default]
    Wide,
    Tall,
}

/// Corners that a contour form rounds with an elliptical arc of half the box extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Corners {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_right: bool,
    pub bottom_left: bool,
}

impl Corners {
    const fn new(top_left: bool, top_right: bool, bottom_right: bool, bottom_left: bool) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }
}

/// Concrete primitive a shape kind derives from its bounding box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Form {
    Ellipse { center: Point, radii: Vec2 },
    Rect { rect: Rect, corner_radius: f64 },
    Contour { rect: Rect, corners: Corners },
}

impl Form {
    /// Derive the form of `kind` inside `bounds`. All forms share the box center.
    pub fn derive(kind: ShapeKind, bounds: Rect, stretch: Stretch) -> Self {
        let center = bounds.center();
        let (w, h) = (bounds.width(), bounds.height());
        // Diameter of the circle with the same area as the box's inscribed ellipse.
        let d = (w * h).sqrt();

        let ellipse = |rx: f64, ry: f64| Form::Ellipse {
            center,
            radii: Vec2::new(rx, ry),
        };
        let rect = |rw: f64, rh: f64, corner_radius: f64| Form::Rect {
            rect: Rect::from_center_size(center, (rw, rh)),
            corner_radius,
        };
        let contour = |corners: Corners| Form::Contour {
            rect: bounds,
            corners,
        };

        match kind {
            ShapeKind::Circle => ellipse(d / 2.0, d / 2.0),
            ShapeKind::Ellipse => ellipse(w / 2.0, h / 2.0),
            ShapeKind::WideEllipse => {
                let k = ELLIPSE_STRETCH.sqrt();
                ellipse(d / 2.0 * k, d / 2.0 / k)
            }
            ShapeKind::TallEllipse => {
                let k = ELLIPSE_STRETCH.sqrt();
                ellipse(d / 2.0 / k, d / 2.0 * k)
            }
            ShapeKind::Rectangle => match stretch {
                Stretch::Wide => rect(w * RECT_BIAS, h / RECT_BIAS, 0.0),
                Stretch::Tall => rect(w / RECT_BIAS, h * RECT_BIAS, 0.0),
            },
            ShapeKind::RoundedRectangle => rect(w, h, w.min(h) * ROUNDED_CORNER_RATIO),
            ShapeKind::Square => {
                let side = (w + h) / 2.0;
                rect(side, side, 0.0)
            }
            ShapeKind::SemicircleTop => contour(Corners::new(true, true, false, false)),
            ShapeKind::SemicircleBottom => contour(Corners::new(false, false, true, true)),
            ShapeKind::QuarterTopLeft => contour(Corners::new(true, false, false, false)),
            ShapeKind::QuarterTopRight => contour(Corners::new(false, true, false, false)),
            ShapeKind::QuarterBottomLeft => contour(Corners::new(false, false, false, true)),
            ShapeKind::QuarterBottomRight => contour(Corners::new(false, false, true, false)),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Self::Ellipse { .. } => Family::Elliptic,
            Self::Rect { .. } => Family::Rectilinear,
            Self::Contour { .. } => Family::Contour,
        }
    }

    /// Parameter-wise interpolation, or `None` when the two forms cannot be blended numerically
    /// and must cross-fade instead.
    pub fn interpolate(from: &Form, to: &Form, t: f64) -> Option<Form> {
        match (from, to) {
            (
                Form::Ellipse {
                    center: c0,
                    radii: r0,
                },
                Form::Ellipse {
                    center: c1,
                    radii: r1,
                },
            ) => Some(Form::Ellipse {
                center: c0.lerp(*c1, t),
                radii: r0.lerp(*r1, t),
            }),
            (
                Form::Rect {
                    rect: a,
                    corner_radius: ra,
                },
                Form::Rect {
                    rect: b,
                    corner_radius: rb,
                },
            ) => Some(Form::Rect {
                rect: Rect::lerp(a, b, t),
                corner_radius: f64::lerp(ra, rb, t),
            }),
            _ => None,
        }
    }

    /// Outline as a Bézier path in canvas coordinates.
    pub fn to_path(&self) -> BezPath {
        match *self {
            Form::Ellipse { center, radii } => {
                kurbo::Ellipse::new(center, radii, 0.0).to_path(PATH_TOLERANCE)
            }
            Form::Rect {
                rect,
                corner_radius,
            } => {
                let r = corner_radius.clamp(0.0, rect.width().min(rect.height()) / 2.0);
                kurbo::RoundedRect::from_rect(rect, r).to_path(PATH_TOLERANCE)
            }
            Form::Contour { rect, corners } => contour_path(rect, corners),
        }
    }

    pub fn bounding_box(&self) -> Rect {
        match *self {
            Form::Ellipse { center, radii } => {
                Rect::from_center_size(center, (radii.x * 2.0, radii.y * 2.0))
            }
            Form::Rect { rect, .. } | Form::Contour { rect, .. } => rect,
        }
    }
}

fn contour_path(rect: Rect, corners: Corners) -> BezPath {
    let Rect { x0, y0, x1, y1 } = rect;
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;
    let (kx, ky) = (KAPPA * rx, KAPPA * ry);

    let mut path = BezPath::new();
    if corners.top_left {
        path.move_to((x0, y0 + ry));
        path.curve_to((x0, y0 + ry - ky), (x0 + rx - kx, y0), (x0 + rx, y0));
    } else {
        path.move_to((x0, y0));
    }

    if corners.top_right {
        path.line_to((x1 - rx, y0));
        path.curve_to((x1 - rx + kx, y0), (x1, y0 + ry - ky), (x1, y0 + ry));
    } else {
        path.line_to((x1, y0));
    }

    if corners.bottom_right {
        path.line_to((x1, y1 - ry));
        path.curve_to((x1, y1 - ry + ky), (x1 - rx + kx, y1), (x1 - rx, y1));
    } else {
        path.line_to((x1, y1));
    }

    if corners.bottom_left {
        path.line_to((x0 + rx, y1));
        path.curve_to((x0 + rx - kx, y1), (x0, y1 - ry + ky), (x0, y1 - ry));
    } else {
        path.line_to((x0, y1));
    }

    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/shape/form.rs"]
mod tests;
