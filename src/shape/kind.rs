use std::{fmt, str::FromStr};

use crate::foundation::error::{ShapefieldError, ShapefieldResult};

/// Which geometric primitive a shape is drawn as.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    Circle,
    Ellipse,
    WideEllipse,
    TallEllipse,
    Rectangle,
    RoundedRectangle,
    Square,
    SemicircleTop,
    SemicircleBottom,
    QuarterTopLeft,
    QuarterTopRight,
    QuarterBottomLeft,
    QuarterBottomRight,
}

/// Primitive family a kind reduces to. Kinds in the same interpolable family morph by
/// parameter interpolation; everything else cross-fades.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    /// Center + radii.
    Elliptic,
    /// Axis-aligned rect + corner radius.
    Rectilinear,
    /// Path outlines (semicircles, quarters).
    Contour,
}

impl Family {
    pub fn is_interpolable(self) -> bool {
        !matches!(self, Self::Contour)
    }
}

impl ShapeKind {
    /// Every kind, in declaration order. Uniform draws index into this table.
    pub const ALL: [ShapeKind; 13] = [
        Self::Circle,
        Self::Ellipse,
        Self::WideEllipse,
        Self::TallEllipse,
        Self::Rectangle,
        Self::RoundedRectangle,
        Self::Square,
        Self::SemicircleTop,
        Self::SemicircleBottom,
        Self::QuarterTopLeft,
        Self::QuarterTopRight,
        Self::QuarterBottomLeft,
        Self::QuarterBottomRight,
    ];

    pub fn family(self) -> Family {
        match self {
            Self::Circle | Self::Ellipse | Self::WideEllipse | Self::TallEllipse => {
                Family::Elliptic
            }
            Self::Rectangle | Self::RoundedRectangle | Self::Square => Family::Rectilinear,
            Self::SemicircleTop
            | Self::SemicircleBottom
            | Self::QuarterTopLeft
            | Self::QuarterTopRight
            | Self::QuarterBottomLeft
            | Self::QuarterBottomRight => Family::Contour,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::WideEllipse => "wide-ellipse",
            Self::TallEllipse => "tall-ellipse",
            Self::Rectangle => "rectangle",
            Self::RoundedRectangle => "rounded-rectangle",
            Self::Square => "square",
            Self::SemicircleTop => "semicircle-top",
            Self::SemicircleBottom => "semicircle-bottom",
            Self::QuarterTopLeft => "quarter-top-left",
            Self::QuarterTopRight => "quarter-top-right",
            Self::QuarterBottomLeft => "quarter-bottom-left",
            Self::QuarterBottomRight => "quarter-bottom-right",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapefieldError;

    fn from_str(s: &str) -> ShapefieldResult<Self> {
        let s = s.trim().to_ascii_lowercase();
        let kind = match s.as_str() {
            "quarter-tl" => Self::QuarterTopLeft,
            "quarter-tr" => Self::QuarterTopRight,
            "quarter-bl" => Self::QuarterBottomLeft,
            "quarter-br" => Self::QuarterBottomRight,
            other => Self::ALL
                .into_iter()
                .find(|k| k.as_str() == other)
                .ok_or_else(|| ShapefieldError::validation(format!("unknown shape kind '{other}'")))?,
        };
        Ok(kind)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/kind.rs"]
mod tests;
