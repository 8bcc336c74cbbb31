use std::fmt::Write as _;

use crate::{
    foundation::{color::Color, core::Canvas},
    render::scene::{Layer, RenderStyle},
};

fn fmt_opacity(v: f64) -> String {
    let s = format!("{:.4}", v.clamp(0.0, 1.0));
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() { "0".to_string() } else { s.to_string() }
}

fn fill_attrs(color: Color, opacity: f64) -> String {
    let alpha = color.alpha() * opacity;
    if alpha >= 1.0 {
        format!(r#"fill="{}""#, color.rgb_hex())
    } else {
        format!(
            r#"fill="{}" fill-opacity="{}""#,
            color.rgb_hex(),
            fmt_opacity(alpha)
        )
    }
}

const BLUR_FILTER_ID: &str = "shape-blur";

/// Standalone SVG document for one frame: background, layers in order, then the overlay.
///
/// The shape layers share one Gaussian blur of `style.blur` when it is positive; the background
/// and overlay stay sharp. Fully transparent background or overlay fills are omitted.
pub fn to_svg(canvas: Canvas, style: &RenderStyle, layers: &[Layer]) -> String {
    let (w, h) = canvas.pixel_size();
    let mut out = String::with_capacity(256 + layers.len() * 160);

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );

    if style.background.a > 0 {
        let _ = writeln!(
            out,
            r#"  <rect width="{w}" height="{h}" {}/>"#,
            fill_attrs(style.background, 1.0)
        );
    }

    let blurred = style.blur > 0.0 && !layers.is_empty();
    if blurred {
        let _ = writeln!(
            out,
            r#"  <defs><filter id="{BLUR_FILTER_ID}" filterUnits="userSpaceOnUse" x="0" y="0" width="{w}" height="{h}"><feGaussianBlur stdDeviation="{}"/></filter></defs>"#,
            style.blur
        );
        let _ = writeln!(out, r#"  <g filter="url(#{BLUR_FILTER_ID})">"#);
    }

    for layer in layers {
        let _ = writeln!(
            out,
            r#"  <path class="{}" d="{}" {}/>"#,
            layer.shape_id,
            layer.form.to_path().to_svg(),
            fill_attrs(layer.color, layer.opacity)
        );
    }

    if blurred {
        out.push_str("  </g>\n");
    }

    if style.overlay.a > 0 {
        let _ = writeln!(
            out,
            r#"  <rect width="{w}" height="{h}" {}/>"#,
            fill_attrs(style.overlay, 1.0)
        );
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
