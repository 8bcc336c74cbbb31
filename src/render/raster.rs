use crate::{
    foundation::{
        core::Canvas,
        error::{ShapefieldError, ShapefieldResult},
    },
    render::{
        scene::{Layer, RenderStyle},
        svg::to_svg,
    },
};

const MAX_DIM: u32 = 16_384;

/// A rasterized frame as straight (non-premultiplied) RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Frame {
    /// RGBA of the pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Rasterize an SVG document at its intrinsic size.
pub fn rasterize_svg(svg: &str) -> ShapefieldResult<Frame> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| ShapefieldError::render(format!("parse svg: {e}")))?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(ShapefieldError::render(format!(
            "frame size {width}x{height} out of range (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ShapefieldError::render("failed to allocate pixmap"))?;
    resvg::render(&tree, resvg::tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    let mut data = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    Ok(Frame {
        width,
        height,
        data,
    })
}

/// Paint `layers` onto a canvas-sized frame.
#[tracing::instrument(level = "trace", skip(style, layers), fields(layers = layers.len()))]
pub fn render_frame(
    canvas: Canvas,
    style: &RenderStyle,
    layers: &[Layer],
) -> ShapefieldResult<Frame> {
    if canvas.is_degenerate() {
        return Err(ShapefieldError::render(format!(
            "cannot render a {}x{} canvas",
            canvas.width, canvas.height
        )));
    }
    style.validate()?;
    rasterize_svg(&to_svg(canvas, style, layers))
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
