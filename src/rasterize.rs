//! SVG to PNG rendering.
use crate::{manifest::SOURCE_UNITS, replace};
use image::{ImageFormat, Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};
use std::{io::Cursor, path::Path};

/// Resolution used to convert absolute lengths in the source.
pub const RENDER_DPI: f32 = 72.0;

#[derive(Debug, thiserror::Error)]
pub enum RasterizeError {
    #[error("failed to read vector source: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to parse vector source: {0}")]
    Parse(#[from] usvg::Error),
    #[error("cannot allocate a {0}x{0} canvas")]
    Canvas(u32),
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write PNG: {0}")]
    Write(#[source] std::io::Error),
}

pub fn parse(data: &[u8]) -> Result<usvg::Tree, RasterizeError> {
    let options = usvg::Options {
        dpi: RENDER_DPI,
        ..usvg::Options::default()
    };
    Ok(usvg::Tree::from_data(data, &options)?)
}

pub fn load(svg: impl AsRef<Path>) -> Result<usvg::Tree, RasterizeError> {
    let data = std::fs::read(svg).map_err(RasterizeError::Read)?;
    parse(&data)
}

/// Renders `tree` onto a `size` x `size` canvas, scaling the native
/// coordinate space uniformly by `size / 200`.
pub fn render(tree: &usvg::Tree, size: u32) -> Result<RgbaImage, RasterizeError> {
    let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(RasterizeError::Canvas(size))?;
    let scale = size as f32 / SOURCE_UNITS;
    tracing::debug!(size, scale, "rendering");
    resvg::render(
        tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied alpha
    let mut image = RgbaImage::new(size, size);
    for (dest, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let color = src.demultiply();
        *dest = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }
    Ok(image)
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RasterizeError> {
    let mut png = Cursor::new(Vec::new());
    image.write_to(&mut png, ImageFormat::Png)?;
    Ok(png.into_inner())
}

/// Parses `svg`, renders it at `size` and writes the PNG to `png`.
pub fn rasterize_file(
    svg: impl AsRef<Path>,
    png: impl AsRef<Path>,
    size: u32,
) -> Result<(), RasterizeError> {
    let tree = load(svg)?;
    let image = render(&tree, size)?;
    let data = encode_png(&image)?;
    replace::write_atomic(png.as_ref(), &data).map_err(RasterizeError::Write)?;
    tracing::debug!(path = %png.as_ref().display(), bytes = data.len(), "wrote icon");
    Ok(())
}
