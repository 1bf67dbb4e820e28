//! Flattening transparent PNGs onto a white background.
use crate::{replace, report::Action};
use image::{DynamicImage, ImageFormat, ImageReader, ImageResult, Rgb, RgbImage, Rgba};
use png::{ColorType, Decoder};
use std::{
    fs::File,
    io::{BufReader, Cursor},
    path::{Path, PathBuf},
};

/// Suffix of the files considered icons. Matched case-sensitively.
pub const PNG_SUFFIX: &str = ".png";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Classification {
    NeedsStrip,
    AlreadyOpaque,
}

#[derive(Debug, thiserror::Error)]
pub enum StripError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("failed to replace file: {0}")]
    Write(#[from] std::io::Error),
}

fn open(path: &Path) -> ImageResult<ImageReader<BufReader<File>>> {
    Ok(ImageReader::open(path)?.with_guessed_format()?)
}

/// Color type as stored in the PNG header. Unlike the decoded color type,
/// this doesn't turn a tRNS chunk into an alpha channel.
fn stored_color_type(path: &Path) -> Result<ColorType, png::DecodingError> {
    let file = File::open(path)?;
    let reader = Decoder::new(BufReader::new(file)).read_info()?;
    Ok(reader.info().color_type)
}

/// Inspects the image header of `path`. Only RGBA and luminance+alpha
/// layouts need stripping. Files that can't be read count as opaque so they
/// are never rewritten.
pub fn classify(path: impl AsRef<Path>) -> Classification {
    let path = path.as_ref();
    match stored_color_type(path) {
        Ok(ColorType::Rgba | ColorType::GrayscaleAlpha) => Classification::NeedsStrip,
        Ok(_) => Classification::AlreadyOpaque,
        Err(error) => {
            tracing::warn!("could not inspect {}: {}", path.display(), error);
            Classification::AlreadyOpaque
        }
    }
}

/// Composites `image` over opaque white, dropping its alpha channel.
/// Luminance images are expanded to gray RGB.
pub fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    let mut flattened = RgbImage::new(rgba.width(), rgba.height());
    for (dest, &Rgba([r, g, b, a])) in flattened.pixels_mut().zip(rgba.pixels()) {
        *dest = Rgb([blend(r, a), blend(g, a), blend(b, a)]);
    }
    flattened
}

fn blend(channel: u8, alpha: u8) -> u8 {
    let (channel, alpha) = (u32::from(channel), u32::from(alpha));
    ((channel * alpha + 255 * (255 - alpha) + 127) / 255) as u8
}

/// Replaces the PNG at `path` with its flattened version.
pub fn strip_file(path: impl AsRef<Path>) -> Result<(), StripError> {
    let path = path.as_ref();
    let image = open(path)?.decode()?;
    let flattened = flatten_onto_white(&image);
    let mut png = Cursor::new(Vec::new());
    flattened.write_to(&mut png, ImageFormat::Png)?;
    replace::write_atomic(path, png.get_ref())?;
    tracing::debug!(path = %path.display(), from = ?image.color(), "flattened");
    Ok(())
}

/// Strips the alpha channel of `path` if it has one.
pub fn process(path: impl AsRef<Path>) -> Result<Action, StripError> {
    let path = path.as_ref();
    match classify(path) {
        Classification::NeedsStrip => {
            strip_file(path)?;
            Ok(Action::Ok)
        }
        Classification::AlreadyOpaque => Ok(Action::Skipped("no alpha channel".to_owned())),
    }
}

/// Lists the PNG files directly inside `dir`, sorted by name.
pub fn icon_files(dir: impl AsRef<Path>) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry
            .file_name()
            .as_encoded_bytes()
            .ends_with(PNG_SUFFIX.as_bytes())
        {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
