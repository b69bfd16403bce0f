mod round;

use std::path::Path;
use image::{ImageReader, GrayImage, ImageBuffer, Luma, Rgba, RgbaImage};

use anyhow::{bail, Result};
use tracing::debug;

pub use round::*;


pub const TRANSPARENT: Rgba<u8> = image::Rgba::<u8>([0, 0, 0, 0]);
pub const INCLUDED: Luma<u8> = image::Luma::<u8>([255]);

pub fn loadable_img(path: &Path) -> Result<RgbaImage> {
    if !path.is_file() {
        bail!("Source logo is not a file: {:?}", path)
    }

    // Read source image from file, sniffing the format from content
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = match reader.format() {
        Some(f) => f,
        None => bail!("Unable to detect image format from file."),
    };

    // Image is valid image
    let img = reader.decode()?;

    debug!(
        "Cropper received {:?} image {:?} with width: {} and height: {}",
        format, path, img.width(), img.height()
    );

    // Normalize to four channels so there's always an alpha to gate
    Ok(img.to_rgba8())
}

pub fn substitute_masked_px(target: &mut ImageBuffer<Rgba<u8>, Vec<u8>>, source: &ImageBuffer<Rgba<u8>, Vec<u8>>, mask: &GrayImage) {
    for (x, y, p) in target.enumerate_pixels_mut() {
        if INCLUDED.eq(mask.get_pixel(x, y)) {
            p.0 = source.get_pixel(x, y).0;
        }
    }
}
