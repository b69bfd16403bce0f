use std::io::Cursor;
use std::path::{Path, PathBuf};
use anyhow::{anyhow, bail, Result};
use image::ImageFormat;
use tracing::debug;

use crate::transform::{loadable_img, round_from_img};


pub fn round_action(source: &Path, output: &Path) -> Result<PathBuf> {
    let img = loadable_img(source)?;

    // Cut the largest ellipse that fits the source bounding box
    let rounded = round_from_img(&img);

    // Target format follows the output file extension
    let format = ImageFormat::from_path(output)?;

    debug!(
        "Encoding {}x{} cropped logo as {:?} to {:?}...",
        rounded.width(), rounded.height(), format, output
    );

    // Read cropped image into bytes for writing, nothing is on disk yet if encoding fails
    let mut buf = vec![];

    rounded.write_to(&mut Cursor::new(&mut buf), format).map_err(|e|
        anyhow!("Failed to create {:?} image: {}", format, e)
    )?;

    if let Err(e) = std::fs::write(output, &buf) {
        bail!("Failed to write cropped logo {}: {}", output.display(), e)
    }

    Ok(output.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn tmp(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("logoround-{}-{}", std::process::id(), name))
    }

    #[test]
    fn square_logo_keeps_dimensions_and_center() {
        let source = tmp("dims-src.png");
        let output = tmp("dims-out.png");

        RgbImage::from_pixel(64, 64, Rgb([180, 40, 7])).save(&source).unwrap();

        let saved = round_action(&source, &output).unwrap();
        assert_eq!(saved, output);

        let out = image::open(&output).unwrap().to_rgba8();
        assert_eq!(out.dimensions(), (64, 64));

        // Corners fall outside the inscribed circle
        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            assert_eq!(out.get_pixel(x, y)[3], 0);
        }

        // Center keeps its color, opaque since the source had no alpha
        assert_eq!(out.get_pixel(32, 32), &Rgba([180, 40, 7, 255]));

        fs::remove_file(&source).unwrap();
        fs::remove_file(&output).unwrap();
    }

    #[test]
    fn double_run_is_byte_identical() {
        let source = tmp("twice-src.png");
        let first = tmp("twice-out-1.png");
        let second = tmp("twice-out-2.png");

        RgbImage::from_pixel(33, 33, Rgb([0, 99, 200])).save(&source).unwrap();

        round_action(&source, &first).unwrap();
        round_action(&source, &second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());

        fs::remove_file(&source).unwrap();
        fs::remove_file(&first).unwrap();
        fs::remove_file(&second).unwrap();
    }

    #[test]
    fn missing_source_creates_no_output() {
        let source = tmp("missing-src.png");
        let output = tmp("missing-out.png");

        assert!(round_action(&source, &output).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn unknown_output_extension_creates_no_file() {
        let source = tmp("badext-src.png");
        let output = tmp("badext-out.nope");

        RgbImage::from_pixel(8, 8, Rgb([1, 2, 3])).save(&source).unwrap();

        assert!(round_action(&source, &output).is_err());
        assert!(!output.exists());

        fs::remove_file(&source).unwrap();
    }

    #[test]
    fn translucent_source_alpha_survives_inside() {
        let source = tmp("alpha-src.png");
        let output = tmp("alpha-out.png");

        RgbaImage::from_pixel(41, 41, Rgba([10, 20, 30, 128])).save(&source).unwrap();

        round_action(&source, &output).unwrap();

        let out = image::open(&output).unwrap().to_rgba8();
        assert_eq!(out.get_pixel(20, 20), &Rgba([10, 20, 30, 128]));
        assert_eq!(out.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));

        fs::remove_file(&source).unwrap();
        fs::remove_file(&output).unwrap();
    }
}
