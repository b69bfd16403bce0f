use image::{GrayImage, ImageBuffer, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_ellipse_mut;

use super::*;


// Draw an included ellipse on an excluded-everywhere mask, spanning the
// full bounding box of the image it will gate
pub fn ellipse_mask(width: u32, height: u32) -> GrayImage {
    let rx = (width / 2).try_into().unwrap();
    let ry = (height / 2).try_into().unwrap();
    let mut mask = GrayImage::new(width, height);

    draw_filled_ellipse_mut(
        &mut mask,
        (rx, ry),
        rx,
        ry,
        INCLUDED
    );

    mask
}

pub fn round_from_img(buf: &ImageBuffer<Rgba<u8>, Vec<u8>>) -> RgbaImage {
    let mask = ellipse_mask(buf.width(), buf.height());
    let mut img = RgbaImage::from_pixel(buf.width(), buf.height(), TRANSPARENT);

    substitute_masked_px(&mut img, buf, &mask);

    img
}
