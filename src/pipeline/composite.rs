//! Alpha flattening onto an opaque background.

use image::RgbImage;

use crate::types::{PixelImage, Rgb};

/// Flatten a normalized RGBA frame onto an opaque background.
///
/// Each pixel is blended by its own alpha:
/// `out = src * a/255 + background * (1 - a/255)`, per channel, rounded to
/// the nearest integer. The output has the same dimensions and is fully
/// opaque.
pub fn flatten(image: &PixelImage, background: Rgb) -> RgbImage {
    let (width, height) = image.size();
    let bg = background.channels();

    let mut out = RgbImage::new(width, height);
    for (src, dst) in image.as_rgba().pixels().zip(out.pixels_mut()) {
        let alpha = f32::from(src[3]) / 255.0;
        for channel in 0..3 {
            let blended =
                f32::from(src[channel]) * alpha + f32::from(bg[channel]) * (1.0 - alpha);
            dst[channel] = blended.round() as u8;
        }
    }

    out
}
