//! Frame normalization: resize and pad onto the shared canvas.
//!
//! All of the geometry policy lives here. A normalized frame is always RGBA,
//! always exactly canvas-sized, with the source content centered and the
//! remainder transparent.

use image::{imageops, Rgba, RgbaImage};

use crate::error::{FlipbookError, Result};
use crate::types::{kernel_for, CanvasSize, PixelImage, QualityTier, ScalePolicy};

/// Normalize a source image into the canvas.
///
/// Identity when the source already matches the canvas. Under `NoUpscale`,
/// a source smaller than the canvas on either axis is padded without
/// resizing. Otherwise the source is fitted by the smaller per-axis ratio,
/// preserving aspect ratio, with the interpolation kernel chosen by
/// [`kernel_for`].
pub fn normalize(
    source: &PixelImage,
    canvas: CanvasSize,
    policy: ScalePolicy,
    tier: QualityTier,
) -> Result<PixelImage> {
    let (src_w, src_h) = source.size();
    let (target_w, target_h) = canvas.size();

    if (src_w, src_h) == (target_w, target_h) {
        return Ok(source.clone());
    }

    let width_ratio = f64::from(target_w) / f64::from(src_w);
    let height_ratio = f64::from(target_h) / f64::from(src_h);

    if policy == ScalePolicy::NoUpscale && (width_ratio > 1.0 || height_ratio > 1.0) {
        return paste_centered(source.as_rgba(), canvas);
    }

    // Fit by the smaller ratio; the other axis truncates toward zero.
    let (new_w, new_h, resize_ratio) = if width_ratio < height_ratio {
        let new_h = (f64::from(src_h) * width_ratio) as u32;
        (target_w, new_h, width_ratio)
    } else {
        let new_w = (f64::from(src_w) * height_ratio) as u32;
        (new_w, target_h, height_ratio)
    };

    if new_w == 0 || new_h == 0 {
        return Err(FlipbookError::InvalidGeometry {
            width: new_w,
            height: new_h,
        });
    }

    let filter = kernel_for(resize_ratio, tier);
    let resized = imageops::resize(source.as_rgba(), new_w, new_h, filter);
    paste_centered(&resized, canvas)
}

/// Paste content centered onto a transparent canvas.
///
/// Floor division on the remainders biases odd paddings one pixel toward
/// the top-left.
fn paste_centered(content: &RgbaImage, canvas: CanvasSize) -> Result<PixelImage> {
    let mut out = RgbaImage::from_pixel(canvas.width, canvas.height, Rgba([0, 0, 0, 0]));

    let x = (i64::from(canvas.width) - i64::from(content.width())).div_euclid(2);
    let y = (i64::from(canvas.height) - i64::from(content.height())).div_euclid(2);

    // The canvas starts fully transparent, so overlay is a plain paste.
    imageops::overlay(&mut out, content, x, y);

    PixelImage::from_rgba(out)
}
