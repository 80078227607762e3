//! Canvas size resolution.

use crate::error::{FlipbookError, Result};
use crate::types::{CanvasSize, PixelImage};

/// Resolve the shared canvas for a set of input images.
///
/// Width and height are the per-axis maxima over the sequence, computed in
/// one pass. Fails with `EmptyInput` when no images are supplied.
pub fn resolve_canvas(images: &[PixelImage]) -> Result<CanvasSize> {
    if images.is_empty() {
        return Err(FlipbookError::EmptyInput);
    }

    let mut width = 0;
    let mut height = 0;
    for image in images {
        width = width.max(image.width());
        height = height.max(image.height());
    }

    CanvasSize::new(width, height)
}
