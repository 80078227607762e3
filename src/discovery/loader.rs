//! Image decoding into pipeline inputs.

use std::path::{Path, PathBuf};

use crate::error::{FlipbookError, Result};
use crate::types::PixelImage;

/// Decode a single image file into an RGBA pixel buffer.
pub fn load_image(path: &Path) -> Result<PixelImage> {
    let decoded = image::open(path).map_err(|e| FlipbookError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to load image: {}", e),
    })?;

    PixelImage::from_rgba(decoded.to_rgba8())
}

/// Decode an ordered list of image files.
pub fn load_images(paths: &[PathBuf]) -> Result<Vec<PixelImage>> {
    paths.iter().map(|path| load_image(path)).collect()
}
