//! Validated RGBA pixel buffer.
//!
//! `PixelImage` is the unit of work for every pipeline stage. The RGBA
//! invariant (buffer length = width x height x 4) is established here, at
//! construction, so the stages themselves never re-check it.

use image::RgbaImage;

use crate::error::{FlipbookError, Result};

/// An owned RGBA image with validated geometry.
///
/// Row-major, 4 bytes per pixel, values 0-255.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelImage {
    inner: RgbaImage,
}

impl PixelImage {
    /// Wrap a decoded RGBA buffer.
    ///
    /// Fails with `InvalidGeometry` if either dimension is zero.
    pub fn from_rgba(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(FlipbookError::InvalidGeometry { width, height });
        }
        Ok(Self { inner: image })
    }

    /// Build an image from raw RGBA bytes.
    ///
    /// Fails with `InvalidGeometry` for zero dimensions and
    /// `InvalidPixelBuffer` if the buffer length does not match
    /// width x height x 4.
    pub fn from_raw(width: u32, height: u32, buffer: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FlipbookError::InvalidGeometry { width, height });
        }

        let expected = width as usize * height as usize * 4;
        if buffer.len() != expected {
            return Err(FlipbookError::InvalidPixelBuffer {
                width,
                height,
                expected,
                actual: buffer.len(),
            });
        }

        // Length already validated, so from_raw cannot fail here
        let inner = RgbaImage::from_raw(width, height, buffer).ok_or(
            FlipbookError::InvalidPixelBuffer {
                width,
                height,
                expected,
                actual: expected,
            },
        )?;

        Ok(Self { inner })
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// (width, height) pair.
    pub fn size(&self) -> (u32, u32) {
        self.inner.dimensions()
    }

    /// Borrow the underlying RGBA buffer.
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.inner
    }

    /// Consume into the underlying RGBA buffer.
    pub fn into_rgba(self) -> RgbaImage {
        self.inner
    }
}
