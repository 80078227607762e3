//! Shared canvas dimensions.

use std::fmt;

use crate::error::{FlipbookError, Result};

/// The common target dimensions every frame is normalized into.
///
/// Width and height are independent per-axis maxima over the inputs, so the
/// canvas need not match any single input's aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Create a canvas size, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FlipbookError::InvalidGeometry { width, height });
        }
        Ok(Self { width, height })
    }

    /// (width, height) pair.
    pub fn size(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
