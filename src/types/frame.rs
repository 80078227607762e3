//! Animation frames and the assembled animation.

use image::RgbImage;

/// A single flattened animation frame: an opaque RGB image plus its display
/// duration in seconds.
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    image: RgbImage,
    duration_secs: f64,
}

impl AnimationFrame {
    /// Create a frame. The duration must be positive; the pipeline enforces
    /// this at its boundary.
    pub fn new(image: RgbImage, duration_secs: f64) -> Self {
        Self {
            image,
            duration_secs,
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// An ordered sequence of frames with a loop flag.
///
/// Flipbook animations always loop forever; the flag exists so the encoder
/// reads the looping behaviour from the model rather than assuming it.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<AnimationFrame>,
    loop_forever: bool,
}

impl Animation {
    /// Assemble a loop-forever animation from ordered frames.
    pub fn looping(frames: Vec<AnimationFrame>) -> Self {
        Self {
            frames,
            loop_forever: true,
        }
    }

    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    pub fn loops_forever(&self) -> bool {
        self.loop_forever
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
