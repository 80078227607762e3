//! flipbook - Looping GIF assembly pipeline
//!
//! A library for normalizing heterogeneously-sized still images onto a
//! shared canvas and assembling them into a looping animated GIF.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

pub use discovery::{collect_inputs, load_image, load_images, Manifest, MANIFEST_FILENAME};
pub use error::{FlipbookError, Result};
pub use pipeline::{build_animation, encode_animation, flatten, normalize, resolve_canvas, Pipeline};
pub use types::{
    kernel_for, Animation, AnimationFrame, CanvasSize, PixelImage, QualityTier, Rgb, ScalePolicy,
};
