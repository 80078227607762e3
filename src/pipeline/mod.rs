//! The normalization-and-assembly pipeline.
//!
//! Four stages composed strictly forward: canvas resolution, per-frame
//! normalization, alpha flattening, and GIF encoding. Per-frame work has no
//! shared mutable state, so the middle stages run on a rayon worker pool;
//! input order is restored before the serialized encode step.

mod composite;
mod encode;
mod normalize;
mod resolver;

pub use composite::flatten;
pub use encode::encode_animation;
pub use normalize::normalize;
pub use resolver::resolve_canvas;

use rayon::prelude::*;

use crate::error::{FlipbookError, Result};
use crate::types::{Animation, AnimationFrame, PixelImage, QualityTier, Rgb, ScalePolicy};

/// Configured pipeline runner.
///
/// Holds the per-run parameters that do not vary frame to frame. The
/// background defaults to white and the worker pool to the process-wide
/// rayon default.
pub struct Pipeline {
    policy: ScalePolicy,
    tier: QualityTier,
    background: Rgb,
    threads: Option<usize>,
}

impl Pipeline {
    pub fn new(policy: ScalePolicy, tier: QualityTier) -> Self {
        Self {
            policy,
            tier,
            background: Rgb::WHITE,
            threads: None,
        }
    }

    /// Override the flattening background colour.
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Bound the per-frame worker pool.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Run the full pipeline and return the encoded GIF bytes.
    ///
    /// The first error aborts the remaining stages; no partial output is
    /// ever returned.
    pub fn run(&self, images: &[PixelImage], delay_seconds: f64) -> Result<Vec<u8>> {
        if !(delay_seconds > 0.0) {
            return Err(FlipbookError::Build {
                message: format!("frame delay must be positive, got {}", delay_seconds),
                help: None,
            });
        }

        let canvas = resolve_canvas(images)?;

        let process = || -> Result<Vec<AnimationFrame>> {
            images
                .par_iter()
                .map(|image| {
                    let normalized = normalize(image, canvas, self.policy, self.tier)?;
                    let flattened = flatten(&normalized, self.background);
                    Ok(AnimationFrame::new(flattened, delay_seconds))
                })
                .collect()
        };

        let processed = match self.threads {
            Some(threads) => build_pool(threads)?.install(process),
            None => process(),
        };
        let frames = processed?;

        encode_animation(&Animation::looping(frames))
    }
}

/// Run the pipeline with default background and threading.
pub fn build_animation(
    images: &[PixelImage],
    delay_seconds: f64,
    policy: ScalePolicy,
    tier: QualityTier,
) -> Result<Vec<u8>> {
    Pipeline::new(policy, tier).run(images, delay_seconds)
}

fn build_pool(threads: usize) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| FlipbookError::Build {
            message: format!("Failed to build worker pool: {}", e),
            help: None,
        })
}
