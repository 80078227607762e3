use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for flipbook operations
#[derive(Error, Diagnostic, Debug)]
pub enum FlipbookError {
    #[error("IO error: {0}")]
    #[diagnostic(code(flipbook::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(flipbook::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(flipbook::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("no input images supplied")]
    #[diagnostic(
        code(flipbook::empty_input),
        help("Provide at least one PNG or JPEG image")
    )]
    EmptyInput,

    #[error("invalid image geometry: {width}x{height}")]
    #[diagnostic(code(flipbook::geometry))]
    InvalidGeometry { width: u32, height: u32 },

    #[error(
        "pixel buffer length {actual} does not match {width}x{height} RGBA (expected {expected})"
    )]
    #[diagnostic(code(flipbook::pixel_buffer))]
    InvalidPixelBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("no frames to encode")]
    #[diagnostic(code(flipbook::empty_animation))]
    EmptyAnimation,

    #[error("frame {index} is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}")]
    #[diagnostic(code(flipbook::dimension_mismatch))]
    DimensionMismatch {
        index: usize,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("GIF encoding failed: {source}")]
    #[diagnostic(code(flipbook::encode))]
    Encoding {
        #[from]
        source: image::ImageError,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(flipbook::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, FlipbookError>;
