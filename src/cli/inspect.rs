//! Inspect command implementation.
//!
//! Reports input geometry and the resolved canvas as JSON on stdout,
//! without encoding anything.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::discovery::{collect_inputs, load_images, Manifest, MANIFEST_FILENAME};
use crate::error::{FlipbookError, Result};
use crate::pipeline::resolve_canvas;

/// Report input geometry and the resolved canvas as JSON
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input image files or directories (defaults to manifest sources)
    pub inputs: Vec<PathBuf>,
}

#[derive(Serialize)]
struct Report {
    canvas: Size,
    frames: Vec<FrameInfo>,
}

#[derive(Serialize)]
struct Size {
    width: u32,
    height: u32,
}

#[derive(Serialize)]
struct FrameInfo {
    path: String,
    width: u32,
    height: u32,
    /// Whether the frame already matches the canvas (identity case).
    matches_canvas: bool,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let report = build_report(&args)?;

    let json = serde_json::to_string_pretty(&report).map_err(|e| FlipbookError::Build {
        message: format!("Failed to serialize report: {}", e),
        help: None,
    })?;
    println!("{}", json);

    Ok(())
}

fn build_report(args: &InspectArgs) -> Result<Report> {
    let manifest = Manifest::load_or_default(std::path::Path::new(MANIFEST_FILENAME))?;

    let inputs = if args.inputs.is_empty() {
        manifest.effective_sources().iter().map(PathBuf::from).collect()
    } else {
        args.inputs.clone()
    };

    let paths = collect_inputs(&inputs, &manifest)?;
    let images = load_images(&paths)?;
    let canvas = resolve_canvas(&images)?;

    let frames = paths
        .iter()
        .zip(&images)
        .map(|(path, image)| FrameInfo {
            path: path.display().to_string(),
            width: image.width(),
            height: image.height(),
            matches_canvas: image.size() == canvas.size(),
        })
        .collect();

    Ok(Report {
        canvas: Size {
            width: canvas.width,
            height: canvas.height,
        },
        frames,
    })
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    use super::*;

    fn write_png(path: &std::path::Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_report_resolves_canvas() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        write_png(&a, 3, 10);
        write_png(&b, 10, 3);

        let report = build_report(&InspectArgs {
            inputs: vec![a, b],
        })
        .unwrap();

        assert_eq!((report.canvas.width, report.canvas.height), (10, 10));
        assert_eq!(report.frames.len(), 2);
        assert!(!report.frames[0].matches_canvas);
    }

    #[test]
    fn test_report_marks_identity_frames() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        write_png(&a, 8, 4);
        write_png(&b, 4, 4);

        let report = build_report(&InspectArgs {
            inputs: vec![a, b],
        })
        .unwrap();

        assert!(report.frames[0].matches_canvas);
        assert!(!report.frames[1].matches_canvas);
    }

    #[test]
    fn test_report_serializes() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.png");
        write_png(&a, 2, 2);

        let report = build_report(&InspectArgs { inputs: vec![a] }).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["canvas"]["width"], 2);
        assert_eq!(parsed["frames"][0]["matches_canvas"], true);
    }

    #[test]
    fn test_report_empty_inputs_error() {
        let dir = tempdir().unwrap();
        let result = build_report(&InspectArgs {
            inputs: vec![dir.path().to_path_buf()],
        });
        assert!(result.is_err());
    }
}
