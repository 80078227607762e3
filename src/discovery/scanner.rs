//! Frame-file discovery.
//!
//! Finds input images under the allow-listed extensions. Extension checks
//! belong here, at the I/O boundary, never in the pipeline.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{FlipbookError, Result};

use super::manifest::Manifest;

/// Extensions accepted as input frames.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Check whether a path has an allow-listed image extension.
pub fn is_frame_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Recursively scan a directory for frame files, in lexicographic order.
///
/// Frame order defines animation order, so the sort keeps directory scans
/// deterministic across platforms.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut frames: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| !entry.path().is_dir())
        .filter(|entry| !manifest.is_excluded(entry.path()))
        .filter(|entry| is_frame_file(entry.path()))
        .map(|entry| entry.path().to_path_buf())
        .collect();

    frames.sort();
    frames
}

/// Expand a mixed list of files and directories into an ordered frame list.
///
/// Explicit files must carry an allowed extension; directories are scanned.
/// Fails with `EmptyInput` when nothing usable is found.
pub fn collect_inputs(inputs: &[PathBuf], manifest: &Manifest) -> Result<Vec<PathBuf>> {
    let mut frames = Vec::new();

    for input in inputs {
        if input.is_dir() {
            frames.extend(scan_directory(input, manifest));
        } else if is_frame_file(input) {
            frames.push(input.clone());
        } else {
            return Err(FlipbookError::Build {
                message: format!("Invalid file type: {}", input.display()),
                help: Some(format!(
                    "Allowed extensions: {}",
                    ALLOWED_EXTENSIONS.join(", ")
                )),
            });
        }
    }

    if frames.is_empty() {
        return Err(FlipbookError::EmptyInput);
    }

    Ok(frames)
}
