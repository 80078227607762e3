//! Project manifest (flipbook.yaml) parsing.
//!
//! The manifest defines project defaults: source paths, output path, frame
//! timing, quality, and scaling behaviour. CLI flags override manifest
//! values; the pipeline core never reads it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FlipbookError, Result};

/// Project manifest loaded from flipbook.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for frames. Defaults to the current
    /// directory if empty.
    #[serde(default)]
    pub sources: Vec<String>,

    /// Output path for the encoded GIF.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Default per-frame delay in milliseconds.
    #[serde(default)]
    pub delay_ms: Option<u64>,

    /// Default numeric quality (mapped to a tier at build time).
    #[serde(default)]
    pub quality: Option<u32>,

    /// Whether frames smaller than the canvas are scaled up.
    #[serde(default)]
    pub scale_up: Option<bool>,

    /// Background colour for flattening, as a hex string.
    #[serde(default)]
    pub background: Option<String>,

    /// Patterns to exclude from discovery.
    #[serde(default)]
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("animation.gif")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: default_output(),
            delay_ms: None,
            quality: None,
            scale_up: None,
            background: None,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load a manifest from a flipbook.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FlipbookError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load the manifest if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse a manifest from YAML.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| FlipbookError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check flipbook.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }

    /// Effective source paths, defaulting to the current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}

/// Simple glob pattern matching for exclude rules.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix("**/") {
        if let Some(dir) = suffix.strip_suffix("/*") {
            return path.contains(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
        }
        return path.contains(suffix) || path.ends_with(suffix);
    }

    if pattern.starts_with('*') && !pattern.contains('/') {
        return path.ends_with(&pattern[1..]);
    }

    if let Some(prefix) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", prefix))
            || path.contains(&format!("/{}/", prefix));
    }

    path.contains(pattern)
}
