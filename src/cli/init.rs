//! Init command implementation.
//!
//! Generates a `flipbook.yaml` manifest from discovered frame files.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{scan_directory, Manifest, MANIFEST_FILENAME};
use crate::error::{FlipbookError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a flipbook project by generating a flipbook.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing flipbook.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(FlipbookError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let frames = scan_directory(&args.path, &Manifest::default());

    // Collect unique parent directories (relative to the project root)
    let mut source_dirs = BTreeSet::new();
    for frame in &frames {
        if let Some(parent) = frame.parent() {
            let relative = parent.strip_prefix(&args.path).unwrap_or(parent);
            let dir_str = if relative == std::path::Path::new("") {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            };
            source_dirs.insert(dir_str);
        }
    }

    // Build YAML manually for clean formatting
    let mut yaml = String::new();

    if !(source_dirs.is_empty() || (source_dirs.len() == 1 && source_dirs.contains("."))) {
        yaml.push_str("sources:\n");
        for dir in &source_dirs {
            yaml.push_str(&format!("  - \"{}\"\n", dir));
        }
    }

    yaml.push_str("output: animation.gif\n");
    yaml.push_str("delay_ms: 500\n");
    yaml.push_str("quality: 10\n");
    yaml.push_str("scale_up: false\n");

    fs::write(&manifest_path, &yaml).map_err(|e| FlipbookError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(frames.len(), "frame", "frames")
        ),
    );

    Ok(())
}
