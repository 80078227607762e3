//! Build command implementation.
//!
//! Decodes the input frames, runs the pipeline, and writes the looping GIF.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use clap::Args;

use crate::discovery::{collect_inputs, is_frame_file, load_images, Manifest, MANIFEST_FILENAME};
use crate::error::{FlipbookError, Result};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{resolve_canvas, Pipeline};
use crate::types::{QualityTier, Rgb, ScalePolicy};

/// Assemble input images into a looping GIF
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Input image files or directories (defaults to manifest sources)
    pub inputs: Vec<PathBuf>,

    /// Output GIF path
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Per-frame delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Numeric quality: above 15 high, above 8 medium, otherwise low
    #[arg(long)]
    pub quality: Option<u32>,

    /// Scale frames smaller than the canvas up to fit
    #[arg(long)]
    pub scale_up: bool,

    /// Background colour for flattening transparency (#RGB or #RRGGBB)
    #[arg(long)]
    pub background: Option<String>,

    /// Worker threads for the per-frame stage
    #[arg(long)]
    pub threads: Option<usize>,

    /// Rebuild whenever input files change
    #[arg(long)]
    pub watch: bool,
}

/// Effective build settings after merging CLI flags over the manifest.
struct BuildSettings {
    inputs: Vec<PathBuf>,
    output: PathBuf,
    delay_ms: u64,
    policy: ScalePolicy,
    tier: QualityTier,
    background: Rgb,
    threads: Option<usize>,
    manifest: Manifest,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let settings = resolve_settings(&args)?;

    build_once(&settings, printer)?;

    if args.watch {
        watch_loop(&settings, printer)?;
    }

    Ok(())
}

fn resolve_settings(args: &BuildArgs) -> Result<BuildSettings> {
    let manifest = Manifest::load_or_default(Path::new(MANIFEST_FILENAME))?;

    let inputs = if args.inputs.is_empty() {
        manifest.effective_sources().iter().map(PathBuf::from).collect()
    } else {
        args.inputs.clone()
    };

    let delay_ms = args.delay_ms.or(manifest.delay_ms).unwrap_or(500);
    if delay_ms == 0 {
        return Err(FlipbookError::Parse {
            message: "frame delay must be positive".to_string(),
            help: Some("Pass --delay-ms with a value greater than zero".to_string()),
        });
    }

    let quality = args.quality.or(manifest.quality).unwrap_or(10);
    let scale_up = args.scale_up || manifest.scale_up.unwrap_or(false);

    let background = match args.background.as_deref().or(manifest.background.as_deref()) {
        Some(hex) => Rgb::from_hex(hex)?,
        None => Rgb::WHITE,
    };

    Ok(BuildSettings {
        inputs,
        output: args.output.clone().unwrap_or_else(|| manifest.output.clone()),
        delay_ms,
        policy: ScalePolicy::from_scale_up(scale_up),
        tier: QualityTier::from_quality(quality),
        background,
        threads: args.threads,
        manifest,
    })
}

/// Run one full decode-normalize-encode pass.
fn build_once(settings: &BuildSettings, printer: &Printer) -> Result<()> {
    let frames = collect_inputs(&settings.inputs, &settings.manifest)?;

    for frame in &frames {
        printer.status("Loading", &display_path(frame));
    }
    let images = load_images(&frames)?;

    let canvas = resolve_canvas(&images)?;
    printer.info(
        "Canvas",
        &format!("{} across {}", canvas, plural(images.len(), "frame", "frames")),
    );

    let pipeline = Pipeline::new(settings.policy, settings.tier)
        .with_background(settings.background);
    let pipeline = match settings.threads {
        Some(threads) => pipeline.with_threads(threads),
        None => pipeline,
    };

    let delay_seconds = settings.delay_ms as f64 / 1000.0;
    let bytes = pipeline.run(&images, delay_seconds)?;

    fs::write(&settings.output, &bytes).map_err(|e| FlipbookError::Io {
        path: settings.output.clone(),
        message: format!("Failed to write GIF: {}", e),
    })?;

    printer.success(
        "Finished",
        &format!(
            "{} ({}, {} bytes)",
            display_path(&settings.output),
            plural(images.len(), "frame", "frames"),
            bytes.len()
        ),
    );

    Ok(())
}

/// Rebuild whenever a frame file under the watched inputs changes.
///
/// A failed rebuild is reported and watching continues; the previous output
/// stays on disk untouched.
fn watch_loop(settings: &BuildSettings, printer: &Printer) -> Result<()> {
    use notify::{RecursiveMode, Watcher};

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).map_err(|e| FlipbookError::Build {
        message: format!("Failed to start file watcher: {}", e),
        help: None,
    })?;

    for input in &settings.inputs {
        let mode = if input.is_dir() {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher.watch(input, mode).map_err(|e| FlipbookError::Build {
            message: format!("Failed to watch {}: {}", input.display(), e),
            help: None,
        })?;
    }

    printer.info(
        "Watching",
        &format!("{} (Ctrl-C to stop)", plural(settings.inputs.len(), "path", "paths")),
    );

    while let Ok(event) = rx.recv() {
        let relevant = match &event {
            Ok(event) => {
                (event.kind.is_create() || event.kind.is_modify() || event.kind.is_remove())
                    && event.paths.iter().any(|path| is_frame_file(path))
            }
            Err(_) => false,
        };
        if !relevant {
            continue;
        }

        // Let the burst of events settle, then drain it
        std::thread::sleep(Duration::from_millis(100));
        while rx.try_recv().is_ok() {}

        if let Err(err) = build_once(settings, printer) {
            printer.error("Error", &err.to_string());
        }
    }

    Ok(())
}
