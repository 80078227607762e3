pub mod build;
pub mod completions;
pub mod init;
pub mod inspect;

use clap::{Parser, Subcommand};

/// flipbook - Looping GIF assembly from still images
#[derive(Parser, Debug)]
#[command(name = "flipbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble input images into a looping GIF
    Build(build::BuildArgs),

    /// Initialize a flipbook project (generates flipbook.yaml)
    Init(init::InitArgs),

    /// Report input geometry and the resolved canvas as JSON
    Inspect(inspect::InspectArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
