use clap::Parser;
use flipbook::cli::{Cli, Commands};
use flipbook::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => flipbook::cli::build::run(args, &printer)?,
        Commands::Init(args) => flipbook::cli::init::run(args, &printer)?,
        Commands::Inspect(args) => flipbook::cli::inspect::run(args)?,
        Commands::Completions(args) => flipbook::cli::completions::run(args)?,
    }

    Ok(())
}
