//! compdoc CLI - component reference documentation generator.
//!
//! Provides commands for:
//! - `render`: Render a single component definition to markdown
//! - `build`: Render every component definition in a directory

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, RenderArgs};
use output::Output;

/// compdoc - Component reference documentation generator.
#[derive(Parser)]
#[command(name = "compdoc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one component definition file.
    Render(RenderArgs),
    /// Render all component definitions into a docs directory.
    Build(BuildArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Build(args) => args.execute(),
    };

    if let Err(err) = result {
        output.fatal(&err);
        std::process::exit(1);
    }
}
