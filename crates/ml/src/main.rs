//! ML CLI - Alternate URLs for multilingual documentation.
//!
//! Provides commands for:
//! - `context`: Derive the canonical and alternate URLs of pages as JSON
//! - `check`: Validate the configuration and report unsupported entries

mod build_config;
mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ContextArgs};
use output::Output;

/// ML - Alternate URLs for multilingual documentation.
#[derive(Parser)]
#[command(name = "ml", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the rendering context of one or more pages.
    Context(ContextArgs),
    /// Validate the configuration.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Context(args) => args.verbose,
        Commands::Check(args) => args.verbose,
    };

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Context(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
