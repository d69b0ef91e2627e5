//! weld CLI - Documentation build integrity.
//!
//! Provides commands for:
//! - `build`: validate content and navigation, emit sitemap and route manifest
//! - `check`: validate without writing artifacts
//! - `watch`: rebuild on every content or configuration change

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, WatchArgs};
use output::Output;

/// weld - Documentation build integrity.
#[derive(Parser)]
#[command(name = "weld", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate content and emit sitemap, routes, and head metadata.
    Build(BuildArgs),
    /// Validate content and navigation without writing artifacts.
    Check(CheckArgs),
    /// Rebuild on every content or configuration change.
    Watch(WatchArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Build(args) => args.common.verbose,
        Commands::Check(args) => args.common.verbose,
        Commands::Watch(args) => args.common.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Watch(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
