//! pubmanifest - inject a publication manifest into rendered technical documents.

mod cli;
mod config;
mod core;
mod logger;
mod manifest;
mod page;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ManifestConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ManifestConfig::load(&cli.config)
        .with_context(|| format!("failed to load config `{}`", cli.config.display()))?;

    match &cli.command {
        Commands::Build { args } => cli::build::run_build(args, &config),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
