//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Publication manifest injector for rendered technical documents
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (`.json` is read as JSON, anything else as TOML)
    #[arg(short = 'C', long, global = true, default_value = "respec.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Inject the manifest into a rendered document
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Print the manifest JSON without touching the document
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Rendered HTML document. Use `-` to read from stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Write the result to this file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the input document
    #[arg(short, long)]
    pub in_place: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Rendered HTML document. Use `-` to read from stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
