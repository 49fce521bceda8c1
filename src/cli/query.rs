//! `query`: print the manifest as JSON.

use anyhow::Result;

use super::QueryArgs;
use super::common::{prepare, read_input, write_output};
use crate::config::ManifestConfig;
use crate::log;

pub fn run_query(args: &QueryArgs, config: &ManifestConfig) -> Result<()> {
    let source = read_input(&args.input)?;
    let (_, manifest) = prepare(&source, &args.input, config)?;

    let mut formatted = if args.pretty {
        serde_json::to_string_pretty(&manifest)?
    } else {
        serde_json::to_string(&manifest)?
    };
    formatted.push('\n');

    write_output(args.output.as_deref(), &formatted)?;
    if let Some(path) = &args.output {
        log!("query"; "wrote output to {}", path.display());
    }
    Ok(())
}
