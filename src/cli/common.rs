//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::ManifestConfig;
use crate::debug;
use crate::manifest::{self, Manifest};
use crate::page::{self, PageFacts};

/// Read the input document; `-` reads stdin.
pub fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read document from stdin")?;
        return Ok(source);
    }

    fs::read_to_string(input).with_context(|| format!("failed to read `{}`", input.display()))
}

/// Read the page and build its manifest.
pub fn prepare(source: &str, input: &Path, config: &ManifestConfig) -> Result<(PageFacts, Manifest)> {
    let facts = page::read(source).with_context(|| format!("invalid page `{}`", input.display()))?;
    let manifest = manifest::build(config, &facts);
    debug!("manifest"; "{} resource(s) for {}", manifest.resources.len(), manifest.id);
    Ok((facts, manifest))
}

/// Write `content` to `path`, or stdout when `path` is `None`.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("failed to write `{}`", path.display()))
        }
        None => {
            use std::io::Write;
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
