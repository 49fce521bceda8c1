//! `build`: inject the manifest into the document.

use std::path::Path;

use anyhow::{Context, Result, bail};

use super::BuildArgs;
use super::common::{prepare, read_input, write_output};
use crate::config::ManifestConfig;
use crate::{debug, log};
use crate::manifest::render;
use crate::page::edit;

pub fn run_build(args: &BuildArgs, config: &ManifestConfig) -> Result<()> {
    if args.in_place && args.input == Path::new("-") {
        bail!("--in-place needs a file input, not stdin");
    }

    let source = read_input(&args.input)?;
    let (facts, manifest) = prepare(&source, &args.input, config)?;

    let output = render(&manifest, &facts.anchors).context("failed to serialize manifest")?;
    debug!("build"; "embedding {} bytes of JSON-LD", output.json.len());
    let html = edit::apply(&source, &output.directives);

    let target = if args.in_place {
        Some(args.input.as_path())
    } else {
        args.output.as_deref()
    };
    write_output(target, &html)?;

    if let Some(path) = target {
        log!("build"; "wrote {} ({} resources)", path.display(), manifest.resources.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;
    use std::fs;
    use tempfile::TempDir;

    const PAGE: &str = r#"<html><head><link rel="canonical" href="https://www.w3.org/TR/dom/"></head>
<body><nav id="toc"></nav><time class="dt-published" datetime="2024-02-02"></time>
<img src="fig.svg" alt="Figure"></body></html>"#;

    fn config() -> ManifestConfig {
        let toml = "shortName = \"dom\"\nspecStatus = \"unofficial\"";
        ManifestConfig::parse(toml, ConfigFormat::Toml).unwrap()
    }

    #[test]
    fn test_build_to_output_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("index.html");
        let output = dir.path().join("out.html");
        fs::write(&input, PAGE).unwrap();

        let args = BuildArgs {
            input: input.clone(),
            output: Some(output.clone()),
            in_place: false,
        };
        run_build(&args, &config()).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("<script id=\"pub_manifest\" type=\"application/ld+json\">"));
        assert!(html.contains("\"url\": \"fig.svg\""));
        assert!(html.contains("<nav role=\"doc-toc\" id=\"toc\">"));
        // Input untouched
        assert_eq!(fs::read_to_string(&input).unwrap(), PAGE);
    }

    #[test]
    fn test_build_in_place() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("index.html");
        fs::write(&input, PAGE).unwrap();

        let args = BuildArgs {
            input: input.clone(),
            output: None,
            in_place: true,
        };
        run_build(&args, &config()).unwrap();

        let html = fs::read_to_string(&input).unwrap();
        assert!(html.contains("<link rel=\"publication\" href=\"#pub_manifest\">"));
        assert!(html.contains("UD-watermark.png"));
    }

    #[test]
    fn test_build_missing_marker_fails() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("index.html");
        fs::write(&input, "<html><head></head><body></body></html>").unwrap();

        let args = BuildArgs {
            input: input.clone(),
            output: Some(dir.path().join("out.html")),
            in_place: false,
        };
        let err = run_build(&args, &config()).unwrap_err();
        assert!(format!("{err:#}").contains("canonical URL"));
        assert!(!dir.path().join("out.html").exists());
    }

    #[test]
    fn test_in_place_rejects_stdin() {
        let args = BuildArgs {
            input: "-".into(),
            output: None,
            in_place: true,
        };
        assert!(run_build(&args, &config()).is_err());
    }

    #[test]
    fn test_build_missing_input() {
        let args = BuildArgs {
            input: "/nonexistent/index.html".into(),
            output: None,
            in_place: false,
        };
        assert!(run_build(&args, &config()).is_err());
    }
}
