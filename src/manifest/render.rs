//! Manifest serialization and page edits.

use super::Manifest;
use crate::page::EditAnchors;
use crate::page::edit::Directive;
use crate::utils::html::escape_script_json;
use crate::utils::mime::types;

/// Fragment id of the embedded manifest script.
pub const MANIFEST_ID: &str = "pub_manifest";

/// Result of rendering: the JSON text plus edits for the caller to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// Indented JSON, as embedded (before script escaping).
    pub json: String,
    pub directives: Vec<Directive>,
}

/// Serialize `manifest` and describe where it goes in the page.
///
/// Directives, in order: `role="doc-toc"` on the ToC landmark (when
/// anchored), the `rel="publication"` link and the JSON-LD script, both just
/// before `</head>`.
pub fn render(manifest: &Manifest, anchors: &EditAnchors) -> serde_json::Result<RenderOutput> {
    let json = serde_json::to_string_pretty(manifest)?;
    let mut directives = Vec::with_capacity(3);

    if let Some(at) = anchors.toc {
        directives.push(Directive::SetAttribute {
            at,
            name: "role",
            value: "doc-toc".into(),
        });
    }

    directives.push(Directive::Insert {
        at: anchors.head_close,
        html: format!("<link rel=\"publication\" href=\"#{MANIFEST_ID}\">\n"),
    });
    directives.push(Directive::Insert {
        at: anchors.head_close,
        html: format!(
            "<script id=\"{MANIFEST_ID}\" type=\"{}\">{}</script>\n",
            types::JSON_LD,
            escape_script_json(&json)
        ),
    });

    Ok(RenderOutput { json, directives })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ManifestConfig;
    use crate::manifest::build;
    use crate::page::{self, edit};

    const CONFIG: &str = r#"
shortName = "payment-request"
specStatus = "WD"

[[editors]]
name = "A"
company = "C"
"#;

    const PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<title>Payment Request API</title>
<link rel="canonical" href="https://www.w3.org/TR/payment-request/">
</head>
<body>
<nav id="toc"><h2>Table of Contents</h2></nav>
<p>Published <time class="dt-published" datetime="2024-05-01">1 May 2024</time></p>
<img src="pic.png" alt="cap">
<a href="#intro">Intro</a>
<a href="https://example.com/x">Elsewhere</a>
<a href="pic.png">Picture</a>
</body>
</html>
"##;

    fn run(source: &str) -> (RenderOutput, String) {
        let config = ManifestConfig::parse(CONFIG, crate::config::ConfigFormat::Toml).unwrap();
        let facts = page::read(source).unwrap();
        let manifest = build(&config, &facts);
        let output = render(&manifest, &facts.anchors).unwrap();
        let html = edit::apply(source, &output.directives);
        (output, html)
    }

    #[test]
    fn test_head_insertions() {
        let (output, html) = run(PAGE);
        assert_eq!(output.directives.len(), 3);

        let head_end = html.find("</head>").unwrap();
        let head = &html[..head_end];
        assert!(head.contains("<link rel=\"publication\" href=\"#pub_manifest\">"));
        assert!(head.contains("<script id=\"pub_manifest\" type=\"application/ld+json\">"));
        assert!(head.find("rel=\"publication\"") < head.find("id=\"pub_manifest\""));
    }

    #[test]
    fn test_insertion_skips_commented_head_close() {
        let source = PAGE.replace(
            "<title>",
            "<!-- moved </head> marker --><script>let s = \"</head>\";</script><title>",
        );
        let (_, html) = run(&source);

        let comment_end = html.find("marker -->").unwrap();
        let script_at = html.find("<script id=\"pub_manifest\"").unwrap();
        let link_at = html.find("<link rel=\"publication\"").unwrap();
        assert!(link_at > comment_end);
        assert!(script_at > comment_end);
        assert!(html[script_at..].contains("</script>\n</head>\n<body>"));
    }

    #[test]
    fn test_empty_reference_attributes_skipped() {
        let source = PAGE.replace(
            "</body>",
            "<a href=\"\">self</a><img src=\"\" alt=\"blank\"><object data=\"\"></object>\n</body>",
        );
        let (output, _) = run(&source);
        let value: serde_json::Value = serde_json::from_str(&output.json).unwrap();
        let resources = value["resources"].as_array().unwrap();
        assert!(resources.iter().all(|r| r["url"] != ""));
        assert!(resources.iter().all(|r| r["description"] != "blank"));

        let (plain, _) = run(PAGE);
        assert_eq!(output.json, plain.json);
    }

    #[test]
    fn test_toc_role() {
        let (_, html) = run(PAGE);
        assert!(html.contains("<nav role=\"doc-toc\" id=\"toc\">"));
    }

    #[test]
    fn test_json_indented_and_parseable() {
        let (output, html) = run(PAGE);
        assert!(output.json.starts_with("{\n  \"@context\": ["));

        let start = html.find("application/ld+json\">").unwrap() + "application/ld+json\">".len();
        let end = start + html[start..].find("</script>").unwrap();
        let embedded: serde_json::Value = serde_json::from_str(&html[start..end]).unwrap();
        let direct: serde_json::Value = serde_json::from_str(&output.json).unwrap();
        assert_eq!(embedded, direct);

        let resources = embedded["resources"].as_array().unwrap();
        let pic: Vec<_> = resources.iter().filter(|r| r["url"] == "pic.png").collect();
        assert_eq!(pic.len(), 1);
        assert_eq!(pic[0]["encodingFormat"], "image/png");
        assert_eq!(pic[0]["description"], "cap");
        assert!(resources.iter().all(|r| r["url"] != "#intro"));
        assert!(resources.iter().all(|r| r["url"] != "https://example.com/x"));
    }

    #[test]
    fn test_rest_of_document_untouched() {
        let (output, html) = run(PAGE);
        let inserted: usize = output.directives.iter().map(|d| d.render().len()).sum();
        assert_eq!(html.len(), PAGE.len() + inserted);
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_idempotent_manifest() {
        let (first, _) = run(PAGE);
        let (second, _) = run(PAGE);
        assert_eq!(first.json, second.json);
        assert_eq!(first.directives, second.directives);
    }

    #[test]
    fn test_script_close_in_values_escaped() {
        let mut config =
            ManifestConfig::parse(CONFIG, crate::config::ConfigFormat::Toml).unwrap();
        config.editors = Some(vec![crate::config::Person::new("</script><b>")]);
        let facts = page::read(PAGE).unwrap();
        let output = render(&build(&config, &facts), &facts.anchors).unwrap();

        let Directive::Insert { html, .. } = &output.directives[2] else {
            panic!("expected script insertion");
        };
        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.contains("<\\/script><b>"));
    }
}
