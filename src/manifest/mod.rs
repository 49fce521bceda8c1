//! Publication manifest construction.
//!
//! [`build`] is pure: configuration and [`PageFacts`] in, [`Manifest`] out.
//! [`render`] serializes it and produces the page edits.
//!
//! # Resource order
//!
//! ```text
//! baseline (W3C logo, base.css)
//!   → status assets (stylesheet, logo, watermark)
//!   → ORCID logo
//!   → scanned: object → img → a → script
//! ```
//!
//! Duplicates by `url` are dropped as they are appended, so the first
//! occurrence and its attributes win.

mod person;
mod render;
mod resource;
pub mod status;

pub use render::render;
pub use resource::{LinkedResource, ResourceList};

use serde::Serialize;

use crate::config::ManifestConfig;
use crate::debug;
use crate::page::PageFacts;
use crate::utils::mime::types;
use person::PersonEntry;

/// JSON-LD contexts.
pub const CONTEXT: [&str; 2] = ["https://schema.org", "https://www.w3.org/ns/pub-context"];
/// Base of the canonical `id`.
pub const TR_BASE: &str = "https://www.w3.org/TR/";
pub const ORCID_LOGO: &str = "https://orcid.org/assets/vectors/orcid.logo.icon.svg";

/// The publication manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(rename = "@context")]
    pub context: [&'static str; 2],
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_language: Option<String>,
    pub date_published: String,
    pub access_mode: [&'static str; 2],
    pub access_mode_sufficient: [&'static str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<Vec<PersonEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Vec<PersonEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<Vec<PersonEntry>>,
    pub resources: Vec<LinkedResource>,
    pub links: Vec<LinkedResource>,
}

/// Canonical id for a short name.
pub fn canonical_id(short_name: &str) -> String {
    format!("{TR_BASE}{short_name}/")
}

/// Resources every manifest starts with.
fn baseline_resources() -> [LinkedResource; 2] {
    [
        LinkedResource::new(format!("{}logos/W3C", status::TR_STYLE_BASE))
            .with_format(types::SVG)
            .with_description("W3C Logo"),
        LinkedResource::new(format!("{}base.css", status::TR_STYLE_BASE))
            .with_format(types::CSS)
            .with_description("Base stylesheet"),
    ]
}

/// Legal links every manifest carries.
fn baseline_links() -> Vec<LinkedResource> {
    [
        (
            "https://www.w3.org/Consortium/Legal/privacy-statement-20140324",
            "privacy-policy",
            "Privacy Policy",
        ),
        (
            "https://www.w3.org/Consortium/Legal/2015/doc-license",
            "license",
            "Document License",
        ),
        (
            "https://www.w3.org/Consortium/Legal/ipr-notice#Copyright",
            "copyright",
            "Copyright",
        ),
    ]
    .into_iter()
    .map(|(url, rel, description)| {
        LinkedResource::new(url)
            .with_format(types::HTML)
            .with_rel(rel)
            .with_description(description)
    })
    .collect()
}

/// Build the manifest for a page.
pub fn build(config: &ManifestConfig, page: &PageFacts) -> Manifest {
    let mut resources: ResourceList = baseline_resources().into_iter().collect();

    if status::lookup(&config.spec_status).is_none() {
        debug!("manifest"; "unknown specStatus '{}', guessing asset names", config.spec_status);
    }
    resources.extend(status::resources(&config.spec_status));

    if page.has_orcid {
        resources.push(
            LinkedResource::new(ORCID_LOGO)
                .with_format(types::SVG)
                .with_description("ORCID logo"),
        );
    }

    resources.extend(
        page.references
            .iter()
            .filter_map(|(source, reference)| LinkedResource::from_reference(*source, reference)),
    );

    if resources.dropped() > 0 {
        debug!("manifest"; "dropped {} duplicate resource(s)", resources.dropped());
    }

    Manifest {
        context: CONTEXT,
        kind: "TechArticle",
        id: canonical_id(&config.short_name),
        url: page.canonical_url.clone(),
        name: page.title.clone(),
        in_language: page.language.clone(),
        date_published: page.date_published.clone(),
        access_mode: ["textual", "visual"],
        access_mode_sufficient: ["textual"],
        editor: person::entries(config.editors.as_deref()),
        author: person::entries(config.authors.as_deref()),
        creator: person::entries(config.creators.as_deref()),
        resources: resources.into_vec(),
        links: baseline_links(),
    }
}
