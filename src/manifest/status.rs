//! Status-dependent style assets.
//!
//! Each `specStatus` maps to a stylesheet, an optional logo and an optional
//! watermark. The table is closed; any other value takes the default row,
//! which guesses file names from the uppercased status.

use super::resource::LinkedResource;
use crate::utils::mime::types;

/// Base of the W3C technical report stylesheets.
pub const TR_STYLE_BASE: &str = "https://www.w3.org/StyleSheets/TR/2016/";
/// Base of the community and business group stylesheets.
pub const COMMUNITY_STYLE_BASE: &str = "https://www.w3.org/community/src/css/spec/";

/// Where a stylesheet comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// `COMMUNITY_STYLE_BASE` + lowercase status + `.css`
    Community,
    /// `TR_STYLE_BASE` + `W3C-` + name
    Tr(&'static str),
    /// `TR_STYLE_BASE` + `base.css`
    Base,
}

/// Logo file under `TR_STYLE_BASE/logos/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logo {
    Svg(&'static str),
    Png(&'static str),
}

/// Assets for one row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAssets {
    pub style: Style,
    pub logo: Option<Logo>,
    /// Watermark file under `TR_STYLE_BASE/logos/` (always PNG).
    pub watermark: Option<&'static str>,
}

impl StatusAssets {
    const fn new(style: Style, logo: Option<Logo>, watermark: Option<&'static str>) -> Self {
        Self {
            style,
            logo,
            watermark,
        }
    }
}

const COMMUNITY: StatusAssets = StatusAssets::new(Style::Community, None, None);
const WORKING_DRAFT: StatusAssets =
    StatusAssets::new(Style::Tr("WD"), Some(Logo::Svg("WD")), None);
const GROUP_NOTE: StatusAssets =
    StatusAssets::new(Style::Tr("WG-NOTE"), Some(Logo::Svg("WG-NOTE")), None);
const UNOFFICIAL: StatusAssets = StatusAssets::new(
    Style::Tr("UD"),
    Some(Logo::Png("UD")),
    Some("UD-watermark"),
);
const BASE: StatusAssets = StatusAssets::new(Style::Base, None, None);

/// Known statuses (uppercase).
pub const STATUS_TABLE: [(&str, StatusAssets); 14] = [
    ("CG-DRAFT", COMMUNITY),
    ("CG-FINAL", COMMUNITY),
    ("BG-DRAFT", COMMUNITY),
    ("BG-FINAL", COMMUNITY),
    ("FPWD", WORKING_DRAFT),
    ("LC", WORKING_DRAFT),
    ("WD-NOTE", WORKING_DRAFT),
    ("LC-NOTE", WORKING_DRAFT),
    ("WG-NOTE", GROUP_NOTE),
    ("FPWD-NOTE", GROUP_NOTE),
    ("UNOFFICIAL", UNOFFICIAL),
    ("FINDING", BASE),
    ("FINDING-DRAFT", BASE),
    ("BASE", BASE),
];

/// Look up a status in the closed table.
pub fn lookup(status: &str) -> Option<StatusAssets> {
    STATUS_TABLE
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(status))
        .map(|(_, assets)| *assets)
}

/// Resources for `status`, falling back to the best-effort default row.
pub fn resources(status: &str) -> Vec<LinkedResource> {
    match lookup(status) {
        Some(assets) => assets.resources(status),
        None => default_resources(&status.to_ascii_uppercase()),
    }
}

/// Default row: the uppercased status names both stylesheet and logo.
fn default_resources(upper: &str) -> Vec<LinkedResource> {
    vec![
        stylesheet(format!("{TR_STYLE_BASE}W3C-{upper}")),
        logo(format!("{TR_STYLE_BASE}logos/{upper}.svg"), types::SVG),
    ]
}

impl StatusAssets {
    /// Expand the row into linked resources (stylesheet, logo, watermark).
    pub fn resources(&self, status: &str) -> Vec<LinkedResource> {
        let mut out = Vec::with_capacity(3);

        let style_url = match self.style {
            Style::Community => format!(
                "{COMMUNITY_STYLE_BASE}{}.css",
                status.to_ascii_lowercase()
            ),
            Style::Tr(name) => format!("{TR_STYLE_BASE}W3C-{name}"),
            Style::Base => format!("{TR_STYLE_BASE}base.css"),
        };
        out.push(stylesheet(style_url));

        match self.logo {
            Some(Logo::Svg(name)) => {
                out.push(logo(format!("{TR_STYLE_BASE}logos/{name}.svg"), types::SVG));
            }
            Some(Logo::Png(name)) => {
                out.push(logo(format!("{TR_STYLE_BASE}logos/{name}.png"), types::PNG));
            }
            None => {}
        }

        if let Some(name) = self.watermark {
            out.push(
                LinkedResource::new(format!("{TR_STYLE_BASE}logos/{name}.png"))
                    .with_format(types::PNG)
                    .with_description("Watermark"),
            );
        }

        out
    }
}

fn stylesheet(url: String) -> LinkedResource {
    LinkedResource::new(url)
        .with_format(types::CSS)
        .with_description("Stylesheet")
}

fn logo(url: String, format: &str) -> LinkedResource {
    LinkedResource::new(url)
        .with_format(format)
        .with_description("Status logo")
}
