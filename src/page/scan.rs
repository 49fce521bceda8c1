//! Reference scanning over `object`, `img`, `a` and `script` elements.

use tl::HTMLTag;

use super::{attr, has_class, is_tag};

/// Element category a reference was found on, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefSource {
    /// `<object data>`
    Object,
    /// `<img src>`
    Img,
    /// `<a href>`
    Anchor,
    /// `<script src>`, unless marked `class="remove"`
    Script,
}

impl RefSource {
    /// Fixed scan order.
    pub const ALL: [Self; 4] = [Self::Object, Self::Img, Self::Anchor, Self::Script];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Img => "img",
            Self::Anchor => "a",
            Self::Script => "script",
        }
    }

    /// Attribute holding the reference.
    pub const fn url_attr(self) -> &'static str {
        match self {
            Self::Object => "data",
            Self::Img | Self::Script => "src",
            Self::Anchor => "href",
        }
    }
}

/// A reference-bearing element as found in the markup.
///
/// Values are entity-decoded; empty attributes are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reference {
    pub url: String,
    /// Explicit `type` attribute.
    pub media_type: Option<String>,
    /// `alt` (img only).
    pub alt: Option<String>,
    /// `rel` (a only).
    pub rel: Option<String>,
    /// `title` (a only).
    pub title: Option<String>,
}

impl Reference {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Collect references in scan order: all objects, then images, anchors, scripts.
pub(super) fn scan_references(tags: &[&HTMLTag<'_>]) -> Vec<(RefSource, Reference)> {
    let mut refs = Vec::new();

    for source in RefSource::ALL {
        for tag in tags.iter().filter(|t| is_tag(t, source.tag())) {
            if source == RefSource::Script && has_class(tag, "remove") {
                continue;
            }
            let Some(url) = attr(tag, source.url_attr()) else {
                continue;
            };

            refs.push((source, read_reference(tag, source, url)));
        }
    }

    refs
}

fn read_reference(tag: &HTMLTag<'_>, source: RefSource, url: String) -> Reference {
    let mut reference = Reference::new(url);
    reference.media_type = attr(tag, "type");

    match source {
        RefSource::Img => reference.alt = attr(tag, "alt"),
        RefSource::Anchor => {
            reference.rel = attr(tag, "rel");
            reference.title = attr(tag, "title");
        }
        RefSource::Object | RefSource::Script => {}
    }

    reference
}
