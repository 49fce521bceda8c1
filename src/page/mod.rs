//! Rendered page reading.
//!
//! Parses the final HTML with `tl` and extracts everything the manifest
//! builder consumes into a plain [`PageFacts`] record, so the builder itself
//! never touches markup. Required markers are checked here:
//!
//! | Marker            | Selector               | Attribute  | Missing   |
//! |-------------------|------------------------|------------|-----------|
//! | canonical URL     | `link[rel=canonical]`  | `href`     | fatal     |
//! | publication date  | `time.dt-published`    | `datetime` | fatal     |
//! | table of contents | `nav#toc`              | -          | skipped   |
//! | ORCID usage       | `.orcid`               | -          | skipped   |

pub mod edit;
mod error;
mod scan;

pub use error::{Marker, PageError};
pub use scan::{RefSource, Reference};

use tl::{HTMLTag, Node, NodeHandle, Parser};

use crate::debug;
use crate::utils::html::{collapse_whitespace, find_head_close, unescape};

/// Byte offsets in the source text where output is spliced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditAnchors {
    /// Start of the `</head>` closing tag.
    pub head_close: usize,
    /// Just after `<nav` of the ToC landmark, when it still needs a role.
    pub toc: Option<usize>,
}

/// Everything the manifest builder needs from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFacts {
    pub canonical_url: String,
    pub date_published: String,
    /// `<title>` text, whitespace collapsed.
    pub title: Option<String>,
    /// `lang` of the root element.
    pub language: Option<String>,
    pub has_orcid: bool,
    /// References in scan order, unfiltered.
    pub references: Vec<(RefSource, Reference)>,
    pub anchors: EditAnchors,
}

#[cfg(test)]
impl PageFacts {
    /// Facts for a page with only the required markers.
    pub fn new(canonical_url: impl Into<String>, date_published: impl Into<String>) -> Self {
        Self {
            canonical_url: canonical_url.into(),
            date_published: date_published.into(),
            title: None,
            language: None,
            has_orcid: false,
            references: Vec::new(),
            anchors: EditAnchors {
                head_close: 0,
                toc: None,
            },
        }
    }
}

/// Parse `source` and extract [`PageFacts`].
pub fn read(source: &str) -> Result<PageFacts, PageError> {
    let dom = tl::parse(source, tl::ParserOptions::default())
        .map_err(|err| PageError::Parse(format!("{err:?}")))?;
    let parser = dom.parser();
    let tags = collect_tags(dom.children(), parser);

    let canonical_url = required(&tags, Marker::CanonicalUrl, |tag| {
        is_tag(tag, "link") && has_token(tag, "rel", "canonical")
    })?;
    let date_published = required(&tags, Marker::PublishDate, |tag| {
        is_tag(tag, "time") && has_class(tag, "dt-published")
    })?;
    let head_close = find_head_close(source).ok_or(PageError::MissingHead)?;

    let title = tags
        .iter()
        .find(|tag| is_tag(tag, "title"))
        .map(|tag| collapse_whitespace(&unescape(&tag.inner_text(parser))))
        .filter(|text| !text.is_empty());
    let language = tags
        .iter()
        .find(|tag| is_tag(tag, "html"))
        .and_then(|tag| attr(tag, "lang"));
    let has_orcid = tags.iter().any(|tag| has_class(tag, "orcid"));

    let references = scan::scan_references(&tags);
    debug!("scan"; "{} reference-bearing element(s)", references.len());

    Ok(PageFacts {
        canonical_url,
        date_published,
        title,
        language,
        has_orcid,
        references,
        anchors: EditAnchors {
            head_close,
            toc: toc_anchor(&tags, parser, source),
        },
    })
}

/// Find the first element matching `matches` and read the marker's attribute.
fn required(
    tags: &[&HTMLTag<'_>],
    marker: Marker,
    matches: impl Fn(&HTMLTag<'_>) -> bool,
) -> Result<String, PageError> {
    let tag = tags
        .iter()
        .find(|tag| matches(**tag))
        .ok_or(PageError::MissingMarker { marker })?;
    attr(tag, marker.attribute()).ok_or(PageError::MissingAttribute { marker })
}

/// Insertion point for `role="doc-toc"` on `nav#toc`.
fn toc_anchor(tags: &[&HTMLTag<'_>], parser: &Parser<'_>, source: &str) -> Option<usize> {
    let nav = tags
        .iter()
        .find(|tag| is_tag(tag, "nav") && attr(tag, "id").as_deref() == Some("toc"))?;

    if nav.attributes().get("role").is_some() {
        debug!("toc"; "nav#toc already has a role, leaving it untouched");
        return None;
    }

    let (start, _) = nav.boundaries(parser);
    // Raw span may begin at the tag name rather than at `<`
    let start = if source.as_bytes().get(start) == Some(&b'<') {
        start
    } else {
        start.checked_sub(1)?
    };
    let at = start + "<nav".len();
    match source.get(start..at) {
        Some(open) if open.eq_ignore_ascii_case("<nav") => Some(at),
        _ => {
            debug!("toc"; "unexpected markup at offset {}, skipping role", start);
            None
        }
    }
}

/// Flatten the tree into element tags, in document (pre-)order.
fn collect_tags<'p, 'a>(roots: &[NodeHandle], parser: &'p Parser<'a>) -> Vec<&'p HTMLTag<'a>> {
    let mut tags = Vec::new();
    let mut stack: Vec<NodeHandle> = roots.iter().rev().copied().collect();

    while let Some(handle) = stack.pop() {
        let Some(Node::Tag(tag)) = handle.get(parser) else {
            continue;
        };
        tags.push(tag);

        let children: Vec<NodeHandle> = tag.children().top().iter().copied().collect();
        stack.extend(children.into_iter().rev());
    }

    tags
}

// =============================================================================
// Tag helpers
// =============================================================================

/// Check the tag name (ASCII case-insensitive).
#[inline]
fn is_tag(tag: &HTMLTag<'_>, name: &str) -> bool {
    tag.name().as_utf8_str().eq_ignore_ascii_case(name)
}

/// Read an attribute, entity-decoded. Missing and empty values are `None`.
fn attr(tag: &HTMLTag<'_>, name: &'static str) -> Option<String> {
    let value = tag.attributes().get(name).flatten()?;
    let value = unescape(&value.as_utf8_str()).into_owned();
    (!value.is_empty()).then_some(value)
}

/// Check whether a whitespace-separated attribute contains `token`.
fn has_token(tag: &HTMLTag<'_>, name: &'static str, token: &str) -> bool {
    attr(tag, name).is_some_and(|value| {
        value
            .split_ascii_whitespace()
            .any(|t| t.eq_ignore_ascii_case(token))
    })
}

#[inline]
fn has_class(tag: &HTMLTag<'_>, class: &str) -> bool {
    attr(tag, "class").is_some_and(|value| value.split_ascii_whitespace().any(|c| c == class))
}
