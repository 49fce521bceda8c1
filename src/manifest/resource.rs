//! Linked resources and the deduplicating resource list.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::core::LinkKind;
use crate::page::{RefSource, Reference};
use crate::utils::mime;

/// One file or URL belonging to the publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedResource {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

impl LinkedResource {
    pub const TYPE: &'static str = "LinkedResource";

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            kind: Self::TYPE,
            url: url.into(),
            encoding_format: None,
            description: None,
            rel: None,
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.encoding_format = Some(format.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    /// Build a resource from a scanned reference.
    ///
    /// Returns `None` for fragment and absolute references.
    pub fn from_reference(source: RefSource, reference: &Reference) -> Option<Self> {
        if !LinkKind::is_relative(&reference.url) {
            return None;
        }

        let url = reference.url.as_str();
        let explicit = reference.media_type.clone();
        let encoding_format = match source {
            RefSource::Script if mime::is_javascript(url) => Some(mime::types::JAVASCRIPT.into()),
            RefSource::Script => explicit,
            RefSource::Object | RefSource::Img | RefSource::Anchor => {
                explicit.or_else(|| mime::sniff(url).map(Into::into))
            }
        };

        let (description, rel) = match source {
            RefSource::Img => (reference.alt.clone(), None),
            RefSource::Anchor => (reference.title.clone(), reference.rel.clone()),
            RefSource::Object | RefSource::Script => (None, None),
        };

        Some(Self {
            kind: Self::TYPE,
            url: reference.url.clone(),
            encoding_format,
            description,
            rel,
        })
    }
}

/// Resource list keyed by `url`: the first entry for a URL wins.
#[derive(Debug, Clone, Default)]
pub struct ResourceList {
    items: Vec<LinkedResource>,
    seen: FxHashSet<String>,
    dropped: usize,
}

impl ResourceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unless the URL is already present. Returns whether it was added.
    pub fn push(&mut self, resource: LinkedResource) -> bool {
        if self.seen.insert(resource.url.clone()) {
            self.items.push(resource);
            true
        } else {
            self.dropped += 1;
            false
        }
    }

    /// Number of entries rejected as duplicates.
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn into_vec(self) -> Vec<LinkedResource> {
        self.items
    }
}

impl Extend<LinkedResource> for ResourceList {
    fn extend<I: IntoIterator<Item = LinkedResource>>(&mut self, iter: I) {
        for resource in iter {
            self.push(resource);
        }
    }
}

impl FromIterator<LinkedResource> for ResourceList {
    fn from_iter<I: IntoIterator<Item = LinkedResource>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(url: &str, alt: Option<&str>) -> Reference {
        Reference {
            alt: alt.map(Into::into),
            ..Reference::new(url)
        }
    }

    #[test]
    fn test_img_sniffs_and_copies_alt() {
        let resource =
            LinkedResource::from_reference(RefSource::Img, &img("pic.png", Some("cap"))).unwrap();
        assert_eq!(resource.encoding_format.as_deref(), Some("image/png"));
        assert_eq!(resource.description.as_deref(), Some("cap"));
        assert_eq!(resource.rel, None);
    }

    #[test]
    fn test_fragment_and_absolute_excluded() {
        for url in ["#frag", "https://example.com/x", "http://a.b/c.png", "mailto:x@y.z"] {
            let reference = Reference::new(url);
            assert_eq!(LinkedResource::from_reference(RefSource::Anchor, &reference), None);
        }
    }

    #[test]
    fn test_explicit_type_wins_over_extension() {
        let reference = Reference {
            media_type: Some("image/x-custom".into()),
            ..Reference::new("figure.png")
        };
        let resource = LinkedResource::from_reference(RefSource::Object, &reference).unwrap();
        assert_eq!(resource.encoding_format.as_deref(), Some("image/x-custom"));
    }

    #[test]
    fn test_unknown_extension_omits_format() {
        let resource =
            LinkedResource::from_reference(RefSource::Anchor, &Reference::new("other.html"))
                .unwrap();
        assert_eq!(resource.encoding_format, None);
    }

    #[test]
    fn test_anchor_copies_rel_and_title() {
        let reference = Reference {
            rel: Some("alternate".into()),
            title: Some("PDF".into()),
            alt: Some("ignored".into()),
            ..Reference::new("spec.pdf")
        };
        let resource = LinkedResource::from_reference(RefSource::Anchor, &reference).unwrap();
        assert_eq!(resource.encoding_format.as_deref(), Some("application/pdf"));
        assert_eq!(resource.rel.as_deref(), Some("alternate"));
        assert_eq!(resource.description.as_deref(), Some("PDF"));
    }

    #[test]
    fn test_script_format() {
        let js = LinkedResource::from_reference(RefSource::Script, &Reference::new("app.js")).unwrap();
        assert_eq!(js.encoding_format.as_deref(), Some("text/javascript"));

        // .js wins over an explicit type
        let module = Reference {
            media_type: Some("module".into()),
            ..Reference::new("app.js")
        };
        let js = LinkedResource::from_reference(RefSource::Script, &module).unwrap();
        assert_eq!(js.encoding_format.as_deref(), Some("text/javascript"));

        let typed = Reference {
            media_type: Some("text/x-template".into()),
            ..Reference::new("template")
        };
        let other = LinkedResource::from_reference(RefSource::Script, &typed).unwrap();
        assert_eq!(other.encoding_format.as_deref(), Some("text/x-template"));

        // No extension sniffing for scripts
        let svg = LinkedResource::from_reference(RefSource::Script, &Reference::new("x.svg")).unwrap();
        assert_eq!(svg.encoding_format, None);
    }

    #[test]
    fn test_list_first_wins() {
        let mut list = ResourceList::new();
        assert!(list.push(LinkedResource::new("a.png").with_description("first")));
        assert!(list.push(LinkedResource::new("b.png")));
        assert!(!list.push(LinkedResource::new("a.png").with_description("second")));

        assert_eq!(list.dropped(), 1);

        let items = list.into_vec();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].url, "a.png");
        assert_eq!(items[0].description.as_deref(), Some("first"));
        assert_eq!(items[1].url, "b.png");
    }

    #[test]
    fn test_serialized_shape() {
        let resource = LinkedResource::new("pic.png").with_format("image/png");
        let json = serde_json::to_string(&resource).unwrap();
        assert_eq!(
            json,
            r#"{"type":"LinkedResource","url":"pic.png","encodingFormat":"image/png"}"#
        );
    }
}
