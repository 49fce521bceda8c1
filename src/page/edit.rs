//! Insertion directives and their application to the page source.
//!
//! The manifest builder never mutates markup. It returns directives; the
//! caller splices them into the original text, leaving every other byte as-is.

use std::borrow::Cow;

use crate::utils::html::escape_attr;

/// A single edit at a byte offset of the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Add ` name="value"` inside an opening tag (offset right after the tag name).
    SetAttribute {
        at: usize,
        name: &'static str,
        value: String,
    },
    /// Insert raw, already-escaped HTML.
    Insert { at: usize, html: String },
}

impl Directive {
    pub const fn offset(&self) -> usize {
        match self {
            Self::SetAttribute { at, .. } | Self::Insert { at, .. } => *at,
        }
    }

    /// Text spliced into the source.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::SetAttribute { name, value, .. } => {
                Cow::Owned(format!(" {name}=\"{}\"", escape_attr(value)))
            }
            Self::Insert { html, .. } => Cow::Borrowed(html),
        }
    }
}

/// Apply directives to `source`.
///
/// Directives sharing an offset are inserted in the order given. Offsets past
/// the end or inside a UTF-8 sequence are clamped back to a char boundary.
pub fn apply(source: &str, directives: &[Directive]) -> String {
    let mut ordered: Vec<&Directive> = directives.iter().collect();
    ordered.sort_by_key(|d| d.offset());

    let extra: usize = ordered.iter().map(|d| d.render().len()).sum();
    let mut out = String::with_capacity(source.len() + extra);
    let mut cursor = 0;

    for directive in ordered {
        let at = floor_char_boundary(source, directive.offset()).max(cursor);
        out.push_str(&source[cursor..at]);
        out.push_str(&directive.render());
        cursor = at;
    }

    out.push_str(&source[cursor..]);
    out
}

fn floor_char_boundary(s: &str, mut at: usize) -> usize {
    if at >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(at) {
        at -= 1;
    }
    at
}
