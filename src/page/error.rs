//! Markup errors raised while reading a rendered page.

use std::fmt;
use thiserror::Error;

/// Elements the upstream renderer must have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `<link rel="canonical" href="...">`
    CanonicalUrl,
    /// `<time class="dt-published" datetime="...">`
    PublishDate,
}

impl Marker {
    /// Selector describing where the marker is expected.
    pub const fn selector(self) -> &'static str {
        match self {
            Self::CanonicalUrl => "link[rel=canonical]",
            Self::PublishDate => "time.dt-published",
        }
    }

    /// Attribute carrying the marker's value.
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::CanonicalUrl => "href",
            Self::PublishDate => "datetime",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CanonicalUrl => "canonical URL",
            Self::PublishDate => "publication date",
        };
        write!(f, "{name} (`{}`)", self.selector())
    }
}

/// Fatal page errors: the renderer did not fulfil its contract.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to parse HTML: {0}")]
    Parse(String),

    #[error("required {marker} not found")]
    MissingMarker { marker: Marker },

    #[error("{marker} has no `{attribute}` attribute", attribute = .marker.attribute())]
    MissingAttribute { marker: Marker },

    #[error("document has no `</head>` to insert the manifest into")]
    MissingHead,
}
