//! Link classification utilities.

/// Syntactic classification of a reference found in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Absolute `http://`/`https://` URL or `mailto:` URI.
    External,
    /// Pure fragment/anchor link (#section).
    Fragment,
    /// Anything else: resolved against the document's own location.
    Relative,
}

/// Schemes that make a reference absolute for manifest purposes.
const EXTERNAL_PREFIXES: [&str; 3] = ["http://", "https://", "mailto:"];

impl LinkKind {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &str) -> Self {
        if link.starts_with('#') {
            Self::Fragment
        } else if Self::is_external(link) {
            Self::External
        } else {
            Self::Relative
        }
    }

    /// Check if link starts with one of the external schemes (ASCII case-insensitive).
    #[inline]
    pub fn is_external(link: &str) -> bool {
        EXTERNAL_PREFIXES.iter().any(|prefix| {
            link.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    }

    /// Check if link is relative (becomes a manifest resource).
    #[inline]
    pub fn is_relative(link: &str) -> bool {
        Self::parse(link) == Self::Relative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external() {
        assert_eq!(LinkKind::parse("https://example.com/x"), LinkKind::External);
        assert_eq!(LinkKind::parse("http://example.com"), LinkKind::External);
        assert_eq!(LinkKind::parse("mailto:user@example.com"), LinkKind::External);
        // Scheme match ignores case
        assert_eq!(LinkKind::parse("HTTPS://EXAMPLE.COM"), LinkKind::External);
    }

    #[test]
    fn test_parse_fragment() {
        assert_eq!(LinkKind::parse("#section"), LinkKind::Fragment);
        assert_eq!(LinkKind::parse("#"), LinkKind::Fragment);
    }

    #[test]
    fn test_parse_relative() {
        assert_eq!(LinkKind::parse("pic.png"), LinkKind::Relative);
        assert_eq!(LinkKind::parse("../other/page.html#top"), LinkKind::Relative);
        assert_eq!(LinkKind::parse("/site-root.css"), LinkKind::Relative);
        // Only http(s) and mailto count as absolute
        assert_eq!(LinkKind::parse("tel:+1234567890"), LinkKind::Relative);
    }

    #[test]
    fn test_is_relative() {
        assert!(LinkKind::is_relative("img/logo.svg"));
        assert!(!LinkKind::is_relative("#frag"));
        assert!(!LinkKind::is_relative("https://example.com/x"));
        assert!(!LinkKind::is_relative("mailto:a@b.c"));
        // Shorter than any prefix
        assert!(LinkKind::is_relative("ht"));
    }
}
