//! MIME type detection utilities.
//!
//! Only the formats a publication manifest describes by extension are
//! recognized; anything else yields `None` and the field is omitted.

/// Common MIME type constants.
pub mod types {
    pub const HTML: &str = "text/html";
    pub const CSS: &str = "text/css";
    pub const JAVASCRIPT: &str = "text/javascript";
    pub const JSON_LD: &str = "application/ld+json";
    pub const PDF: &str = "application/pdf";

    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const SVG: &str = "image/svg+xml";
    pub const BMP: &str = "image/bmp";
}

/// Guess MIME type from a lowercase file extension string.
pub fn from_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "gif" => Some(types::GIF),
        "png" => Some(types::PNG),
        "bmp" => Some(types::BMP),
        "jpg" | "jpeg" => Some(types::JPEG),
        "svg" => Some(types::SVG),
        "pdf" => Some(types::PDF),
        _ => None,
    }
}

/// Guess MIME type from a URL reference.
///
/// Query string and fragment are ignored, extension match is case-insensitive.
pub fn sniff(url: &str) -> Option<&'static str> {
    let path = strip_query(url);
    let file = path.rsplit('/').next().unwrap_or(path);
    let (_, ext) = file.rsplit_once('.')?;
    from_extension(&ext.to_ascii_lowercase())
}

/// Check whether a script source names a JavaScript file.
pub fn is_javascript(url: &str) -> bool {
    strip_query(url).to_ascii_lowercase().ends_with(".js")
}

/// Cut `?query` and `#fragment` from a reference.
#[inline]
fn strip_query(url: &str) -> &str {
    url.find(['?', '#']).map_or(url, |pos| &url[..pos])
}
