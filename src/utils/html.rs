//! HTML utility functions.
//!
//! Provides common HTML processing functions:
//! - `escape_attr()` - entity escaping for attribute values
//! - `unescape()` - decode entities in raw attribute values
//! - `escape_script_json()` - keep JSON from closing its `<script>` early
//! - `find_head_close()` - locate the `</head>` tag in source text

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML attribute values.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Unescape HTML entities back to characters.
///
/// Handles common named entities and numeric character references.
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '&' {
            result.push(c);
            continue;
        }

        // Collect entity
        let mut entity = String::new();
        let mut terminated = false;
        while let Some(&next) = chars.peek() {
            if next == ';' {
                chars.next();
                terminated = true;
                break;
            }
            if entity.len() > 10 || !(next.is_ascii_alphanumeric() || next == '#') {
                break;
            }
            entity.push(next);
            chars.next();
        }

        if !terminated {
            result.push('&');
            result.push_str(&entity);
            continue;
        }

        match entity.as_str() {
            "lt" => result.push('<'),
            "gt" => result.push('>'),
            "amp" => result.push('&'),
            "quot" => result.push('"'),
            "apos" => result.push('\''),
            "nbsp" => result.push('\u{00A0}'),
            s if s.starts_with('#') => {
                let code = if s.starts_with("#x") || s.starts_with("#X") {
                    u32::from_str_radix(&s[2..], 16).ok()
                } else {
                    s[1..].parse().ok()
                };
                match code.and_then(char::from_u32) {
                    Some(c) => result.push(c),
                    None => {
                        result.push('&');
                        result.push_str(&entity);
                        result.push(';');
                    }
                }
            }
            _ => {
                result.push('&');
                result.push_str(&entity);
                result.push(';');
            }
        }
    }

    Cow::Owned(result)
}

/// Make serialized JSON safe to embed as the text of a `<script>` element.
///
/// `</` becomes `<\/`, which JSON parsers read back as the same string.
pub fn escape_script_json(json: &str) -> Cow<'_, str> {
    if json.contains("</") {
        Cow::Owned(json.replace("</", "<\\/"))
    } else {
        Cow::Borrowed(json)
    }
}

// =============================================================================
// Source Lookup
// =============================================================================

/// Elements whose content is text, not markup.
const RAW_TEXT: [&[u8]; 4] = [b"script", b"style", b"textarea", b"title"];

/// Byte offset of the `</head>` closing tag (ASCII case-insensitive).
///
/// Walks the markup rather than searching the text, so `</head>` inside a
/// comment, a quoted attribute value or the content of a raw-text element
/// (`script`, `style`, `textarea`, `title`) is not taken for the real one.
/// Unterminated comments or tags yield `None`.
pub fn find_head_close(source: &str) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut pos = 0;

    while let Some(offset) = find_bytes(bytes, b"<", pos) {
        let rest = &bytes[offset..];
        pos = if rest.starts_with(b"<!--") {
            find_bytes(bytes, b"-->", offset + 4)? + 3
        } else if rest.starts_with(b"</") {
            let (name, _) = tag_name(bytes, offset + 2);
            if name.eq_ignore_ascii_case(b"head") {
                return Some(offset);
            }
            offset + 2
        } else if rest.get(1).is_some_and(u8::is_ascii_alphabetic) {
            let (name, name_end) = tag_name(bytes, offset + 1);
            let content = skip_tag(bytes, name_end)?;
            if RAW_TEXT.iter().any(|raw| name.eq_ignore_ascii_case(raw)) {
                find_close_tag(bytes, name, content)?
            } else {
                content
            }
        } else {
            offset + 1
        };
    }

    None
}

fn find_bytes(bytes: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

/// Tag name starting at `start`, and the offset just past it.
fn tag_name(bytes: &[u8], start: usize) -> (&[u8], usize) {
    let tail = bytes.get(start..).unwrap_or_default();
    let len = tail
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'-')
        .count();
    (&tail[..len], start + len)
}

/// Offset just past the `>` ending a start tag; quoted values may contain `>`.
fn skip_tag(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote = None;
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return Some(i + 1),
            (None, _) => {}
        }
    }
    None
}

/// Offset of the `</name` tag closing a raw-text element.
fn find_close_tag(bytes: &[u8], name: &[u8], from: usize) -> Option<usize> {
    let mut pos = from;
    loop {
        let offset = find_bytes(bytes, b"</", pos)?;
        let (candidate, _) = tag_name(bytes, offset + 2);
        if candidate.eq_ignore_ascii_case(name) {
            return Some(offset);
        }
        pos = offset + 2;
    }
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
