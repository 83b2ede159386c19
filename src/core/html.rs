// src/core/html.rs

use super::sanitize::{normalize_entities, normalize_ws};

/// ASCII-only lowercase. Keeps byte offsets stable so the result can
/// index back into the original string (tag names are ASCII anyway).
pub fn to_lower_ascii(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Inner text of the first `<open ...>...</close>` block, case-insensitive
/// on the tag names. Attributes on the opening tag are skipped.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower_ascii(s);
    let open = to_lower_ascii(open_pat);
    let close = to_lower_ascii(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Replace every tag with a single space so adjacent text nodes stay
/// separated, then squash whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => {
                in_tag = true;
                out.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Whole document as one whitespace-joined, lowercased text blob.
/// Unicode lowercase here, not ASCII: the amounts pattern keys on
/// Cyrillic keywords.
pub fn flatten(html: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(html))).to_lowercase()
}

/// Text of the document's `<title>` element, cleaned up. `None` when
/// the element is missing or empty.
pub fn title_text(html: &str) -> Option<String> {
    let raw = slice_between_ci(html, "<title", "</title>")?;
    let title = normalize_ws(&normalize_entities(raw));
    if title.is_empty() { None } else { Some(title) }
}
