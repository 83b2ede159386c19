// src/core/sanitize.rs

/// Decode the handful of entities the jar page actually emits.
/// `&nbsp;` becomes a plain space so it cannot survive into a digit group.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Strip everything but ASCII digits and parse what is left.
/// Tolerates any thousands separator the page uses (space, NBSP,
/// comma); an empty digit string reads as 0.
pub fn parse_amount(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_strips_separators() {
        assert_eq!(parse_amount("50 000"), 50_000);
        assert_eq!(parse_amount("115\u{a0}000"), 115_000);
        assert_eq!(parse_amount("1,234,567"), 1_234_567);
        assert_eq!(parse_amount(" 42 "), 42);
    }

    #[test]
    fn parse_amount_empty_is_zero() {
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("грн"), 0);
    }

    #[test]
    fn normalize_ws_squashes_runs() {
        assert_eq!(normalize_ws("  a \t b\n\nc  "), "a b c");
    }
}
