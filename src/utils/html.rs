//! HTML attribute escaping for generated markup.

use std::borrow::Cow;

/// Characters that terminate or corrupt a quoted attribute value.
const ATTR_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

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

/// Escape a value for use inside a double-quoted HTML attribute.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape_attr(r#"a "b""#), "a &quot;b&quot;");
/// assert_eq!(escape_attr("https://example.com"), "https://example.com"); // No allocation
/// ```
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(ATTR_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attr_plain() {
        let result = escape_attr("https://github.com/alice");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "https://github.com/alice");
    }

    #[test]
    fn test_escape_attr_special_chars() {
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_attr("a&b"), "a&amp;b");
        assert_eq!(escape_attr("<x>"), "&lt;x&gt;");
        assert_eq!(escape_attr("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_attr_query_string() {
        assert_eq!(
            escape_attr("https://x.com/?a=1&b=2"),
            "https://x.com/?a=1&amp;b=2"
        );
    }

    #[test]
    fn test_escape_attr_empty() {
        assert_eq!(escape_attr(""), "");
    }
}
