//! String helpers built around the entity codec

use crate::codec::decode;
use crate::config::TAG_MARKERS;

/// Strip leading and trailing whitespace
pub fn trim(input: &str) -> &str {
    input.trim()
}

/// True for empty or whitespace-only text
pub fn is_empty(input: &str) -> bool {
    input.is_empty() || trim(input).is_empty()
}

/// Check whether text carries traces of common HTML/XML tags
///
/// Entities are decoded first, so escaped markup such as `&lt;p&gt;` counts.
///
/// # Examples
///
/// ```
/// use entkit::text::contains_tags;
///
/// assert!(contains_tags("Hello <strong>World</strong>"));
/// assert!(contains_tags("Hello &lt;p&gt;World&lt;&#47;p&gt;"));
/// assert!(!contains_tags("Hello World"));
/// ```
pub fn contains_tags(input: &str) -> bool {
    if is_empty(input) {
        return false;
    }
    let value = decode(input).to_lowercase();
    TAG_MARKERS.iter().any(|marker| value.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        assert_eq!(trim("           Hello World             "), "Hello World");
        assert_eq!(trim("\t\nHello\r\n"), "Hello");
        assert_eq!(trim(""), "");
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(""));
        assert!(is_empty("     "));
        assert!(is_empty("\t\n"));
    }

    #[test]
    fn test_is_not_empty() {
        assert!(!is_empty("''"));
        assert!(!is_empty("hello world"));
        assert!(!is_empty("  hello world  "));
    }

    #[test]
    fn test_contains_tags_literal_markup() {
        assert!(contains_tags("Hello <span class=\"earth\">World</span>"));
        assert!(contains_tags("Hello <strong>World</strong>"));
        assert!(contains_tags("line<br>break"));
        assert!(contains_tags("Hello \"> World"));
    }

    #[test]
    fn test_contains_tags_encoded_markup() {
        assert!(contains_tags("Hello &lt;p&gt;World&lt;&#47;p&gt;"));
        assert!(contains_tags("%3CBR%3E"));
    }

    #[test]
    fn test_contains_tags_ignores_case() {
        assert!(contains_tags("<SPAN>shout"));
        assert!(contains_tags("<P>"));
    }

    #[test]
    fn test_contains_tags_plain_text() {
        assert!(!contains_tags("Hello World"));
        assert!(!contains_tags("1 < 2 and 3 > 2"));
        assert!(!contains_tags(""));
        assert!(!contains_tags("   "));
    }
}
