//! Entity codec
//!
//! Converts literal markup-sensitive characters to entities and back. Both
//! directions are a fixed sequence of global find-and-replace steps driven by
//! the ordered tables in [`crate::config`].

use crate::config::{DECODE_RULES, ENCODE_RULES};
use regex::{NoExpand, Regex, RegexBuilder};
use std::sync::LazyLock;

/// Compiled decode matchers, one per [`crate::config::DecodeRule`], in table order
static DECODE_MATCHERS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    DECODE_RULES
        .iter()
        .map(|rule| {
            let alternation = rule
                .forms
                .iter()
                .map(|form| regex::escape(form))
                .collect::<Vec<_>>()
                .join("|");
            // Forms are ASCII; ASCII-only folding keeps `s` from matching U+017F.
            let matcher = RegexBuilder::new(&alternation)
                .case_insensitive(true)
                .unicode(false)
                .build()
                .expect("decode forms are escaped literals");
            (matcher, rule.literal.to_string())
        })
        .collect()
});

/// Encode markup-sensitive characters as entities
///
/// Every occurrence of each supported character is replaced by its canonical
/// entity; everything else passes through unchanged.
///
/// # Examples
///
/// ```
/// use entkit::codec::encode;
///
/// assert_eq!(encode("Fish & Chips"), "Fish &amp; Chips");
/// assert_eq!(encode("<b>"), "&lt;b&gt;");
/// ```
pub fn encode(input: &str) -> String {
    let mut value = input.to_owned();
    for rule in ENCODE_RULES {
        if value.contains(rule.literal) {
            value = value.replace(rule.literal, rule.entity);
        }
    }
    value
}

/// Decode entities back into literal characters
///
/// Each literal has several recognised surface forms (percent-escaped,
/// numeric, named) that are all treated as synonyms. Matching ignores ASCII
/// case. Rules run in table order over the cumulative result, so an escaped
/// ampersand decoded early can complete a later entity: `&amp;lt;` decodes
/// to `<`.
///
/// # Examples
///
/// ```
/// use entkit::codec::decode;
///
/// assert_eq!(decode("It&#39;s &AMP; %40home"), "It's & @home");
/// ```
pub fn decode(input: &str) -> String {
    let mut value = input.to_owned();
    for (matcher, literal) in DECODE_MATCHERS.iter() {
        if matcher.is_match(&value) {
            value = matcher
                .replace_all(&value, NoExpand(literal.as_str()))
                .into_owned();
        }
    }
    value
}
