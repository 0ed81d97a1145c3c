//! Static rule tables
//!
//! Every table here is an ordered slice. The codec drivers walk them front to
//! back, so the position of a rule is part of its meaning.

/// One encode step: every `literal` becomes `entity`
pub struct EncodeRule {
    pub literal: char,
    pub entity: &'static str,
}

/// One decode step: any of `forms` (matched case-insensitively) becomes `literal`
pub struct DecodeRule {
    pub forms: &'static [&'static str],
    pub literal: char,
}

// `&` must stay first: every later replacement introduces a literal `&`.
pub const ENCODE_RULES: &[EncodeRule] = &[
    EncodeRule { literal: '&', entity: "&amp;" },
    EncodeRule { literal: '<', entity: "&lt;" },
    EncodeRule { literal: '>', entity: "&gt;" },
    EncodeRule { literal: '(', entity: "&#40;" },
    EncodeRule { literal: ')', entity: "&#41;" },
    EncodeRule { literal: '[', entity: "&#91;" },
    EncodeRule { literal: ']', entity: "&#93;" },
    EncodeRule { literal: '{', entity: "&#123;" },
    EncodeRule { literal: '}', entity: "&#125;" },
    EncodeRule { literal: '"', entity: "&quot;" },
    EncodeRule { literal: '\u{201C}', entity: "&#8220;" },
    EncodeRule { literal: '\u{201D}', entity: "&#8221;" },
    EncodeRule { literal: '\'', entity: "&apos;" },
    EncodeRule { literal: '\u{2018}', entity: "&#8216;" },
    EncodeRule { literal: '\u{2019}', entity: "&#8217;" },
    EncodeRule { literal: '/', entity: "&#47;" },
    EncodeRule { literal: '\\', entity: "&#92;" },
    EncodeRule { literal: '£', entity: "&#163;" },
    EncodeRule { literal: '€', entity: "&#8364;" },
    EncodeRule { literal: '©', entity: "&#169;" },
    EncodeRule { literal: '®', entity: "&#174;" },
    EncodeRule { literal: '™', entity: "&#8482;" },
    EncodeRule { literal: '@', entity: "&#64;" },
];

pub const DECODE_RULES: &[DecodeRule] = &[
    DecodeRule { forms: &["%26", "&#38;", "&amp;"], literal: '&' },
    DecodeRule { forms: &["%A0", "&#160;", "&nbsp;"], literal: ' ' },
    DecodeRule { forms: &["%3C", "&#60;", "&lt;"], literal: '<' },
    DecodeRule { forms: &["%3E", "&#62;", "&gt;"], literal: '>' },
    DecodeRule { forms: &["%28", "&#40;"], literal: '(' },
    DecodeRule { forms: &["%29", "&#41;"], literal: ')' },
    DecodeRule { forms: &["%5B", "&#91;"], literal: '[' },
    DecodeRule { forms: &["%5D", "&#93;"], literal: ']' },
    DecodeRule { forms: &["%7B", "&#123;"], literal: '{' },
    DecodeRule { forms: &["%7D", "&#125;"], literal: '}' },
    DecodeRule { forms: &["%22", "&#34;", "&quot;"], literal: '"' },
    DecodeRule { forms: &["%93", "&#8220;", "&ldquo;"], literal: '\u{201C}' },
    DecodeRule { forms: &["%94", "&#8221;", "&rdquo;"], literal: '\u{201D}' },
    DecodeRule { forms: &["%27", "&#39;", "&apos;"], literal: '\'' },
    DecodeRule { forms: &["%91", "&#8216;", "&lsquo;"], literal: '\u{2018}' },
    DecodeRule { forms: &["%92", "&#8217;", "&rsquo;"], literal: '\u{2019}' },
    DecodeRule { forms: &["%2F", "&#47;", "&frasl;"], literal: '/' },
    DecodeRule { forms: &["%5C", "&#92;"], literal: '\\' },
    DecodeRule { forms: &["%A3", "&#163;", "&pound;"], literal: '£' },
    DecodeRule { forms: &["%80", "&#8364;", "&euro;"], literal: '€' },
    DecodeRule { forms: &["%A9", "&#169;", "&copy;"], literal: '©' },
    DecodeRule { forms: &["%AE", "&#174;", "&reg;"], literal: '®' },
    DecodeRule { forms: &["%99", "&#8482;", "&#153;", "&trade;"], literal: '™' },
    DecodeRule { forms: &["%40", "&#64;"], literal: '@' },
];

/// Fragments that betray markup once text is decoded and lower-cased
pub const TAG_MARKERS: &[&str] = &["</", "/>", "\">", "<span", "<p", "<br"];
