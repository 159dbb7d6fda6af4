use regex::{Captures, Regex};
use std::sync::LazyLock;

static HEX_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#x([0-9a-fA-F]+);").expect("HEX_REF regex should compile"));
static DEC_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(\d+);").expect("DEC_REF regex should compile"));

/// Substituted literally, in this order, after numeric references.
const NAMED: [(&str, &str); 11] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&mdash;", "—"),
    ("&ndash;", "–"),
    ("&hellip;", "…"),
    ("&laquo;", "«"),
    ("&raquo;", "»"),
    ("&nbsp;", " "),
];

/// Decode numeric character references, then the fixed named table.
/// A reference that is not a valid scalar value is left as written.
pub(super) fn decode_entities(text: &str) -> String {
    let text = HEX_REF.replace_all(text, |caps: &Captures| decode_reference(caps, 16));
    let text = DEC_REF.replace_all(&text, |caps: &Captures| decode_reference(caps, 10));
    NAMED
        .iter()
        .fold(text.into_owned(), |acc, (entity, literal)| acc.replace(entity, literal))
}

fn decode_reference(caps: &Captures, radix: u32) -> String {
    u32::from_str_radix(&caps[1], radix)
        .ok()
        .and_then(char::from_u32)
        .map_or_else(|| caps[0].to_string(), String::from)
}
