use regex::{Captures, Regex};
use std::sync::LazyLock;

static H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h1[^>]*>(.*?)</h1>").expect("H1 regex should compile"));
static H2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h2[^>]*>(.*?)</h2>").expect("H2 regex should compile"));
static H3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h3[^>]*>(.*?)</h3>").expect("H3 regex should compile"));

/// Inline conversions, applied in order.
static INLINE: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?s)<p[^>]*>(.*?)</p>", "${1}\n\n"),
        (r"<br\s*/?>", "\n"),
        (r"<em>(.*?)</em>", "*${1}*"),
        (r"<strong>(.*?)</strong>", "**${1}**"),
        (r"(?s)<blockquote[^>]*>(.*?)</blockquote>", "> ${1}"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        let re = Regex::new(pattern).expect("inline markup regex should compile");
        (re, replacement)
    })
    .collect()
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("TAG regex should compile"));

/// Drop the first `<h1>` (the assembler writes its own chapter heading)
/// and turn the remaining `h1`-`h3` into ATX headings.
pub(super) fn headings(text: &str) -> String {
    let text = H1.replacen(text, 1, "");
    let text = H1.replace_all(&text, |caps: &Captures| atx(1, &caps[1]));
    let text = H2.replace_all(&text, |caps: &Captures| atx(2, &caps[1]));
    H3.replace_all(&text, |caps: &Captures| atx(3, &caps[1]))
        .into_owned()
}

fn atx(level: usize, title: &str) -> String {
    format!("{} {}", "#".repeat(level), title.trim())
}

pub(super) fn inline_markup(text: &str) -> String {
    INLINE.iter().fold(text.to_string(), |acc, (re, replacement)| {
        re.replace_all(&acc, *replacement).into_owned()
    })
}

/// Delete every remaining tag, keeping the text between tags.
pub(super) fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}
