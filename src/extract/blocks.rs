use super::entities::decode_entities;
use super::markup::strip_tags;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static TERMINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div[^>]*class="terminal"[^>]*>(.*?)</div>"#)
        .expect("TERMINAL regex should compile")
});
static IMG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<img[^>]*>").expect("IMG regex should compile"));
static FIGURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<figure[^>]*>.*?</figure>").expect("FIGURE regex should compile")
});
static PRE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<pre[^>]*>\s*<code[^>]*>(.*?)</code>\s*</pre>")
        .expect("PRE_CODE regex should compile")
});
static PRE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<pre[^>]*>(.*?)</pre>").expect("PRE regex should compile"));
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<code[^>]*>(.*?)</code>").expect("INLINE_CODE regex should compile")
});

/// Simulated terminal output: every non-blank line trimmed, then fenced.
pub(super) fn terminal_to_code(text: &str) -> String {
    TERMINAL
        .replace_all(text, |caps: &Captures| {
            let inner = decode_entities(&strip_tags(&caps[1]));
            let lines: Vec<&str> = inner
                .trim()
                .split('\n')
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            fence(&lines.join("\n"))
        })
        .into_owned()
}

pub(super) fn drop_images(text: &str) -> String {
    let text = IMG.replace_all(text, "");
    FIGURE.replace_all(&text, "").into_owned()
}

/// `<pre>` and `<pre><code>` become fences; unlike terminals the body
/// keeps its inner line layout.
pub(super) fn pre_to_code(text: &str) -> String {
    let text = PRE_CODE.replace_all(text, fence_preformatted);
    PRE.replace_all(&text, fence_preformatted).into_owned()
}

fn fence_preformatted(caps: &Captures) -> String {
    let code = decode_entities(&strip_tags(&caps[1]));
    fence(code.trim())
}

pub(super) fn inline_code(text: &str) -> String {
    INLINE_CODE.replace_all(text, "`${1}`").into_owned()
}

fn fence(body: &str) -> String {
    format!("\n```\n{}\n```\n", shield(body))
}

/// Code bodies are entity-decoded when fenced. The markup characters that
/// decoding produces are then swapped for private-use stand-ins so the later
/// tag stripping and entity decoding leave them untouched.
/// [`restore_code`] swaps them back once those passes are done.
const SHIELD: [(char, char); 3] = [('&', '\u{E000}'), ('<', '\u{E001}'), ('>', '\u{E002}')];

fn shield(code: &str) -> String {
    code.chars()
        .map(|c| {
            SHIELD
                .iter()
                .find(|(raw, _)| *raw == c)
                .map_or(c, |(_, stand_in)| *stand_in)
        })
        .collect()
}

pub(super) fn restore_code(text: &str) -> String {
    text.chars()
        .map(|c| {
            SHIELD
                .iter()
                .find(|(_, stand_in)| *stand_in == c)
                .map_or(c, |(raw, _)| *raw)
        })
        .collect()
}
