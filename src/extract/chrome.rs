//! Site chrome that never belongs in the book: page furniture, navigation
//! anchors and the blog's own status widgets.

use regex::Regex;
use std::sync::LazyLock;

const PAGE_BLOCKS: [&str; 6] = ["nav", "header", "footer", "script", "style", "title"];

static CHROME: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let mut patterns: Vec<String> = PAGE_BLOCKS
        .iter()
        .map(|tag| format!(r"(?s)<{tag}[^>]*>.*?</{tag}>"))
        .collect();

    patterns.extend(
        [
            // back-to-index and home links
            r#"(?s)<a[^>]*class="back"[^>]*>.*?</a>"#,
            r#"(?s)<a[^>]*href="/"[^>]*>.*?</a>"#,
            // previous/next paragraph
            r#"(?s)<p[^>]*>\s*<a[^>]*href="[^"]*\.html"[^>]*>[←→].*?</a>.*?</p>"#,
            // any anchor whose text opens with an arrow
            r"(?s)<a[^>]*>[←→⟵⟶].*?</a>",
            r#"(?s)<p[^>]*class="autonom-label"[^>]*>.*?</p>"#,
            r#"(?s)<div[^>]*class="status"[^>]*>.*?</div>"#,
            r#"(?s)<p[^>]*class="subtitle"[^>]*>.*?</p>"#,
        ]
        .iter()
        .map(|p| p.to_string()),
    );

    patterns
        .iter()
        .map(|p| Regex::new(p).expect("chrome regex should compile"))
        .collect()
});

pub(super) fn strip_chrome(text: &str) -> String {
    CHROME.iter().fold(text.to_string(), |acc, re| {
        re.replace_all(&acc, "").into_owned()
    })
}
