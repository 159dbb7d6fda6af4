use regex::Regex;
use std::sync::LazyLock;

/// Content containers tried in order. The first one present wins; with
/// none present the whole document is kept.
static LOCATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ["article", "main"]
        .iter()
        .map(|tag| {
            Regex::new(&format!(r"(?s)<{tag}[^>]*>(.*?)</{tag}>"))
                .expect("content locator regex should compile")
        })
        .collect()
});

pub(super) fn narrow(html: &str) -> String {
    LOCATORS
        .iter()
        .find_map(|re| re.captures(html))
        .and_then(|caps| caps.get(1))
        .map_or_else(|| html.to_string(), |inner| inner.as_str().to_string())
}
