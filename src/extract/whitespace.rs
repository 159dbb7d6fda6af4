use regex::Regex;
use std::sync::LazyLock;

static INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]+").expect("INDENT regex should compile"));
static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("NEWLINE_RUN regex should compile"));
// blank lines that only look blank
static SPACED_NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\n\s*){3,}").expect("SPACED_NEWLINE_RUN regex should compile")
});

/// Drop indentation left over from the HTML source, then collapse blank runs.
pub(super) fn normalize(text: &str) -> String {
    let text = INDENT.replace_all(text, "\n");
    collapse_blank_runs(&text)
}

/// At most one blank line anywhere.
pub(super) fn collapse_blank_runs(text: &str) -> String {
    let text = NEWLINE_RUN.replace_all(text, "\n\n");
    SPACED_NEWLINE_RUN.replace_all(&text, "\n\n").into_owned()
}
