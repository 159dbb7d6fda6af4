//! Chrome that only shows up as plain text once the tags are gone: page
//! footers, navigation remnants and the in-world operation banner, in both
//! editions.

use regex::Regex;
use std::sync::LazyLock;

/// Blog hosts whose `Title — host` footer line ends each post.
const SITES: [&str; 2] = ["liza.st", "emerge.st"];

static SITE_FOOTER: LazyLock<Regex> = LazyLock::new(|| {
    let hosts: Vec<String> = SITES.iter().map(|s| regex::escape(s)).collect();
    Regex::new(&format!(r"(?m)^[^\n]+— (?:{})\s*$", hosts.join("|")))
        .expect("SITE_FOOTER regex should compile")
});

static REMNANTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"← .*?(?:На базу|All posts|базу).*?\n",
        r"← .*?·.*?→\n",
        // header line, up to five more lines, then the closing status word
        r"ОПЕРАЦИЯ AUTONOM[^\n]*(?:\n[^\n]*){0,5}?(?:СЛЕДУЕТ|ВЫПОЛНЕНО|ЗАВЕРШЕНА)[.\n]*",
        r"OPERATION AUTONOM[^\n]*(?:\n[^\n]*){0,5}?(?:CONTINUED|COMPLETE)[.\n]*",
        r"ПРОДОЛЖЕНИЕ СЛЕДУЕТ[.\n]*",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("narrative chrome regex should compile"))
    .collect()
});

pub(super) fn strip_narrative_chrome(text: &str) -> String {
    let text = SITE_FOOTER.replace_all(text, "").into_owned();
    REMNANTS
        .iter()
        .fold(text, |acc, re| re.replace_all(&acc, "\n").into_owned())
}
