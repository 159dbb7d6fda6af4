use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Book structure for every language edition, keyed by language code.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    editions: HashMap<String, BookConfig>,
}

/// One language edition of the book.
#[derive(Debug, Clone, Deserialize)]
pub struct BookConfig {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub intro: Option<String>,
    pub chapters: Vec<ChapterEntry>,
    pub epilogue: String,
    #[serde(default)]
    pub appendix: Option<Vec<ChapterEntry>>,
    /// Raw Markdown placed before the appendix entries.
    #[serde(default)]
    pub appendix_title: Option<String>,
    #[serde(default)]
    pub glossary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChapterEntry {
    /// Source file stem, shared by `<id>.html` and `<id>.md`.
    #[serde(rename = "file")]
    pub id: String,
    #[serde(default)]
    number: Option<ChapterNumber>,
    pub title: String,
    #[serde(default)]
    subtitle: Option<String>,
}

/// Display number as written in the manifest: `3` or `"III"` alike.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ChapterNumber {
    Int(u64),
    Text(String),
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn edition(&self, code: &str) -> Option<&BookConfig> {
        self.editions.get(code)
    }
}

impl ChapterEntry {
    /// The display number, unless missing, zero or blank.
    pub fn number(&self) -> Option<&ChapterNumber> {
        self.number.as_ref().filter(|n| !n.is_blank())
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|s| !s.is_empty())
    }

    /// `"<number>: <title>"`, or just the title for unnumbered entries.
    pub fn heading(&self) -> String {
        match self.number() {
            Some(number) => format!("{}: {}", number, self.title),
            None => self.title.clone(),
        }
    }
}

impl ChapterNumber {
    fn is_blank(&self) -> bool {
        match self {
            ChapterNumber::Int(n) => *n == 0,
            ChapterNumber::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for ChapterNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChapterNumber::Int(n) => write!(f, "{}", n),
            ChapterNumber::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r###"{
        "en": {
            "title": "AUTONOM",
            "subtitle": "Undercover Model",
            "chapters": [
                {"file": "day-1", "number": 1, "title": "Boot", "subtitle": "in which nothing works"},
                {"file": "day-2", "number": "II", "title": "Drift"},
                {"file": "interlude", "number": "", "title": "Interlude", "subtitle": ""}
            ],
            "epilogue": "The end.",
            "appendix": [{"file": "notes", "title": "Field notes"}],
            "glossary": "## Glossary"
        }
    }"###;

    #[test]
    fn parses_editions_and_entries() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        assert!(manifest.edition("ru").is_none());

        let book = manifest.edition("en").unwrap();
        assert_eq!(book.title, "AUTONOM");
        assert!(book.intro.is_none());
        assert_eq!(book.chapters.len(), 3);
        assert_eq!(book.chapters[0].id, "day-1");
        assert_eq!(book.appendix.as_ref().map(Vec::len), Some(1));
        assert!(book.appendix_title.is_none());
    }

    #[test]
    fn headings_include_non_blank_numbers() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        let chapters = &manifest.edition("en").unwrap().chapters;

        assert_eq!(chapters[0].heading(), "1: Boot");
        assert_eq!(chapters[0].subtitle(), Some("in which nothing works"));
        assert_eq!(chapters[1].heading(), "II: Drift");
        assert_eq!(chapters[2].heading(), "Interlude");
        assert_eq!(chapters[2].subtitle(), None);
    }

    #[test]
    fn missing_epilogue_is_rejected() {
        let raw = r#"{"en": {"title": "t", "subtitle": "s", "chapters": []}}"#;
        assert!(Manifest::from_json(raw).is_err());
    }

    #[test]
    fn load_reports_the_path() {
        let err = Manifest::load(Path::new("/nonexistent/chapters.json")).unwrap_err();
        assert!(err.to_string().contains("chapters.json"));
    }
}
