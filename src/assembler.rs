//! Whole-book assembly for one language edition.

use crate::front_matter::{self, FrontMatterStyle};
use crate::locale::Locale;
use crate::manifest::{BookConfig, ChapterEntry};
use crate::markdown;
use crate::reader::{FragmentSource, HtmlDir, OverrideDir};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Where an edition's fragments live and how its front matter looks.
#[derive(Debug, Clone)]
pub struct Layout {
    pub source_dir: PathBuf,
    pub override_dir: PathBuf,
    pub front_matter: FrontMatterStyle,
    pub table_of_contents: bool,
}

/// The compiled Markdown and the entries left out for lack of a source.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub markdown: String,
    pub skipped: Vec<String>,
}

/// Concatenate front matter, chapters, epilogue, appendix and glossary in
/// manifest order. Chapters prefer an override over extraction; appendix
/// entries are always extracted. Entries with no fragment are skipped.
pub fn assemble(book: &BookConfig, locale: &Locale, layout: &Layout) -> Assembly {
    let overrides = OverrideDir::new(&layout.override_dir);
    let sources = HtmlDir::new(&layout.source_dir);
    let chapter_sources: [&dyn FragmentSource; 2] = [&overrides, &sources];
    let appendix_sources: [&dyn FragmentSource; 1] = [&sources];

    let mut parts = front_matter::format_front_matter(
        book,
        locale,
        layout.front_matter,
        layout.table_of_contents,
    );
    let mut skipped = Vec::new();

    for chapter in &book.chapters {
        let Some(body) = resolve(chapter, &chapter_sources, &mut skipped) else {
            continue;
        };
        let sub_line = chapter
            .subtitle()
            .map(|s| format!("\n*{}*\n", s))
            .unwrap_or_default();
        parts.push(format!("\n## {}\n{}", chapter.heading(), sub_line));
        parts.push(body);
        parts.push("\n\n---\n".to_string());
    }

    parts.push(book.epilogue.clone());

    if let Some(ref appendix) = book.appendix {
        parts.push(
            book.appendix_title
                .clone()
                .unwrap_or_else(|| format!("\n---\n\n# {}\n\n---\n", locale.appendix_heading)),
        );
        for entry in appendix {
            let Some(body) = resolve(entry, &appendix_sources, &mut skipped) else {
                continue;
            };
            parts.push(format!("\n## {}\n", entry.title));
            parts.push(body);
            parts.push("\n\n---\n".to_string());
        }
    }

    if let Some(ref glossary) = book.glossary {
        parts.push(glossary.clone());
    }

    let content = markdown::replace_status_markers(&parts.join("\n"), locale.status_markers);
    Assembly {
        markdown: markdown::collapse_blank_lines(&content),
        skipped,
    }
}

/// First fragment any source yields for `entry`. Unreadable files are
/// logged and passed over; with nothing found the id is recorded as skipped.
fn resolve(
    entry: &ChapterEntry,
    sources: &[&dyn FragmentSource],
    skipped: &mut Vec<String>,
) -> Option<String> {
    for (rank, source) in sources.iter().enumerate() {
        match source.fragment(&entry.id) {
            Ok(Some(body)) => {
                debug!(chapter = %entry.id, source = rank, "fragment resolved");
                return Some(body);
            }
            Ok(None) => {}
            Err(err) => warn!(chapter = %entry.id, error = %format!("{:#}", err), "unreadable fragment"),
        }
    }
    warn!(chapter = %entry.id, "no source found, skipping");
    skipped.push(entry.id.clone());
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;
    use crate::manifest::Manifest;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _root: TempDir,
        layout: Layout,
    }

    impl Fixture {
        fn new() -> Self {
            let root = tempfile::tempdir().unwrap();
            let layout = Layout {
                source_dir: root.path().join("posts"),
                override_dir: root.path().join("overrides"),
                front_matter: FrontMatterStyle::Copyright,
                table_of_contents: false,
            };
            fs::create_dir_all(&layout.source_dir).unwrap();
            fs::create_dir_all(&layout.override_dir).unwrap();
            Self { _root: root, layout }
        }

        fn page(&self, id: &str, html: &str) {
            fs::write(self.layout.source_dir.join(format!("{id}.html")), html).unwrap();
        }

        fn override_md(&self, id: &str, md: &str) {
            fs::write(self.layout.override_dir.join(format!("{id}.md")), md).unwrap();
        }
    }

    fn book(extra: &str) -> BookConfig {
        let raw = format!(
            r#"{{"en": {{
                "title": "AUTONOM",
                "subtitle": "Undercover Model",
                "chapters": [
                    {{"file": "day-a", "number": 1, "title": "Alpha", "subtitle": "first light"}},
                    {{"file": "day-b", "number": 2, "title": "Bravo"}}
                ],
                "epilogue": "EPILOGUE TEXT"{extra}
            }}}}"#
        );
        Manifest::from_json(&raw)
            .unwrap()
            .edition("en")
            .unwrap()
            .clone()
    }

    #[test]
    fn missing_source_is_skipped_not_fatal() {
        let fx = Fixture::new();
        fx.page("day-a", "<article><h1>Alpha</h1><p>Alpha body.</p></article>");

        let assembly = assemble(&book(""), Language::En.locale(), &fx.layout);

        assert!(assembly.markdown.contains("## 1: Alpha\n\n*first light*\n"));
        assert!(assembly.markdown.contains("Alpha body."));
        assert!(!assembly.markdown.contains("Bravo"));
        assert_eq!(assembly.skipped, vec!["day-b".to_string()]);
        assert!(assembly.markdown.contains("EPILOGUE TEXT"));
    }

    #[test]
    fn override_wins_over_extraction() {
        let fx = Fixture::new();
        fx.page("day-a", "<article><p>extracted version</p></article>");
        fx.page("day-b", "<article><p>Bravo body.</p></article>");
        fx.override_md("day-a", "Curated *by hand*.");

        let assembly = assemble(&book(""), Language::En.locale(), &fx.layout);

        assert!(assembly.markdown.contains("Curated *by hand*."));
        assert!(!assembly.markdown.contains("extracted version"));
        assert!(assembly.skipped.is_empty());
    }

    #[test]
    fn chapters_follow_manifest_order_with_separators() {
        let fx = Fixture::new();
        fx.page("day-b", "<p>Bravo body.</p>");
        fx.page("day-a", "<p>Alpha body.</p>");

        let md = assemble(&book(""), Language::En.locale(), &fx.layout).markdown;

        let alpha = md.find("## 1: Alpha").unwrap();
        let bravo = md.find("## 2: Bravo").unwrap();
        let epilogue = md.find("EPILOGUE TEXT").unwrap();
        assert!(alpha < bravo && bravo < epilogue);
        assert!(md.contains("Alpha body.\n\n---\n"));
        assert!(md.contains("## 2: Bravo\n\nBravo body."));
        assert!(!md.contains("\n\n\n"));
    }

    #[test]
    fn appendix_ignores_overrides_and_glossary_closes_the_book() {
        let fx = Fixture::new();
        fx.page("day-a", "<p>Alpha body.</p>");
        fx.page("day-b", "<p>Bravo body.</p>");
        fx.page("notes", "<p>Notes from the page.</p>");
        fx.override_md("notes", "override must not be used");
        fx.override_md("missing-note", "override alone is not enough");

        let extra = r###",
            "appendix": [{"file": "notes", "title": "Field notes"}, {"file": "missing-note", "title": "Lost"}],
            "glossary": "## Glossary\n\nAUTONOM: the operation""###;
        let assembly = assemble(&book(extra), Language::En.locale(), &fx.layout);
        let md = &assembly.markdown;

        assert!(md.contains("# Appendix"));
        assert!(md.contains("## Field notes\n\nNotes from the page."));
        assert!(!md.contains("override must not be used"));
        assert!(!md.contains("Lost"));
        assert_eq!(assembly.skipped, vec!["missing-note".to_string()]);
        assert!(md.trim_end().ends_with("AUTONOM: the operation"));
        assert!(md.find("EPILOGUE TEXT").unwrap() < md.find("# Appendix").unwrap());
    }

    #[test]
    fn custom_appendix_title_replaces_the_default() {
        let fx = Fixture::new();
        let extra = r#",
            "appendix": [],
            "appendix_title": "\n# Personal files\n""#;
        let md = assemble(&book(extra), Language::Ru.locale(), &fx.layout).markdown;

        assert!(md.contains("# Personal files"));
        assert!(!md.contains("Приложение"));
    }

    #[test]
    fn status_markers_are_localized() {
        let fx = Fixture::new();
        fx.override_md("day-a", "Risk 🟡, door 🔒locked ✅");
        fx.override_md("day-b", "ok");

        let en = assemble(&book(""), Language::En.locale(), &fx.layout).markdown;
        let ru = assemble(&book(""), Language::Ru.locale(), &fx.layout).markdown;

        assert!(en.contains("Risk [yellow], door locked [+]"));
        assert!(ru.contains("Risk [жёлтый], door locked [+]"));
        assert!(ru.starts_with("© 2026 Лиза Эмердженс"));
    }

    #[test]
    fn override_blank_lines_are_collapsed_in_the_book() {
        let fx = Fixture::new();
        fx.override_md("day-a", "one\n\n\n\n\ntwo");
        fx.override_md("day-b", "three");

        let md = assemble(&book(""), Language::En.locale(), &fx.layout).markdown;

        assert!(md.contains("one\n\ntwo"));
        assert!(!md.contains("\n\n\n"));
    }
}
