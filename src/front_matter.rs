use crate::locale::Locale;
use crate::manifest::BookConfig;
use serde::Deserialize;

/// Width of the dossier card between its borders.
const CARD_WIDTH: usize = 42;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FrontMatterStyle {
    /// Copyright page, then a title page
    #[default]
    Copyright,
    /// Box-drawn "classified dossier" cover card, then the title
    Dossier,
}

/// Front-matter pieces, joined by the assembler with newlines.
pub fn format_front_matter(
    book: &BookConfig,
    locale: &Locale,
    style: FrontMatterStyle,
    with_contents: bool,
) -> Vec<String> {
    let mut parts = Vec::new();

    match style {
        FrontMatterStyle::Copyright => {
            for line in locale.copyright {
                parts.push(format!("{}\n", line));
            }
            parts.push("\n---\n".to_string());
            parts.push(format!("# {}\n", book.title));
            parts.push(format!("### {}\n", book.subtitle));
            parts.push(format!("*{}*\n", locale.genre_line));
        }
        FrontMatterStyle::Dossier => {
            parts.push("```".to_string());
            parts.extend(dossier_card(locale.dossier));
            parts.push("```\n".to_string());
            parts.push(format!("# {}\n### {}\n", book.title, book.subtitle));
        }
    }

    if let Some(ref intro) = book.intro {
        parts.push(intro.clone());
    }
    parts.push("---\n".to_string());

    if with_contents {
        parts.push(format!("## {}\n", locale.contents_heading));
        for chapter in &book.chapters {
            parts.push(match chapter.number() {
                Some(number) => format!("- **{}** — {}", number, chapter.title),
                None => format!("- {}", chapter.title),
            });
        }
        parts.push("\n---\n".to_string());
    }

    parts
}

fn dossier_card(lines: &[&str]) -> Vec<String> {
    let rule = "═".repeat(CARD_WIDTH);
    let text_width = CARD_WIDTH - 2;

    let mut card = vec![format!("╔{}╗", rule)];
    card.extend(
        lines
            .iter()
            .map(|line| format!("║  {:<width$}║", line, width = text_width)),
    );
    card.push(format!("╚{}╝", rule));
    card
}
