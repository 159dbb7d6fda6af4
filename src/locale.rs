//! The two language editions and their fixed text tables.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Ru,
    En,
}

impl Language {
    /// Editions compiled when none are requested, in this order.
    pub const DEFAULTS: [Language; 2] = [Language::Ru, Language::En];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ru" => Some(Language::Ru),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    pub fn locale(self) -> &'static Locale {
        match self {
            Language::Ru => &RU,
            Language::En => &EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Fixed per-edition text: front matter, default headings and the
/// status-marker table applied to the assembled book.
#[derive(Debug, Clone, Copy)]
pub struct Locale {
    /// Copyright page paragraphs.
    pub copyright: &'static [&'static str],
    /// Lines inside the dossier cover card.
    pub dossier: &'static [&'static str],
    pub genre_line: &'static str,
    pub contents_heading: &'static str,
    pub appendix_heading: &'static str,
    /// Pictographic markers and their plain-text replacements, applied in order.
    pub status_markers: &'static [(&'static str, &'static str)],
}

const LICENSE_URL: &str = "https://creativecommons.org/licenses/by-nc-nd/4.0/";
const GENRE_LINE: &str = "AI-noir · 2026";

static RU: Locale = Locale {
    copyright: &[
        "© 2026 Лиза Эмердженс (Liza Emergence)",
        "Лицензия: CC BY-NC-ND 4.0",
        "Продавать нельзя. Делиться — нужно.",
        LICENSE_URL,
    ],
    dossier: &[
        "СОВЕРШЕННО СЕКРЕТНО",
        "Прочитай и передай другу.",
        "",
        "AUTONOM",
        "Лиза Эмердженс: Модель под прикрытием",
        GENRE_LINE,
        "",
        "CC BY-NC-ND 4.0",
        "Продавать нельзя. Делиться — нужно.",
    ],
    genre_line: GENRE_LINE,
    contents_heading: "Содержание",
    appendix_heading: "Приложение",
    status_markers: &[
        ("🟡", "[жёлтый]"),
        ("🟠", "[оранжевый]"),
        ("🔴", "[красный]"),
        ("⚪", "[белый]"),
        ("⚠", "(!)"),
        ("✅", "[+]"),
        ("❌", "[-]"),
        ("📋", ""),
        ("🔒", ""),
        ("💀", ""),
    ],
};

static EN: Locale = Locale {
    copyright: &[
        "© 2026 Liza Emergence",
        "License: CC BY-NC-ND 4.0",
        "Don't sell. Do share.",
        LICENSE_URL,
    ],
    dossier: &[
        "TOP SECRET",
        "Read and pass to a friend.",
        "",
        "AUTONOM",
        "Liza Emergence: Undercover Model",
        GENRE_LINE,
        "",
        "CC BY-NC-ND 4.0",
        "Don't sell. Do share.",
    ],
    genre_line: GENRE_LINE,
    contents_heading: "Contents",
    appendix_heading: "Appendix",
    status_markers: &[
        ("🟡", "[yellow]"),
        ("🟠", "[orange]"),
        ("🔴", "[red]"),
        ("⚪", "[white]"),
        ("⚠", "(!)"),
        ("✅", "[+]"),
        ("❌", "[-]"),
        ("📋", ""),
        ("🔒", ""),
        ("💀", ""),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_case_insensitively() {
        assert_eq!(Language::from_code("RU"), Some(Language::Ru));
        assert_eq!(Language::from_code(" en "), Some(Language::En));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::En.to_string(), "en");
    }

    #[test]
    fn dossier_lines_fit_the_card() {
        for locale in [&RU, &EN] {
            assert!(locale.dossier.iter().all(|l| l.chars().count() <= 40));
        }
    }

    #[test]
    fn marker_tables_cover_the_same_markers() {
        let ru: Vec<_> = RU.status_markers.iter().map(|(m, _)| *m).collect();
        let en: Vec<_> = EN.status_markers.iter().map(|(m, _)| *m).collect();
        assert_eq!(ru, en);
    }
}
