use crate::front_matter::FrontMatterStyle;
use crate::settings::Settings;
use clap::Parser;
use std::path::PathBuf;

/// Compile the serialized novel into Markdown, PDF and EPUB editions
#[derive(Parser, Debug)]
#[command(name = "serialbook", version, about)]
pub struct Cli {
    /// Language editions to compile (defaults to `ru en`). Unknown codes are ignored.
    pub languages: Vec<String>,

    /// Settings file (TOML). Defaults to ./serialbook.toml when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Chapter manifest (JSON)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Directory the compiled editions are written to
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Directory of hand-curated `<chapter>.md` overrides
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// Front-matter layout
    #[arg(long, value_enum)]
    pub front_matter: Option<FrontMatterStyle>,

    /// Emit a table of contents after the title page
    #[arg(long, default_value_t = false)]
    pub contents: bool,

    /// Skip the PDF export
    #[arg(long, default_value_t = false)]
    pub no_pdf: bool,

    /// Skip the EPUB export
    #[arg(long, default_value_t = false)]
    pub no_epub: bool,
}

impl Cli {
    /// Layer the command-line flags over the loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(ref path) = self.manifest {
            settings.manifest = path.clone();
        }
        if let Some(ref dir) = self.out_dir {
            settings.output_dir = dir.clone();
        }
        if let Some(ref dir) = self.overrides {
            settings.override_dir = dir.clone();
        }
        if let Some(style) = self.front_matter {
            settings.front_matter = style;
        }
        if self.contents {
            settings.table_of_contents = true;
        }
        if self.no_pdf {
            settings.export.pdf = false;
        }
        if self.no_epub {
            settings.export.epub = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages_are_positional_and_optional() {
        let cli = Cli::try_parse_from(["serialbook"]).unwrap();
        assert!(cli.languages.is_empty());

        let cli = Cli::try_parse_from(["serialbook", "en", "xx"]).unwrap();
        assert_eq!(cli.languages, vec!["en".to_string(), "xx".to_string()]);
    }

    #[test]
    fn flags_override_settings() {
        let cli = Cli::try_parse_from([
            "serialbook",
            "--out-dir",
            "build",
            "--front-matter",
            "dossier",
            "--contents",
            "--no-pdf",
        ])
        .unwrap();

        let mut settings = Settings::default();
        cli.apply(&mut settings);

        assert_eq!(settings.output_dir, PathBuf::from("build"));
        assert_eq!(settings.front_matter, FrontMatterStyle::Dossier);
        assert!(settings.table_of_contents);
        assert!(!settings.export.pdf);
        assert!(settings.export.epub);
        assert_eq!(settings.manifest, PathBuf::from("chapters.json"));
    }
}
