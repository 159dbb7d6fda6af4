//! Layered run configuration: defaults, an optional TOML file, then
//! `SERIALBOOK_*` environment variables. CLI flags are applied last by
//! [`crate::cli::Cli::apply`].

use crate::front_matter::FrontMatterStyle;
use crate::locale::Language;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_FILE: &str = "serialbook";
const ENV_PREFIX: &str = "SERIALBOOK";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub manifest: PathBuf,
    pub output_dir: PathBuf,
    pub override_dir: PathBuf,
    /// HTML source directory per language code.
    pub sources: HashMap<String, PathBuf>,
    pub file_stem: String,
    pub front_matter: FrontMatterStyle,
    pub table_of_contents: bool,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub pdf: bool,
    pub epub: bool,
    pub pandoc: PathBuf,
    pub weasyprint: PathBuf,
    pub timeout_secs: u64,
    pub pdf_stylesheet: PathBuf,
    pub epub_stylesheet: PathBuf,
    pub cover_image: PathBuf,
    pub author: String,
    pub rights: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("chapters.json"),
            output_dir: PathBuf::from("public/novel"),
            override_dir: PathBuf::from("overrides"),
            sources: HashMap::new(),
            file_stem: "autonom".to_string(),
            front_matter: FrontMatterStyle::default(),
            table_of_contents: false,
            export: ExportSettings::default(),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            pdf: true,
            epub: true,
            pandoc: PathBuf::from("pandoc"),
            weasyprint: PathBuf::from("weasyprint"),
            timeout_secs: 30,
            pdf_stylesheet: PathBuf::from("novel.css"),
            epub_stylesheet: PathBuf::from("epub.css"),
            cover_image: PathBuf::from("book/assets/cover.jpg"),
            author: "Liza Emergence".to_string(),
            rights: "CC BY-NC-ND 4.0".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path` (required when given) or from an optional
    /// `serialbook.toml` in the working directory, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_FILE).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    pub fn source_dir(&self, language: Language) -> PathBuf {
        self.sources
            .get(language.code())
            .cloned()
            .unwrap_or_else(|| PathBuf::from("posts").join(language.code()))
    }

    /// `<output_dir>/<stem>-<lang>.<extension>`
    pub fn output_path(&self, language: Language, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}-{}.{}", self.file_stem, language.code(), extension))
    }
}

impl ExportSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
