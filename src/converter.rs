use crate::assembler::{self, Layout};
use crate::export::{self, ExportError};
use crate::locale::Language;
use crate::manifest::{BookConfig, Manifest};
use crate::settings::Settings;
use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Markdown,
    Html,
    Pdf,
    Epub,
}

#[derive(Debug)]
pub enum Outcome {
    /// Written, with its size in bytes.
    Written(u64),
    Failed(String),
    /// Not run because an earlier step failed.
    NotAttempted,
}

#[derive(Debug)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Everything one edition produced, in the order it was produced.
#[derive(Debug)]
pub struct EditionReport {
    pub artifacts: Vec<Artifact>,
    pub skipped: Vec<String>,
}

/// Compile every requested edition the manifest has, printing a summary
/// for each. Only a manifest that cannot be loaded is an error.
pub fn run(settings: &Settings, codes: &[String]) -> Result<()> {
    let manifest = Manifest::load(&settings.manifest)?;

    for language in requested_languages(codes) {
        let Some(book) = manifest.edition(language.code()) else {
            debug!(%language, "no edition in manifest, ignoring");
            continue;
        };
        let report = compile_edition(settings, book, language);
        print!("{}", report);
    }

    println!("\n📁 {}/", settings.output_dir.display());
    Ok(())
}

/// Known languages among `codes`, first occurrence order. Empty means all.
pub fn requested_languages(codes: &[String]) -> Vec<Language> {
    if codes.is_empty() {
        return Language::DEFAULTS.to_vec();
    }

    let mut languages = Vec::new();
    for code in codes {
        match Language::from_code(code) {
            Some(language) if !languages.contains(&language) => languages.push(language),
            Some(_) => {}
            None => debug!(code = %code, "unknown language, ignoring"),
        }
    }
    languages
}

/// Assemble, persist and export one edition. Never fails: every problem
/// ends up in the report.
pub fn compile_edition(settings: &Settings, book: &BookConfig, language: Language) -> EditionReport {
    let layout = Layout {
        source_dir: settings.source_dir(language),
        override_dir: settings.override_dir.clone(),
        front_matter: settings.front_matter,
        table_of_contents: settings.table_of_contents,
    };
    let assembly = assembler::assemble(book, language.locale(), &layout);
    info!(
        %language,
        chars = assembly.markdown.len(),
        skipped = assembly.skipped.len(),
        "edition assembled"
    );

    let md_path = settings.output_path(language, "md");
    let pdf_path = settings.output_path(language, "pdf");
    let epub_path = settings.output_path(language, "epub");
    let mut artifacts = Vec::new();

    let written = write_markdown(&md_path, &assembly.markdown);
    let md_ok = written.is_ok();
    artifacts.push(Artifact {
        kind: ArtifactKind::Markdown,
        path: md_path.clone(),
        outcome: match written {
            Ok(size) => Outcome::Written(size),
            Err(err) => Outcome::Failed(format!("{:#}", err)),
        },
    });

    let tools = &settings.export;
    if tools.pdf {
        let html_path = settings.output_path(language, "html");
        if !md_ok {
            artifacts.push(Artifact::not_attempted(ArtifactKind::Pdf, pdf_path));
        } else {
            match export::render_html(tools, &md_path, &html_path, &book.title) {
                Ok(()) => {
                    artifacts.push(Artifact::exported(ArtifactKind::Html, html_path.clone(), Ok(())));
                    let rendered = export::render_pdf(tools, &html_path, &pdf_path);
                    artifacts.push(Artifact::exported(ArtifactKind::Pdf, pdf_path, rendered));
                }
                Err(err) => artifacts.push(Artifact::exported(ArtifactKind::Pdf, pdf_path, Err(err))),
            }
        }
    }

    if tools.epub {
        if !md_ok {
            artifacts.push(Artifact::not_attempted(ArtifactKind::Epub, epub_path));
        } else {
            let rendered = export::render_epub(
                tools,
                &md_path,
                &epub_path,
                &book.title,
                language,
                settings.table_of_contents,
            );
            artifacts.push(Artifact::exported(ArtifactKind::Epub, epub_path, rendered));
        }
    }

    EditionReport {
        artifacts,
        skipped: assembly.skipped,
    }
}

fn write_markdown(path: &Path, markdown: &str) -> Result<u64> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, markdown).with_context(|| format!("Failed to write {}", path.display()))?;
    file_size(path)
}

fn file_size(path: &Path) -> Result<u64> {
    Ok(fs::metadata(path)
        .with_context(|| format!("Missing output: {}", path.display()))?
        .len())
}

impl Artifact {
    fn exported(kind: ArtifactKind, path: PathBuf, result: Result<(), ExportError>) -> Self {
        let outcome = match result.map_err(anyhow::Error::from).and_then(|()| file_size(&path)) {
            Ok(size) => Outcome::Written(size),
            Err(err) => Outcome::Failed(format!("{:#}", err)),
        };
        Self { kind, path, outcome }
    }

    fn not_attempted(kind: ArtifactKind, path: PathBuf) -> Self {
        Self {
            kind,
            path,
            outcome: Outcome::NotAttempted,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArtifactKind::Markdown => "Markdown",
            ArtifactKind::Html => "HTML",
            ArtifactKind::Pdf => "PDF",
            ArtifactKind::Epub => "EPUB",
        })
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Written(size) => write!(f, "✅ {} ({}K)", self.path.display(), size / 1024),
            Outcome::Failed(ref reason) => write!(f, "⚠️  {} failed: {}", self.kind, reason),
            Outcome::NotAttempted => write!(f, "⚠️  {} failed: not attempted", self.kind),
        }
    }
}

impl fmt::Display for EditionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, artifact) in self.artifacts.iter().enumerate() {
            writeln!(f, "{}", artifact)?;
            // The skipped list belongs to the Markdown line.
            if i == 0 && !self.skipped.is_empty() {
                writeln!(f, "   ⚠️  Skipped (missing): {}", self.skipped.join(", "))?;
            }
        }
        Ok(())
    }
}
