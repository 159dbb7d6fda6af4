//! External converters: pandoc for HTML and EPUB, weasyprint for PDF.

use crate::locale::Language;
use crate::settings::ExportSettings;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not launch {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("{tool} timed out after {}s", timeout.as_secs_f32())]
    Timeout { tool: String, timeout: Duration },

    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("lost track of {tool}: {source}")]
    Io {
        tool: String,
        #[source]
        source: io::Error,
    },
}

/// Markdown to a standalone HTML page, the first half of the PDF route.
pub fn render_html(
    settings: &ExportSettings,
    markdown: &Path,
    html: &Path,
    title: &str,
) -> Result<(), ExportError> {
    run(html_command(settings, markdown, html, title), settings.timeout())
}

/// HTML to PDF, styled with the PDF stylesheet when it exists.
pub fn render_pdf(settings: &ExportSettings, html: &Path, pdf: &Path) -> Result<(), ExportError> {
    run(pdf_command(settings, html, pdf), settings.timeout())
}

pub fn render_epub(
    settings: &ExportSettings,
    markdown: &Path,
    epub: &Path,
    title: &str,
    language: Language,
    with_toc: bool,
) -> Result<(), ExportError> {
    run(
        epub_command(settings, markdown, epub, title, language, with_toc),
        settings.timeout(),
    )
}

fn html_command(settings: &ExportSettings, markdown: &Path, html: &Path, title: &str) -> Command {
    let mut cmd = Command::new(&settings.pandoc);
    cmd.arg(markdown)
        .arg("-o")
        .arg(html)
        .arg("--standalone")
        .arg("--metadata")
        .arg(format!("title={}", title));
    cmd
}

fn pdf_command(settings: &ExportSettings, html: &Path, pdf: &Path) -> Command {
    let mut cmd = Command::new(&settings.weasyprint);
    if settings.pdf_stylesheet.is_file() {
        cmd.arg("-s").arg(&settings.pdf_stylesheet);
    }
    cmd.arg(html).arg(pdf);
    cmd
}

fn epub_command(
    settings: &ExportSettings,
    markdown: &Path,
    epub: &Path,
    title: &str,
    language: Language,
    with_toc: bool,
) -> Command {
    let mut cmd = Command::new(&settings.pandoc);
    cmd.arg(markdown).arg("-o").arg(epub);
    for (key, value) in [
        ("title", title),
        ("author", settings.author.as_str()),
        ("lang", language.code()),
        ("rights", settings.rights.as_str()),
    ] {
        cmd.arg("--metadata").arg(format!("{}={}", key, value));
    }
    cmd.arg("--toc-depth=2");
    if with_toc {
        cmd.arg("--toc");
    }
    if settings.epub_stylesheet.is_file() {
        cmd.arg("--css").arg(&settings.epub_stylesheet);
    }
    if settings.cover_image.is_file() {
        cmd.arg("--epub-cover-image").arg(&settings.cover_image);
    }
    cmd
}

/// Run `command` to completion with stdin closed and stdout discarded,
/// killing it once `timeout` has passed.
fn run(mut command: Command, timeout: Duration) -> Result<(), ExportError> {
    let tool = command.get_program().to_string_lossy().into_owned();
    debug!(command = ?command, "running external tool");

    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ExportError::Spawn {
            tool: tool.clone(),
            source,
        })?;

    // Drained on its own thread so a chatty tool cannot fill the pipe and stall.
    let stderr = child.stderr.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = String::new();
            let _ = pipe.read_to_string(&mut buf);
            buf
        })
    });

    // A timeout too large to represent means no deadline at all.
    let deadline = Instant::now().checked_add(timeout);
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if deadline.is_some_and(|d| Instant::now() >= d) => {
                let _ = child.kill();
                let _ = child.wait();
                warn!(%tool, ?timeout, "external tool timed out");
                return Err(ExportError::Timeout { tool, timeout });
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(source) => {
                let _ = child.kill();
                return Err(ExportError::Io { tool, source });
            }
        }
    };

    if status.success() {
        return Ok(());
    }
    let stderr = stderr
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();
    warn!(%tool, %status, "external tool failed");
    Err(ExportError::Failed {
        tool,
        status,
        stderr: stderr.trim().to_string(),
    })
}
