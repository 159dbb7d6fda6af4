use crate::extract;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Somewhere a chapter's Markdown body can come from.
pub trait FragmentSource {
    /// The fragment for `id`, or `None` when this source has no file for it.
    fn fragment(&self, id: &str) -> Result<Option<String>>;
}

/// Hand-curated `<id>.md` files, used verbatim.
pub struct OverrideDir {
    dir: PathBuf,
}

/// Published `<id>.html` pages, run through the extractor.
pub struct HtmlDir {
    dir: PathBuf,
}

impl OverrideDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl HtmlDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FragmentSource for OverrideDir {
    fn fragment(&self, id: &str) -> Result<Option<String>> {
        let path = self.dir.join(format!("{}.md", id));
        if !path.is_file() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read override: {}", path.display()))?;
        Ok(Some(text))
    }
}

impl FragmentSource for HtmlDir {
    fn fragment(&self, id: &str) -> Result<Option<String>> {
        let path = self.dir.join(format!("{}.html", id));
        if !path.is_file() {
            return Ok(None);
        }
        let html = read_lossy(&path)?;
        Ok(Some(extract::extract(&html)))
    }
}

fn read_lossy(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read source: {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_returned_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("day-1.md"), "  *hand made*\n\n\n").unwrap();

        let source = OverrideDir::new(dir.path());
        assert_eq!(
            source.fragment("day-1").unwrap().as_deref(),
            Some("  *hand made*\n\n\n")
        );
        assert_eq!(source.fragment("day-2").unwrap(), None);
    }

    #[test]
    fn html_is_extracted_and_invalid_utf8_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let mut page = b"<article><h1>Day 1</h1><p>caf".to_vec();
        page.push(0xff);
        page.extend_from_slice(b"</p></article>");
        fs::write(dir.path().join("day-1.html"), page).unwrap();

        let source = HtmlDir::new(dir.path());
        assert_eq!(
            source.fragment("day-1").unwrap().as_deref(),
            Some("caf\u{FFFD}")
        );
        assert_eq!(source.fragment("missing").unwrap(), None);
    }

    #[test]
    fn directories_named_like_fragments_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("day-1.md")).unwrap();
        assert_eq!(OverrideDir::new(dir.path()).fragment("day-1").unwrap(), None);
    }
}
