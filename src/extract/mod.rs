//! HTML-to-Markdown extraction for a single chapter page.
//!
//! Extraction is an ordered list of pure string rewrites. Structural
//! conversions (code blocks, headings, emphasis) must run before the
//! catch-all tag stripper because that pass destroys tag boundaries, and
//! entity decoding must run after it so escaped `<` and `>` never turn
//! into markup. No step fails: a step whose pattern is absent is a no-op.

mod blocks;
mod chrome;
mod entities;
mod markup;
mod narrative;
mod scope;
mod whitespace;

use tracing::trace;

/// One named rewrite pass.
pub struct Step {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

/// The extraction passes, in the order they run.
pub const PIPELINE: &[Step] = &[
    Step { name: "scope", apply: scope::narrow },
    Step { name: "chrome", apply: chrome::strip_chrome },
    Step { name: "terminal", apply: blocks::terminal_to_code },
    Step { name: "images", apply: blocks::drop_images },
    Step { name: "preformatted", apply: blocks::pre_to_code },
    Step { name: "inline-code", apply: blocks::inline_code },
    Step { name: "headings", apply: markup::headings },
    Step { name: "inline-markup", apply: markup::inline_markup },
    Step { name: "residual-tags", apply: markup::strip_tags },
    Step { name: "whitespace", apply: whitespace::normalize },
    Step { name: "narrative-chrome", apply: narrative::strip_narrative_chrome },
    Step { name: "entities", apply: entities::decode_entities },
    Step { name: "restore-code", apply: blocks::restore_code },
    Step { name: "blank-lines", apply: whitespace::collapse_blank_runs },
];

/// Extract the narrative Markdown body from a chapter page.
pub fn extract(html: &str) -> String {
    let mut text = html.to_string();
    for step in PIPELINE {
        text = (step.apply)(&text);
        trace!(step = step.name, chars = text.len(), "extraction step");
    }
    text.trim().to_string()
}
