//! Long description rendering.
//!
//! Markdown and AsciiDoc are converted to HTML that is safe to embed in the bot page. HTML
//! descriptions are never embedded directly; the page frames them from a sandboxed
//! endpoint instead.

pub mod asciidoc;
pub mod markdown;

use crate::server::model::bot::{BotProfile, DescriptionFormat};

/// A long description ready for the bot page.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedDescription {
    /// Sanitized HTML to insert inline.
    Html(String),
    /// Path of the sandboxed document to show in an iframe.
    Frame { src: String },
}

pub fn render_description(bot: &BotProfile) -> RenderedDescription {
    match bot.content.format {
        DescriptionFormat::Markdown => {
            RenderedDescription::Html(markdown::render(&bot.content.long_desc))
        }
        DescriptionFormat::Asciidoc => {
            RenderedDescription::Html(asciidoc::render(&bot.content.long_desc))
        }
        DescriptionFormat::Html => RenderedDescription::Frame {
            src: format!("/bot/{}/iframe", bot.id),
        },
    }
}

/// Escapes text for use in HTML content and double quoted attributes.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    // Writing into a String cannot fail.
    let _ = pulldown_cmark::escape::escape_html(&mut escaped, text);
    escaped
}

/// Whether a link target would run script or inline a document when followed.
pub(crate) fn is_unsafe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    ["javascript:", "vbscript:", "data:"]
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}
