//! Doc comment rendering.
//!
//! Wraps an injected [`CommentMarkup`] engine and post-processes its HTML:
//! embedded `<h3>` headings are demoted to `<h4>` and RFC references are
//! linked to the IETF archive.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::markup::{CommentMarkup, GodocMarkup};

/// "RFC" followed by ASCII whitespace and a 3-4 digit ASCII number.
static RFC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"RFC[\t\n\x0C\r ]+([0-9]{3,4})").unwrap());

/// Link target template for RFC references; `$1` is the RFC number.
const RFC_LINK: &str = r#"<a href="http://tools.ietf.org/html/rfc$1">$0</a>"#;

/// Default text-mode indent width.
pub const DEFAULT_INDENT: usize = 4;

/// Default text-mode line width, including indentation on both sides.
pub const DEFAULT_WIDTH: usize = 80;

/// Renders doc comments as HTML or plain text.
#[derive(Clone)]
pub struct CommentRenderer {
    markup: Arc<dyn CommentMarkup>,
    indent: String,
    width: usize,
}

impl CommentRenderer {
    /// Create a renderer over the given markup engine with default text layout.
    #[must_use]
    pub fn new(markup: Arc<dyn CommentMarkup>) -> Self {
        Self {
            markup,
            indent: " ".repeat(DEFAULT_INDENT),
            width: DEFAULT_WIDTH,
        }
    }

    /// Set the text-mode indent (in spaces) and total line width.
    ///
    /// Paragraphs wrap at `width - 2 * indent` columns.
    #[must_use]
    pub fn with_layout(mut self, indent: usize, width: usize) -> Self {
        self.indent = " ".repeat(indent);
        self.width = width;
        self
    }

    /// Render a comment as HTML.
    #[must_use]
    pub fn html(&self, comment: &str) -> String {
        let html = self.markup.render_html(comment);
        let html = demote_headings(&html);
        RFC_RE.replace_all(&html, RFC_LINK).into_owned()
    }

    /// Render a comment as indented plain text.
    #[must_use]
    pub fn text(&self, comment: &str) -> String {
        let wrap = self.width.saturating_sub(2 * self.indent.len());
        self.markup.render_text(comment, &self.indent, "\t", wrap)
    }
}

impl Default for CommentRenderer {
    fn default() -> Self {
        Self::new(Arc::new(GodocMarkup))
    }
}

impl std::fmt::Debug for CommentRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentRenderer")
            .field("indent", &self.indent.len())
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

/// Turn every `<h3>` element into `<h4>`.
fn demote_headings(html: &str) -> String {
    html.replace("<h3 ", "<h4 ")
        .replace("<h3>", "<h4>")
        .replace("</h3>", "</h4>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::MarkdownMarkup;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heading_demoted() {
        let html = CommentRenderer::default().html("Intro.\n\nDetails\n\nMore text.");
        assert!(html.contains(r#"<h4 id="hdr-Details">Details</h4>"#), "{html}");
        assert!(!html.contains("<h3"), "{html}");
    }

    #[test]
    fn test_markdown_heading_demoted() {
        let renderer = CommentRenderer::new(Arc::new(MarkdownMarkup));
        let html = renderer.html("# Usage\n\ntext");
        assert!(html.contains("<h4>Usage</h4>"), "{html}");
    }

    #[test]
    fn test_rfc_linked() {
        let html = CommentRenderer::default().html("Implements RFC 2616 caching.");
        assert_eq!(
            html,
            "<p>\nImplements <a href=\"http://tools.ietf.org/html/rfc2616\">RFC 2616</a> caching.\n</p>\n"
        );
    }

    #[test]
    fn test_rfc_whitespace_preserved_in_label() {
        let html = CommentRenderer::default().html("See RFC  822.");
        assert!(
            html.contains(r#"<a href="http://tools.ietf.org/html/rfc822">RFC  822</a>"#),
            "{html}"
        );
    }

    #[test]
    fn test_rfc_needs_three_digits() {
        let html = CommentRenderer::default().html("RFC 12 is not linked.");
        assert!(!html.contains("<a "), "{html}");
    }

    #[test]
    fn test_rfc_ascii_only() {
        let renderer = CommentRenderer::default();
        let arabic = renderer.html("See RFC \u{662}\u{666}\u{661}\u{666}.");
        assert!(!arabic.contains("<a "), "{arabic}");
        let nbsp = renderer.html("See RFC\u{A0}2616.");
        assert!(!nbsp.contains("<a "), "{nbsp}");
    }

    #[test]
    fn test_text_mode_indent_and_width() {
        let words = vec!["word"; 20].join(" ");
        let text = CommentRenderer::default().text(&words);
        for line in text.lines() {
            assert!(line.starts_with("    "), "{line:?}");
            assert!(line.len() <= 4 + 72, "{line:?}");
        }
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_text_mode_custom_layout() {
        let text = CommentRenderer::default()
            .with_layout(2, 16)
            .text("aaa bbb ccc");
        assert_eq!(text, "  aaa bbb ccc\n");
    }
}
