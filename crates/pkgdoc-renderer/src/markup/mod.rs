//! Generic comment markup engines.
//!
//! The comment renderer post-processes whatever an engine produces, so the
//! engine is injected as a [`CommentMarkup`] trait object. Two engines ship:
//! - [`GodocMarkup`]: plain-text comments with indented preformatted blocks
//!   and implicit headings
//! - [`MarkdownMarkup`]: `CommonMark` comments via `pulldown-cmark`
//!
//! Both lower comments into the same [`Block`] sequence for text output.

mod godoc;
mod markdown;
mod text;

pub use godoc::GodocMarkup;
pub use markdown::MarkdownMarkup;

/// Converts raw comment text into HTML or wrapped plain text.
pub trait CommentMarkup: Send + Sync {
    /// Render `text` as an HTML fragment.
    ///
    /// Embedded headings must be emitted as `<h3>` so the comment renderer can
    /// demote them below page-level headings.
    fn render_html(&self, text: &str) -> String;

    /// Render `text` as plain text.
    ///
    /// Paragraph lines start with `indent` and wrap at `width` columns
    /// (excluding the indent). Preformatted lines start with `pre_indent`.
    fn render_text(&self, text: &str, indent: &str, pre_indent: &str, width: usize) -> String;
}

/// Structural unit of a comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Block {
    /// Lines of running text.
    Para(Vec<String>),
    Heading(String),
    /// Verbatim lines with the common indent removed.
    Pre(Vec<String>),
}

/// Replace typographic quote digraphs with curly quotes.
pub(crate) fn convert_quotes(s: &str) -> String {
    s.replace("``", "\u{201C}").replace("''", "\u{201D}")
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
