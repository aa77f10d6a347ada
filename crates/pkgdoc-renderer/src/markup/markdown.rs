//! `CommonMark` comment markup.

use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

use super::text::write_text;
use super::{Block, CommentMarkup};

/// Markup engine for `CommonMark` doc comments.
///
/// Heading levels are shifted down by two so a top-level `#` heading renders
/// as `<h3>`. Raw HTML in comments is shown as text, and link or image
/// destinations with a scheme other than http, https, ftp or mailto are
/// replaced by `#`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownMarkup;

impl CommentMarkup for MarkdownMarkup {
    fn render_html(&self, text: &str) -> String {
        let events = parser(text).map(|event| match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => Event::Start(Tag::Heading {
                level: shift_heading(level),
                id,
                classes,
                attrs,
            }),
            Event::End(TagEnd::Heading(level)) => Event::End(TagEnd::Heading(shift_heading(level))),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => Event::Start(Tag::Link {
                link_type,
                dest_url: sanitize_dest(dest_url),
                title,
                id,
            }),
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => Event::Start(Tag::Image {
                link_type,
                dest_url: sanitize_dest(dest_url),
                title,
                id,
            }),
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });
        let mut out = String::with_capacity(text.len() + 32);
        html::push_html(&mut out, events);
        out
    }

    fn render_text(&self, text: &str, indent: &str, pre_indent: &str, width: usize) -> String {
        write_text(&blocks(text), indent, pre_indent, width)
    }
}

/// URL schemes allowed in rendered links. Scheme-less destinations are
/// always allowed.
const SAFE_SCHEMES: [&str; 4] = ["http", "https", "ftp", "mailto"];

fn sanitize_dest(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_dest(&dest) {
        dest
    } else {
        CowStr::Borrowed("#")
    }
}

/// A destination is relative when a `/`, `?` or `#` comes before any `:`.
fn is_safe_dest(dest: &str) -> bool {
    let dest = dest.trim_start_matches(|c: char| c.is_ascii_control() || c == ' ');
    match dest.find([':', '/', '?', '#']) {
        Some(pos) if dest[pos..].starts_with(':') => SAFE_SCHEMES
            .iter()
            .any(|scheme| dest[..pos].eq_ignore_ascii_case(scheme)),
        _ => true,
    }
}

fn parser(text: &str) -> Parser<'_> {
    Parser::new_ext(text, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
}

fn shift_heading(level: HeadingLevel) -> HeadingLevel {
    match level {
        HeadingLevel::H1 => HeadingLevel::H3,
        HeadingLevel::H2 => HeadingLevel::H4,
        HeadingLevel::H3 => HeadingLevel::H5,
        HeadingLevel::H4 | HeadingLevel::H5 | HeadingLevel::H6 => HeadingLevel::H6,
    }
}

/// Lower markdown into text blocks. List items become `- ` paragraphs and
/// table rows become single paragraphs.
fn blocks(text: &str) -> Vec<Block> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut code: Option<String> = None;

    for event in parser(text) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut cur, &mut out);
                code = Some(String::new());
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(body) = code.take() {
                    out.push(Block::Pre(body.lines().map(str::to_owned).collect()));
                }
            }
            Event::Start(Tag::Heading { .. }) => flush(&mut cur, &mut out),
            Event::End(TagEnd::Heading(_)) => {
                let heading = std::mem::take(&mut cur);
                if !heading.trim().is_empty() {
                    out.push(Block::Heading(heading.trim().to_owned()));
                }
            }
            Event::Start(Tag::Item) => {
                flush(&mut cur, &mut out);
                cur.push_str("- ");
            }
            Event::End(
                TagEnd::Paragraph | TagEnd::Item | TagEnd::TableHead | TagEnd::TableRow,
            ) => flush(&mut cur, &mut out),
            Event::End(TagEnd::TableCell) => cur.push(' '),
            Event::Text(t) | Event::Code(t) | Event::Html(t) | Event::InlineHtml(t) => {
                match code.as_mut() {
                    Some(body) => body.push_str(&t),
                    None => cur.push_str(&t),
                }
            }
            Event::SoftBreak | Event::HardBreak => cur.push(' '),
            _ => {}
        }
    }
    flush(&mut cur, &mut out);
    out
}

fn flush(cur: &mut String, out: &mut Vec<Block>) {
    let text = std::mem::take(cur);
    let trimmed = text.trim();
    if !trimmed.is_empty() && trimmed != "-" {
        out.push(Block::Para(vec![trimmed.to_owned()]));
    }
}
