//! Plain doc-comment markup.
//!
//! Comments are plain text. Runs of indented lines are preformatted, and a
//! lone capitalized line between two paragraphs is a heading.

use std::sync::LazyLock;

use regex::Regex;

use super::text::write_text;
use super::{Block, CommentMarkup, convert_quotes, is_blank};
use crate::escape::push_escaped;

/// URLs linked inside paragraphs.
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\b(?:https?|ftp|file)://[^\s<>"'`]+"#).unwrap());

/// Characters that disqualify a line from being a heading.
const NON_HEADING_CHARS: &str = ";:!?+*/=[]{}_^°&§~%#@<\">\\";

/// Markup engine for plain doc comments.
#[derive(Clone, Copy, Debug, Default)]
pub struct GodocMarkup;

impl CommentMarkup for GodocMarkup {
    fn render_html(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 32);
        for block in blocks(text) {
            match block {
                Block::Para(lines) => {
                    out.push_str("<p>\n");
                    for line in &lines {
                        emphasize(&mut out, line);
                        out.push('\n');
                    }
                    out.push_str("</p>\n");
                }
                Block::Heading(heading) => {
                    out.push_str(r#"<h3 id=""#);
                    push_escaped(&mut out, &anchor_id(&heading));
                    out.push_str(r#"">"#);
                    push_escaped(&mut out, &convert_quotes(&heading));
                    out.push_str("</h3>\n");
                }
                Block::Pre(lines) => {
                    out.push_str("<pre>");
                    for line in &lines {
                        push_escaped(&mut out, line);
                        out.push('\n');
                    }
                    out.push_str("</pre>\n");
                }
            }
        }
        out
    }

    fn render_text(&self, text: &str, indent: &str, pre_indent: &str, width: usize) -> String {
        write_text(&blocks(text), indent, pre_indent, width)
    }
}

/// Split a comment into paragraphs, headings and preformatted blocks.
pub(crate) fn blocks(text: &str) -> Vec<Block> {
    let mut lines: Vec<String> = text.lines().map(str::to_owned).collect();
    unindent(&mut lines);

    let mut out = Vec::new();
    let mut para: Vec<String> = Vec::new();
    let mut last_was_blank = false;
    let mut last_was_heading = false;

    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];

        if is_blank(line) {
            close_para(&mut para, &mut out);
            last_was_blank = true;
            i += 1;
            continue;
        }

        if indent_len(line) > 0 {
            close_para(&mut para, &mut out);
            let mut j = i + 1;
            while j < lines.len() && (is_blank(&lines[j]) || indent_len(&lines[j]) > 0) {
                j += 1;
            }
            while j > i && is_blank(&lines[j - 1]) {
                j -= 1;
            }
            let mut pre = lines[i..j].to_vec();
            unindent(&mut pre);
            out.push(Block::Pre(pre));
            last_was_heading = false;
            i = j;
            continue;
        }

        // A blank-surrounded line followed by unindented text may be a heading.
        if last_was_blank
            && !last_was_heading
            && i + 2 < lines.len()
            && is_blank(&lines[i + 1])
            && !is_blank(&lines[i + 2])
            && indent_len(&lines[i + 2]) == 0
            && let Some(head) = heading(line)
        {
            close_para(&mut para, &mut out);
            out.push(Block::Heading(head.to_owned()));
            last_was_heading = true;
            i += 2;
            continue;
        }

        last_was_blank = false;
        last_was_heading = false;
        para.push(line.clone());
        i += 1;
    }
    close_para(&mut para, &mut out);
    out
}

fn close_para(para: &mut Vec<String>, out: &mut Vec<Block>) {
    if !para.is_empty() {
        out.push(Block::Para(std::mem::take(para)));
    }
}

fn indent_len(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// Remove the longest whitespace prefix shared by all non-blank lines.
fn unindent(lines: &mut [String]) {
    let mut common: Option<String> = None;
    for line in lines.iter().filter(|l| !is_blank(l)) {
        let ws = &line[..indent_len(line)];
        common = Some(match common {
            None => ws.to_owned(),
            Some(prefix) => {
                let n = prefix
                    .bytes()
                    .zip(ws.bytes())
                    .take_while(|(a, b)| a == b)
                    .count();
                prefix[..n].to_owned()
            }
        });
    }
    let n = common.map_or(0, |prefix| prefix.len());
    for line in lines.iter_mut() {
        if is_blank(line) {
            line.clear();
        } else {
            line.drain(..n);
        }
    }
}

/// Return the trimmed line if it qualifies as a heading.
fn heading(line: &str) -> Option<&str> {
    let line = line.trim();
    let first = line.chars().next()?;
    if !first.is_uppercase() {
        return None;
    }
    let last = line.chars().next_back()?;
    if !last.is_alphanumeric() {
        return None;
    }
    if line.contains(|c| NON_HEADING_CHARS.contains(c)) {
        return None;
    }

    // Apostrophes only in a possessive "'s".
    let mut rest = line;
    while let Some(i) = rest.find('\'') {
        let after = &rest[i + 1..];
        let Some(tail) = after.strip_prefix('s') else {
            return None;
        };
        if tail.chars().next().is_some_and(|c| c != ' ') {
            return None;
        }
        rest = tail;
    }

    // Periods only inside words, as in "os.Exit".
    let mut rest = line;
    while let Some(i) = rest.find('.') {
        let after = &rest[i + 1..];
        if after.is_empty() || after.starts_with(' ') {
            return None;
        }
        rest = after;
    }

    Some(line)
}

fn anchor_id(heading: &str) -> String {
    let mut id = String::from("hdr-");
    id.extend(
        heading
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' }),
    );
    id
}

/// Escape a paragraph line, converting quotes and linking URLs.
fn emphasize(out: &mut String, line: &str) {
    let mut last = 0;
    for m in URL_RE.find_iter(line) {
        let url = m.as_str().trim_end_matches(['.', ',', ':', ';', '?', '!', ')']);
        push_escaped(out, &convert_quotes(&line[last..m.start()]));
        out.push_str(r#"<a href=""#);
        push_escaped(out, url);
        out.push_str(r#"">"#);
        push_escaped(out, url);
        out.push_str("</a>");
        last = m.start() + url.len();
    }
    push_escaped(out, &convert_quotes(&line[last..]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn html(text: &str) -> String {
        GodocMarkup.render_html(text)
    }

    #[test]
    fn test_single_paragraph() {
        assert_eq!(html("Hello world."), "<p>\nHello world.\n</p>\n");
    }

    #[test]
    fn test_paragraph_escaped() {
        assert_eq!(html("a < b && c"), "<p>\na &lt; b &amp;&amp; c\n</p>\n");
    }

    #[test]
    fn test_preformatted_block() {
        let text = "Example:\n\n\tfmt.Println(\"<hi>\")\n\t  x++\n\nDone.";
        assert_eq!(
            html(text),
            "<p>\nExample:\n</p>\n<pre>fmt.Println(&quot;&lt;hi&gt;&quot;)\n  x++\n</pre>\n<p>\nDone.\n</p>\n"
        );
    }

    #[test]
    fn test_pre_directly_after_paragraph_line() {
        let got = blocks("Intro\n  code\nOutro");
        assert_eq!(
            got,
            vec![
                Block::Para(vec!["Intro".to_owned()]),
                Block::Pre(vec!["code".to_owned()]),
                Block::Para(vec!["Outro".to_owned()]),
            ]
        );
    }

    #[test]
    fn test_heading_between_paragraphs() {
        let text = "Intro text.\n\nSection Title\n\nBody text.";
        assert_eq!(
            html(text),
            "<p>\nIntro text.\n</p>\n<h3 id=\"hdr-Section_Title\">Section Title</h3>\n<p>\nBody text.\n</p>\n"
        );
    }

    #[test]
    fn test_first_line_never_heading() {
        let got = blocks("Title\n\nBody.");
        assert_eq!(
            got,
            vec![
                Block::Para(vec!["Title".to_owned()]),
                Block::Para(vec!["Body.".to_owned()]),
            ]
        );
    }

    #[test]
    fn test_heading_rules() {
        assert_eq!(heading("Overview"), Some("Overview"));
        assert_eq!(heading("  Go's Types  "), Some("Go's Types"));
        assert_eq!(heading("Using os.Exit"), Some("Using os.Exit"));
        assert_eq!(heading("lowercase start"), None);
        assert_eq!(heading("Ends with period."), None);
        assert_eq!(heading("Has: colon"), None);
        assert_eq!(heading("Don't do this"), None);
        assert_eq!(heading("Trailing. space"), None);
        assert_eq!(heading(""), None);
    }

    #[test]
    fn test_heading_followed_by_pre_is_paragraph() {
        let got = blocks("Intro.\n\nCandidate\n\n\tcode");
        assert_eq!(got[1], Block::Para(vec!["Candidate".to_owned()]));
    }

    #[test]
    fn test_common_indent_removed() {
        let got = blocks("  one\n  two");
        assert_eq!(got, vec![Block::Para(vec!["one".to_owned(), "two".to_owned()])]);
    }

    #[test]
    fn test_url_linked() {
        assert_eq!(
            html("See http://golang.org/doc/."),
            "<p>\nSee <a href=\"http://golang.org/doc/\">http://golang.org/doc/</a>.\n</p>\n"
        );
    }

    #[test]
    fn test_quotes_converted() {
        assert_eq!(html("``hi''"), "<p>\n\u{201C}hi\u{201D}\n</p>\n");
    }

    #[test]
    fn test_render_text() {
        let text = "First paragraph is here.\n\n\tcode()\n\nLast.";
        assert_eq!(
            GodocMarkup.render_text(text, "    ", "\t", 72),
            "    First paragraph is here.\n\n\tcode()\n\n    Last.\n"
        );
    }

    #[test]
    fn test_empty_comment() {
        assert_eq!(html(""), "");
        assert_eq!(GodocMarkup.render_text("", "    ", "\t", 72), "");
    }
}
