//! Plain-text output shared by all engines.

use super::{Block, convert_quotes, is_blank};

/// Write `blocks` as indented, word-wrapped text.
///
/// Paragraphs are separated by one blank line, headings by two.
pub(crate) fn write_text(blocks: &[Block], indent: &str, pre_indent: &str, width: usize) -> String {
    let mut w = LineWrapper::new(indent, width);
    for block in blocks {
        match block {
            Block::Para(lines) => {
                for line in lines {
                    w.write(&convert_quotes(line));
                }
                w.flush();
            }
            Block::Heading(heading) => {
                w.out.push('\n');
                w.write(&convert_quotes(heading));
                w.flush();
            }
            Block::Pre(lines) => {
                w.out.push('\n');
                for line in lines {
                    if !is_blank(line) {
                        w.out.push_str(pre_indent);
                        w.out.push_str(line);
                    }
                    w.out.push('\n');
                }
                w.printed = true;
            }
        }
    }
    w.out
}

struct LineWrapper<'a> {
    out: String,
    indent: &'a str,
    width: usize,
    /// Columns used on the current line, excluding the indent.
    n: usize,
    pend_space: usize,
    printed: bool,
}

impl<'a> LineWrapper<'a> {
    fn new(indent: &'a str, width: usize) -> Self {
        Self {
            out: String::new(),
            indent,
            width,
            n: 0,
            pend_space: 0,
            printed: false,
        }
    }

    fn write(&mut self, text: &str) {
        if self.n == 0 && self.printed {
            self.out.push('\n');
        }
        self.printed = true;

        for word in text.split_whitespace() {
            let len = word.chars().count();
            if self.n > 0 && self.n + self.pend_space + len > self.width {
                self.out.push('\n');
                self.n = 0;
                self.pend_space = 0;
            }
            if self.n == 0 {
                self.out.push_str(self.indent);
            }
            for _ in 0..self.pend_space {
                self.out.push(' ');
            }
            self.out.push_str(word);
            self.n += self.pend_space + len;
            self.pend_space = 1;
        }
    }

    fn flush(&mut self) {
        if self.n == 0 {
            return;
        }
        self.out.push('\n');
        self.pend_space = 0;
        self.n = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn para(text: &str) -> Block {
        Block::Para(vec![text.to_owned()])
    }

    #[test]
    fn test_wraps_at_width() {
        let out = write_text(&[para("aaa bbb ccc ddd")], "  ", "\t", 7);
        assert_eq!(out, "  aaa bbb\n  ccc ddd\n");
    }

    #[test]
    fn test_long_word_not_split() {
        let out = write_text(&[para("abcdefghij x")], "", "\t", 4);
        assert_eq!(out, "abcdefghij\nx\n");
    }

    #[test]
    fn test_paragraphs_separated_by_blank_line() {
        let out = write_text(&[para("one"), para("two")], "    ", "\t", 72);
        assert_eq!(out, "    one\n\n    two\n");
    }

    #[test]
    fn test_heading_gets_extra_blank_line() {
        let out = write_text(
            &[para("one"), Block::Heading("Title".to_owned()), para("two")],
            "",
            "\t",
            72,
        );
        assert_eq!(out, "one\n\n\nTitle\n\ntwo\n");
    }

    #[test]
    fn test_pre_lines_use_pre_indent() {
        let out = write_text(
            &[
                para("Example:"),
                Block::Pre(vec!["x := 1".to_owned(), String::new(), "y := 2".to_owned()]),
                para("Done."),
            ],
            "    ",
            "\t",
            72,
        );
        assert_eq!(out, "    Example:\n\n\tx := 1\n\n\ty := 2\n\n    Done.\n");
    }

    #[test]
    fn test_quotes_converted() {
        let out = write_text(&[para("``quoted''")], "", "\t", 72);
        assert_eq!(out, "\u{201C}quoted\u{201D}\n");
    }
}
