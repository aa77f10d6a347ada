//! Command reports written to stderr.
//!
//! stdout is reserved for rendered bodies, so every status line goes
//! through [`Output`].

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};

/// Reporter for command progress and failures.
pub(crate) struct Output {
    term: Term,
    ok: Style,
    failed: Style,
    heading: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn stderr() -> Self {
        Self {
            term: Term::stderr(),
            ok: Style::new().green(),
            failed: Style::new().red(),
            heading: Style::new().cyan().bold(),
        }
    }

    /// List a parsed template set under its source directory.
    pub(crate) fn template_set(&self, dir: &Path, names: &[String]) {
        self.line(self.heading.apply_to(format!("Templates: {}", dir.display())));
        for name in names {
            self.line(format_args!("  {name}"));
        }
        self.line(self.ok.apply_to(parsed_summary(names.len())));
    }

    /// Report a body written to a file.
    pub(crate) fn rendered(&self, template: &str, dest: &Path) {
        self.line(
            self.ok
                .apply_to(format!("Rendered {template} to {}", dest.display())),
        );
    }

    /// Report the status and content type a render produced.
    pub(crate) fn response_meta(&self, status: Option<u16>, content_type: Option<&str>) {
        for line in response_meta_lines(status, content_type) {
            self.line(line);
        }
    }

    /// Report a command failure.
    pub(crate) fn failure(&self, err: &dyn Display) {
        self.line(self.failed.apply_to(format!("Error: {err}")));
    }

    fn line(&self, text: impl Display) {
        let _ = self.term.write_line(&text.to_string());
    }
}

fn parsed_summary(count: usize) -> String {
    match count {
        1 => "1 template parsed".to_owned(),
        n => format!("{n} templates parsed"),
    }
}

fn response_meta_lines(status: Option<u16>, content_type: Option<&str>) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    if let Some(status) = status {
        lines.push(format!("Status: {status}"));
    }
    lines.push(format!("Content-Type: {}", content_type.unwrap_or("(not set)")));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parsed_summary() {
        assert_eq!(parsed_summary(0), "0 templates parsed");
        assert_eq!(parsed_summary(1), "1 template parsed");
        assert_eq!(parsed_summary(3), "3 templates parsed");
    }

    #[test]
    fn test_response_meta_lines() {
        assert_eq!(
            response_meta_lines(Some(404), Some("text/plain; charset=utf-8")),
            vec!["Status: 404", "Content-Type: text/plain; charset=utf-8"]
        );
        assert_eq!(response_meta_lines(None, None), vec!["Content-Type: (not set)"]);
    }
}
