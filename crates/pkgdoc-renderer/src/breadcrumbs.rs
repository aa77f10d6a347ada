//! Import path breadcrumbs.

use crate::escape::push_escaped;
use crate::url::url_path;

/// Index page listing the standard packages.
pub const STD_PACKAGES_PATH: &str = "/-/go";

/// One entry of a breadcrumb trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crumb<'a> {
    /// Link to the standard package index, shown for root-less paths.
    StandardPackages,
    /// Ancestor of the current page.
    Segment {
        /// Text shown for this step of the path.
        label: &'a str,
        /// Import path up to and including this step.
        path: &'a str,
    },
    /// The current page; not linked.
    Current(&'a str),
}

/// Split an import path into breadcrumbs.
///
/// The first `project_root_len` bytes form a single segment (the project
/// root). A zero-length root means a standard package: the trail starts with
/// [`Crumb::StandardPackages`] and every slash-separated step is its own
/// segment. A root covering the whole path yields only [`Crumb::Current`].
/// A root length that does not end at a `/` is treated the same way.
///
/// Joining the labels of all [`Crumb::Segment`] and [`Crumb::Current`]
/// entries with `/` reproduces `import_path`.
#[must_use]
pub fn breadcrumbs(import_path: &str, project_root_len: usize) -> Vec<Crumb<'_>> {
    let mut crumbs = Vec::new();
    let mut next = if project_root_len == 0 {
        crumbs.push(Crumb::StandardPackages);
        import_path.find('/')
    } else if import_path.as_bytes().get(project_root_len) == Some(&b'/') {
        Some(project_root_len)
    } else {
        None
    };

    let mut start = 0;
    while let Some(len) = next.filter(|&len| len > 0) {
        let end = start + len;
        crumbs.push(Crumb::Segment {
            label: &import_path[start..end],
            path: &import_path[..end],
        });
        start = end + 1;
        next = import_path[start..].find('/');
    }

    crumbs.push(Crumb::Current(&import_path[start..]));
    crumbs
}

/// Render the breadcrumb trail of an import path as HTML.
#[must_use]
pub fn breadcrumbs_html(import_path: &str, project_root_len: usize) -> String {
    let mut out = String::with_capacity(import_path.len() * 3);
    for crumb in breadcrumbs(import_path, project_root_len) {
        match crumb {
            Crumb::StandardPackages => {
                out.push_str(r#"<a href=""#);
                out.push_str(STD_PACKAGES_PATH);
                out.push_str(r#"" title="Standard Packages">☆</a> "#);
            }
            Crumb::Segment { label, path } => {
                out.push_str(r#"<a href=""#);
                push_escaped(&mut out, &url_path(&format!("/{path}")));
                out.push_str(r#"">"#);
                push_escaped(&mut out, label);
                out.push_str("</a>/");
            }
            Crumb::Current(label) => push_escaped(&mut out, label),
        }
    }
    out
}
