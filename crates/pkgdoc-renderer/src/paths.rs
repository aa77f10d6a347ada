//! Import path display helpers.

use crate::escape::escape_html;
use crate::url::url_path;

/// Import paths longer than this (after escaping) get break opportunities.
const BREAKABLE_PATH_LEN: usize = 45;

/// Last element of an import path, HTML-escaped.
///
/// Commands are named after the final path element.
#[must_use]
pub fn command_name(import_path: &str) -> String {
    let name = import_path.rsplit('/').next().unwrap_or(import_path);
    escape_html(name)
}

/// URL-format an import path for display.
///
/// Long paths get a zero-width space after each `/` so browsers can wrap
/// them.
#[must_use]
pub fn import_path_html(import_path: &str) -> String {
    let path = url_path(import_path);
    if path.len() > BREAKABLE_PATH_LEN {
        path.replace('/', "/&#8203;")
    } else {
        path
    }
}

/// URL-format `import_path` relative to `parent`.
///
/// The parent prefix and its trailing `/` are removed when `import_path` lies
/// strictly below `parent`; otherwise the path is kept whole.
#[must_use]
pub fn relative_import_path(import_path: &str, parent: Option<&str>) -> String {
    let relative = parent
        .filter(|p| !p.is_empty())
        .and_then(|p| import_path.strip_prefix(p))
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(import_path);
    url_path(relative)
}
