//! Template name to MIME type mapping.

use std::path::Path;

/// Content types by template file extension.
const CONTENT_TYPES: &[(&str, &str)] = &[
    ("html", "text/html; charset=utf-8"),
    ("txt", "text/plain; charset=utf-8"),
];

/// Content type for a template name, if its extension has one.
#[must_use]
pub fn content_type_for(template_name: &str) -> Option<&'static str> {
    let ext = Path::new(template_name).extension()?.to_str()?;
    CONTENT_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, content_type)| *content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(content_type_for("pkg.html"), Some("text/html; charset=utf-8"));
        assert_eq!(content_type_for("pkg.txt"), Some("text/plain; charset=utf-8"));
    }

    #[test]
    fn test_unknown_extensions() {
        assert_eq!(content_type_for("feed.xml"), None);
        assert_eq!(content_type_for("noext"), None);
        assert_eq!(content_type_for("pkg.HTML"), None);
        assert_eq!(content_type_for(".html"), None);
    }

    #[test]
    fn test_last_extension_wins() {
        assert_eq!(content_type_for("pkg.html.txt"), Some("text/plain; charset=utf-8"));
    }
}
