//! URL path formatting.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped in a URL path.
///
/// Unreserved characters and the sub-delimiters legal in path segments
/// (`$&+,/:;=@`) pass through; `?`, `#`, spaces and everything else are
/// percent-encoded.
const PATH_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b'/')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'@');

/// Format an arbitrary string as an escaped URL path.
///
/// Total over all inputs. A relative path whose first segment contains a
/// colon gets a `./` prefix so it cannot be read as a URL scheme.
///
/// # Examples
///
/// ```
/// use pkgdoc_renderer::url_path;
///
/// assert_eq!(url_path("/github.com/user/repo"), "/github.com/user/repo");
/// assert_eq!(url_path("a b?c"), "a%20b%3Fc");
/// ```
#[must_use]
pub fn url_path(path: &str) -> String {
    let escaped = utf8_percent_encode(path, PATH_ESCAPE).to_string();
    match path.find(':') {
        Some(i) if !path[..i].contains('/') => format!("./{escaped}"),
        _ => escaped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_path_plain() {
        assert_eq!(url_path("fmt"), "fmt");
        assert_eq!(url_path("/code.google.com/p/go.net/html"), "/code.google.com/p/go.net/html");
    }

    #[test]
    fn test_url_path_escapes_reserved() {
        assert_eq!(url_path("a#b"), "a%23b");
        assert_eq!(url_path("a?b"), "a%3Fb");
        assert_eq!(url_path("a b"), "a%20b");
        assert_eq!(url_path("100%"), "100%25");
        assert_eq!(url_path("<x>"), "%3Cx%3E");
    }

    #[test]
    fn test_url_path_keeps_sub_delims() {
        assert_eq!(url_path("/a$b&c+d,e;f=g@h"), "/a$b&c+d,e;f=g@h");
        assert_eq!(url_path("~user/x_y-z.go"), "~user/x_y-z.go");
    }

    #[test]
    fn test_url_path_non_ascii() {
        assert_eq!(url_path("é"), "%C3%A9");
    }

    #[test]
    fn test_url_path_colon_in_first_segment() {
        assert_eq!(url_path("a:b"), "./a:b");
        assert_eq!(url_path("/a:b"), "/a:b");
        assert_eq!(url_path("a/b:c"), "a/b:c");
    }

    #[test]
    fn test_url_path_empty() {
        assert_eq!(url_path(""), "");
    }
}
