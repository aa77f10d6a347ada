//! Declaration rendering with cross-reference links.

use pkgdoc_doc::{Annotation, Decl};

use crate::escape::push_escaped;
use crate::url::url_path;

/// Render a declaration as HTML, linking each annotated byte range.
///
/// Text outside annotations is escaped verbatim. Each annotation becomes one
/// `<a>` element wrapping the escaped original substring and pointing at
/// `/<import path>#<name>`, or just `#<name>` for same-package references.
///
/// Annotations are expected sorted by `pos`, non-overlapping and within the
/// text; they are not re-sorted. Out-of-contract ranges are clamped to the
/// text and to the end of the previous annotation, and a range that does not
/// fall on character boundaries is left as plain text.
#[must_use]
pub fn decl_html(decl: &Decl) -> String {
    let text = decl.text.as_str();
    let mut out = String::with_capacity(text.len() * 2);
    let mut last = 0;

    for annotation in &decl.annotations {
        let pos = annotation.pos.clamp(last, text.len());
        let end = annotation.end.clamp(pos, text.len());
        let (Some(before), Some(label)) = (text.get(last..pos), text.get(pos..end)) else {
            continue;
        };
        push_escaped(&mut out, before);
        out.push_str(r#"<a href=""#);
        push_escaped(&mut out, &annotation_href(annotation));
        out.push_str(r#"">"#);
        push_escaped(&mut out, label);
        out.push_str("</a>");
        last = end;
    }

    push_escaped(&mut out, &text[last..]);
    out
}

fn annotation_href(annotation: &Annotation) -> String {
    let mut href = if annotation.import_path.is_empty() {
        String::new()
    } else {
        url_path(&format!("/{}", annotation.import_path))
    };
    href.push('#');
    href.push_str(&url_path(&annotation.name));
    href
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn annotation(pos: usize, end: usize, import_path: &str, name: &str) -> Annotation {
        Annotation {
            pos,
            end,
            import_path: import_path.to_owned(),
            name: name.to_owned(),
        }
    }

    fn decl(text: &str, annotations: Vec<Annotation>) -> Decl {
        Decl {
            text: text.to_owned(),
            annotations,
        }
    }

    /// Drop link tags and undo escaping.
    fn visible_text(html: &str) -> String {
        let mut out = String::new();
        let mut rest = html;
        while let Some(start) = rest.find('<') {
            out.push_str(&rest[..start]);
            let close = rest[start..].find('>').unwrap();
            rest = &rest[start + close + 1..];
        }
        out.push_str(rest);
        out.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#x27;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_no_annotations() {
        let d = decl("type T struct{ m map[string]<-chan int }", vec![]);
        assert_eq!(
            decl_html(&d),
            "type T struct{ m map[string]&lt;-chan int }"
        );
    }

    #[test]
    fn test_cross_package_link() {
        let d = decl(
            "func Copy(dst io.Writer, src io.Reader)",
            vec![
                annotation(14, 23, "io", "Writer"),
                annotation(29, 38, "io", "Reader"),
            ],
        );
        assert_eq!(
            decl_html(&d),
            r#"func Copy(dst <a href="/io#Writer">io.Writer</a>, src <a href="/io#Reader">io.Reader</a>)"#
        );
    }

    #[test]
    fn test_same_package_link() {
        let d = decl("func New() *Buffer", vec![annotation(12, 18, "", "Buffer")]);
        assert_eq!(
            decl_html(&d),
            r##"func New() *<a href="#Buffer">Buffer</a>"##
        );
    }

    #[test]
    fn test_link_target_escaped() {
        let d = decl("x T", vec![annotation(2, 3, "example.com/a b", "T")]);
        assert_eq!(
            decl_html(&d),
            r#"x <a href="/example.com/a%20b#T">T</a>"#
        );
    }

    #[test]
    fn test_label_escaped() {
        let d = decl("a <T> b", vec![annotation(2, 5, "", "T")]);
        assert_eq!(decl_html(&d), r##"a <a href="#T">&lt;T&gt;</a> b"##);
    }

    #[test]
    fn test_visible_text_preserved() {
        let text = "func (c *Conn) Read(b []byte) (n int, err error) // <&>";
        let d = decl(
            text,
            vec![
                annotation(9, 13, "", "Conn"),
                annotation(42, 47, "builtin", "error"),
                annotation(47, 48, "", "x"),
            ],
        );
        assert_eq!(visible_text(&decl_html(&d)), text);
    }

    #[test]
    fn test_annotation_at_boundaries() {
        let d = decl("Reader", vec![annotation(0, 6, "io", "Reader")]);
        assert_eq!(decl_html(&d), r#"<a href="/io#Reader">Reader</a>"#);
        let empty = decl("", vec![annotation(0, 0, "", "x")]);
        assert_eq!(decl_html(&empty), r##"<a href="#x"></a>"##);
    }

    #[test]
    fn test_out_of_bounds_clamped() {
        let d = decl("abc", vec![annotation(1, 99, "", "X")]);
        assert_eq!(decl_html(&d), r##"a<a href="#X">bc</a>"##);
    }

    #[test]
    fn test_overlap_clamped() {
        let d = decl(
            "abcdef",
            vec![annotation(0, 4, "", "A"), annotation(2, 6, "", "B")],
        );
        assert_eq!(visible_text(&decl_html(&d)), "abcdef");
    }

    #[test]
    fn test_non_char_boundary_skipped() {
        let d = decl("é x", vec![annotation(1, 3, "", "X")]);
        assert_eq!(decl_html(&d), "é x");
    }
}
