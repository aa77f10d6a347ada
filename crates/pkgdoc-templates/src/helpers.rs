//! Rendering helpers exposed to templates.
//!
//! Helper names match the template vocabulary: `comment`, `commentText`,
//! `decl`, `equal`, `map`, `breadcrumbs`, `commandName`, `relativePath`,
//! `relativeTime`, `importPath`, `url`, `exampleId`, `examples`, `isType`,
//! `isPackage` and `isFunc`.
//!
//! Helpers producing markup return safe strings so auto-escaping leaves them
//! alone. `url` and `relativePath` escape their own output when the template
//! auto-escapes HTML and return plain text otherwise. Documentation objects are read back from template values through
//! serde, which is why the view structs below only name the fields a helper
//! needs.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use minijinja::value::{Rest, ValueKind, ViaDeserialize};
use minijinja::{AutoEscape, Environment, Error, ErrorKind, State, Value};
use pkgdoc_doc::{Decl, Package};
use pkgdoc_renderer::{
    Clock, CommentRenderer, OwnerIdent, breadcrumbs_html, collect_examples, command_name,
    decl_html, escape_html, example_id, import_path_html, relative_import_path, relative_time,
    url_path,
};
use serde::Deserialize;

/// Error raised by a helper for malformed arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HelperError {
    #[error("map requires an even number of arguments, got {0}")]
    OddArgumentCount(usize),
    #[error("map key at position {0} must be a string")]
    NonStringKey(usize),
}

impl From<HelperError> for Error {
    fn from(err: HelperError) -> Self {
        Error::new(ErrorKind::InvalidOperation, err.to_string())
    }
}

/// Build a mapping from alternating keys and values.
///
/// Later duplicates of a key replace earlier ones.
pub fn build_map(args: &[Value]) -> Result<BTreeMap<String, Value>, HelperError> {
    if args.len() % 2 != 0 {
        return Err(HelperError::OddArgumentCount(args.len()));
    }
    let mut map = BTreeMap::new();
    for (i, pair) in args.chunks_exact(2).enumerate() {
        let key = pair[0].as_str().ok_or(HelperError::NonStringKey(i * 2))?;
        map.insert(key.to_owned(), pair[1].clone());
    }
    Ok(map)
}

/// Import path fields of a package.
#[derive(Deserialize)]
struct PackagePath {
    import_path: String,
    #[serde(default)]
    project_root: String,
}

/// Example owner as serialized by `DocItem`.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum OwnerRecord {
    Package,
    Type {
        name: String,
    },
    Func {
        name: String,
        #[serde(default)]
        recv: String,
    },
}

impl OwnerRecord {
    fn ident(&self) -> OwnerIdent<'_> {
        match self {
            Self::Package => OwnerIdent::Package,
            Self::Type { name } => OwnerIdent::Type(name),
            Self::Func { name, recv } => OwnerIdent::Func { recv, name },
        }
    }
}

#[derive(Deserialize)]
struct ExampleName {
    #[serde(default)]
    name: String,
}

/// Structural equality over template values.
///
/// Unlike `Value ==`, values of different kinds never match and an integer
/// never equals a float, so `equal(1, 1.0)` is false.
fn deep_equal(a: &Value, b: &Value) -> bool {
    if a.kind() != b.kind() || a.is_integer() != b.is_integer() {
        return false;
    }
    match a.kind() {
        ValueKind::Seq | ValueKind::Map => {
            let (Ok(mut xs), Ok(ys)) = (a.try_iter(), b.try_iter()) else {
                return a == b;
            };
            if a.len() != b.len() {
                return false;
            }
            if a.kind() == ValueKind::Seq {
                xs.zip(ys).all(|(x, y)| deep_equal(&x, &y))
            } else {
                xs.all(|key| match (a.get_item(&key), b.get_item(&key)) {
                    (Ok(x), Ok(y)) => !y.is_undefined() && deep_equal(&x, &y),
                    _ => false,
                })
            }
        }
        _ => a == b,
    }
}

/// Wrap a URL path for the current output: escaped and marked safe under
/// HTML auto-escaping, plain otherwise.
fn path_value(state: &State, path: &str) -> Value {
    match state.auto_escape() {
        AutoEscape::Html => Value::from_safe_string(escape_html(path)),
        _ => Value::from(path),
    }
}

fn url(state: &State, path: &str) -> Value {
    path_value(state, &url_path(path))
}

fn relative_path(state: &State, import_path: &str, parent: Option<Value>) -> Value {
    let path = relative_import_path(import_path, parent.as_ref().and_then(Value::as_str));
    path_value(state, &path)
}

fn has_kind(value: &Value, kind: &str) -> bool {
    value
        .get_attr("kind")
        .ok()
        .is_some_and(|tag| tag.as_str() == Some(kind))
}

/// Bind all helpers into `env`.
pub(crate) fn register(
    env: &mut Environment<'static>,
    comments: Arc<CommentRenderer>,
    clock: Arc<dyn Clock>,
) {
    let html_comments = Arc::clone(&comments);
    env.add_function("comment", move |text: String| {
        Value::from_safe_string(html_comments.html(&text))
    });
    env.add_function("commentText", move |text: String| comments.text(&text));
    env.add_function("decl", |decl: ViaDeserialize<Decl>| {
        Value::from_safe_string(decl_html(&decl))
    });
    env.add_function("equal", |a: Value, b: Value| deep_equal(&a, &b));
    env.add_function("map", |args: Rest<Value>| -> Result<Value, Error> {
        Ok(Value::from(build_map(&args)?))
    });
    env.add_function("breadcrumbs", |pkg: ViaDeserialize<PackagePath>| {
        Value::from_safe_string(breadcrumbs_html(&pkg.import_path, pkg.project_root.len()))
    });
    env.add_function("commandName", |pkg: ViaDeserialize<PackagePath>| {
        Value::from_safe_string(command_name(&pkg.import_path))
    });
    env.add_function("relativePath", relative_path);
    env.add_function("relativeTime", move |t: ViaDeserialize<DateTime<Utc>>| {
        relative_time(*t, clock.now())
    });
    env.add_function("importPath", |import_path: String| {
        Value::from_safe_string(import_path_html(&import_path))
    });
    env.add_function("url", url);
    env.add_function(
        "exampleId",
        |owner: ViaDeserialize<OwnerRecord>, example: ViaDeserialize<ExampleName>| {
            Value::from_safe_string(example_id(owner.ident(), &example.name))
        },
    );
    env.add_function("examples", |pkg: ViaDeserialize<Package>| {
        Value::from_serialize(collect_examples(&pkg))
    });
    env.add_function("isType", |v: Value| has_kind(&v, "type"));
    env.add_function("isPackage", |v: Value| has_kind(&v, "package"));
    env.add_function("isFunc", |v: Value| has_kind(&v, "func"));
}
