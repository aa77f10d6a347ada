//! Parsed documentation objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Documentation for one package.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    /// Slash-delimited import path, e.g. `github.com/user/repo/sub`.
    pub import_path: String,
    /// Import path of the project containing the package.
    ///
    /// Empty for standard packages.
    pub project_root: String,
    /// Display name of the project.
    pub project_name: String,
    /// Project home page.
    pub project_url: String,
    /// Package name from the package clause.
    pub name: String,
    /// First sentence of the package comment.
    pub synopsis: String,
    /// Package comment.
    pub doc: String,
    /// Whether the package is a command.
    pub is_cmd: bool,
    /// Time the documentation was last refreshed.
    pub updated: Option<DateTime<Utc>>,
    /// Link to the source browser.
    pub browse_url: String,
    /// Top-level constant declarations.
    pub consts: Vec<Value>,
    /// Top-level variable declarations.
    pub vars: Vec<Value>,
    /// Functions not associated with a type.
    pub funcs: Vec<Func>,
    pub types: Vec<Type>,
    /// Package-level examples.
    pub examples: Vec<Example>,
    /// Import paths of imported packages.
    pub imports: Vec<String>,
    /// Parse errors reported by the source parser.
    pub errors: Vec<String>,
}

impl Package {
    /// Byte length of the project-root prefix of the import path.
    #[must_use]
    pub fn project_root_len(&self) -> usize {
        self.project_root.len()
    }
}

/// A named type with its associated functions and methods.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Type {
    pub name: String,
    pub doc: String,
    pub decl: Decl,
    pub consts: Vec<Value>,
    pub vars: Vec<Value>,
    /// Constructors: functions returning the type.
    pub funcs: Vec<Func>,
    /// Functions with this type as receiver.
    pub methods: Vec<Func>,
    pub examples: Vec<Example>,
}

/// A function or method.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Func {
    pub name: String,
    /// Receiver type name, possibly with a leading `*`. Empty for plain functions.
    pub recv: String,
    pub doc: String,
    pub decl: Decl,
    /// Link to the function in the source browser.
    pub url: String,
    pub examples: Vec<Example>,
}

/// A constant or variable declaration group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Value {
    pub decl: Decl,
    pub doc: String,
}

/// Verbatim declaration source with cross-reference annotations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Decl {
    pub text: String,
    /// Sorted by `pos`, non-overlapping, within `text` bounds.
    pub annotations: Vec<Annotation>,
}

/// Link annotation over the half-open byte range `[pos, end)` of a [`Decl`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotation {
    pub pos: usize,
    pub end: usize,
    /// Import path of the referenced package. Empty means the same package.
    pub import_path: String,
    /// Identifier used for the in-page anchor.
    pub name: String,
}

/// A runnable example.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Example {
    /// Suffix name. Empty for the default example of its owner.
    pub name: String,
    pub doc: String,
    pub code: String,
    /// Expected output, if the example declares one.
    pub output: String,
}
