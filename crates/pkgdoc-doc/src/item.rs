//! Tagged references to documentation objects.

use serde::Serialize;

use crate::model::{Example, Func, Package, Type};

/// A borrowed package, type or function.
///
/// Serializes as the wrapped object's fields plus a `kind` field holding
/// `"package"`, `"type"` or `"func"`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DocItem<'a> {
    Package(&'a Package),
    Type(&'a Type),
    Func(&'a Func),
}

impl DocItem<'_> {
    /// The `kind` tag this item serializes with.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Package(_) => "package",
            Self::Type(_) => "type",
            Self::Func(_) => "func",
        }
    }
}

/// An example paired with the object it documents.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ExampleRef<'a> {
    pub owner: DocItem<'a>,
    pub example: &'a Example,
}
