//! Documentation data model for pkgdoc.
//!
//! These types are produced by an external source parser and consumed
//! read-only by the renderer. All collections keep declaration order, which
//! the renderer relies on for stable example anchors.
//!
//! [`DocItem`] wraps a borrowed package, type or function and serializes with
//! a `kind` tag so templates can tell the three apart.

mod item;
mod model;

pub use item::{DocItem, ExampleRef};
pub use model::{Annotation, Decl, Example, Func, Package, Type, Value};
