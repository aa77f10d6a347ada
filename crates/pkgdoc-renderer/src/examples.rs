//! Example collection and anchor identifiers.

use pkgdoc_doc::{DocItem, Example, ExampleRef, Package};

use crate::escape::escape_html;

/// Prefix shared by all example anchors.
pub const EXAMPLE_ID_PREFIX: &str = "_example";

/// Collect every example of a package in display order.
///
/// Order: package examples, then each function's examples, then for each
/// type its own examples followed by those of its constructors and methods.
#[must_use]
pub fn collect_examples(pkg: &Package) -> Vec<ExampleRef<'_>> {
    let mut refs = Vec::new();
    push_refs(&mut refs, DocItem::Package(pkg), &pkg.examples);
    for func in &pkg.funcs {
        push_refs(&mut refs, DocItem::Func(func), &func.examples);
    }
    for ty in &pkg.types {
        push_refs(&mut refs, DocItem::Type(ty), &ty.examples);
        for func in ty.funcs.iter().chain(&ty.methods) {
            push_refs(&mut refs, DocItem::Func(func), &func.examples);
        }
    }
    refs
}

fn push_refs<'a>(refs: &mut Vec<ExampleRef<'a>>, owner: DocItem<'a>, examples: &'a [Example]) {
    refs.extend(examples.iter().map(|example| ExampleRef { owner, example }));
}

/// The parts of an example owner that feed into its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OwnerIdent<'a> {
    Package,
    Type(&'a str),
    Func {
        /// Receiver type, optionally starting with `*`.
        recv: &'a str,
        name: &'a str,
    },
}

impl<'a> From<DocItem<'a>> for OwnerIdent<'a> {
    fn from(item: DocItem<'a>) -> Self {
        match item {
            DocItem::Package(_) => Self::Package,
            DocItem::Type(ty) => Self::Type(&ty.name),
            DocItem::Func(func) => Self::Func {
                recv: &func.recv,
                name: &func.name,
            },
        }
    }
}

/// Build the HTML-escaped anchor id for an example.
///
/// `_example`, then `_Type` for type examples or `_Recv_Name` / `_Name` for
/// function examples (a leading `*` on the receiver is dropped), then
/// `-suffix` when the example is named.
///
/// # Examples
///
/// ```
/// use pkgdoc_renderer::{OwnerIdent, example_id};
///
/// let owner = OwnerIdent::Func { recv: "*Buffer", name: "Write" };
/// assert_eq!(example_id(owner, "basic"), "_example_Buffer_Write-basic");
/// assert_eq!(example_id(OwnerIdent::Package, ""), "_example");
/// ```
#[must_use]
pub fn example_id(owner: OwnerIdent<'_>, example_name: &str) -> String {
    let mut id = String::with_capacity(64);
    id.push_str(EXAMPLE_ID_PREFIX);
    match owner {
        OwnerIdent::Package => {}
        OwnerIdent::Type(name) => {
            id.push('_');
            id.push_str(name);
        }
        OwnerIdent::Func { recv, name } => {
            id.push('_');
            if !recv.is_empty() {
                id.push_str(recv.strip_prefix('*').unwrap_or(recv));
                id.push('_');
            }
            id.push_str(name);
        }
    }
    if !example_name.is_empty() {
        id.push('-');
        id.push_str(example_name);
    }
    escape_html(&id)
}

/// Anchor id of a collected example.
#[must_use]
pub fn example_ref_id(example: &ExampleRef<'_>) -> String {
    example_id(example.owner.into(), &example.example.name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pkgdoc_doc::{Func, Type};
    use pretty_assertions::assert_eq;

    use super::*;

    fn example(name: &str) -> Example {
        Example {
            name: name.to_owned(),
            ..Example::default()
        }
    }

    fn func(recv: &str, name: &str, examples: Vec<Example>) -> Func {
        Func {
            name: name.to_owned(),
            recv: recv.to_owned(),
            examples,
            ..Func::default()
        }
    }

    fn sample_package() -> Package {
        Package {
            import_path: "bytes".to_owned(),
            examples: vec![example("")],
            funcs: vec![
                func("", "Compare", vec![]),
                func("", "Equal", vec![example(""), example("Basic")]),
            ],
            types: vec![Type {
                name: "Buffer".to_owned(),
                examples: vec![example("reader")],
                funcs: vec![func("", "NewBuffer", vec![example("")])],
                methods: vec![
                    func("*Buffer", "Write", vec![example("")]),
                    func("Buffer", "Len", vec![example("")]),
                ],
                ..Type::default()
            }],
            ..Package::default()
        }
    }

    #[test]
    fn test_collection_order() {
        let pkg = sample_package();
        let ids: Vec<String> = collect_examples(&pkg).iter().map(example_ref_id).collect();
        assert_eq!(
            ids,
            vec![
                "_example",
                "_example_Equal",
                "_example_Equal-Basic",
                "_example_Buffer-reader",
                "_example_NewBuffer",
                "_example_Buffer_Write",
                "_example_Buffer_Len",
            ]
        );
    }

    #[test]
    fn test_owners_tagged() {
        let pkg = sample_package();
        let kinds: Vec<&str> = collect_examples(&pkg).iter().map(|r| r.owner.kind()).collect();
        assert_eq!(
            kinds,
            vec!["package", "func", "func", "type", "func", "func", "func"]
        );
    }

    #[test]
    fn test_ids_unique_and_deterministic() {
        let pkg = Package {
            funcs: vec![
                func("", "Plain", vec![]),
                func("", "Run", vec![example(""), example("Basic")]),
            ],
            ..Package::default()
        };
        let first: Vec<String> = collect_examples(&pkg).iter().map(example_ref_id).collect();
        let second: Vec<String> = collect_examples(&pkg).iter().map(example_ref_id).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["_example_Run", "_example_Run-Basic"]);
        assert_eq!(first.iter().collect::<HashSet<_>>().len(), first.len());
    }

    #[test]
    fn test_pointer_receiver_normalized() {
        let by_ptr = example_id(OwnerIdent::Func { recv: "*T", name: "M" }, "");
        let by_val = example_id(OwnerIdent::Func { recv: "T", name: "M" }, "");
        assert_eq!(by_ptr, by_val);
        assert_eq!(by_ptr, "_example_T_M");
    }

    #[test]
    fn test_id_escaped() {
        assert_eq!(
            example_id(OwnerIdent::Type("T<\"x\">"), ""),
            "_example_T&lt;&quot;x&quot;&gt;"
        );
    }

    #[test]
    fn test_empty_package() {
        assert!(collect_examples(&Package::default()).is_empty());
    }
}
