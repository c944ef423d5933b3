//! Graph builder - IR declarations to nodes and dependency edges.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::{DeclGraph, DeclNode};
use crate::core::{LibraryName, Name};
use crate::errors::SummaryError;
use crate::ir::{IrConstValue, IrDecl, IrDeclKind};

/// Build the dependency graph for `decls`, which must be in source order.
///
/// Edges come from identifier-valued constants and from the same-library
/// references of opaque declarations. Every such reference must name a
/// declaration in `decls`; a member reference (`lib/Enum.MEMBER`) resolves
/// to the declaration that owns the member.
pub fn build(library: &LibraryName, decls: &[IrDecl]) -> Result<DeclGraph, SummaryError> {
    let mut graph = DiGraph::with_capacity(decls.len(), decls.len());
    let mut index = HashMap::with_capacity(decls.len());

    // First pass: one node per declaration.
    for decl in decls {
        let name = Name::parse(&decl.name)?;
        if index.contains_key(&name) {
            return Err(SummaryError::DuplicateDeclaration { name });
        }

        let (identifier, references) = match &decl.kind {
            IrDeclKind::Const(c) => match &c.value {
                IrConstValue::Identifier { identifier } => (Some(Name::parse(identifier)?), Vec::new()),
                IrConstValue::Literal { .. } => (None, Vec::new()),
            },
            IrDeclKind::Struct(o)
            | IrDeclKind::Enum(o)
            | IrDeclKind::Bits(o)
            | IrDeclKind::Protocol(o)
            | IrDeclKind::Alias(o) => (None, local_references(library, &name, &o.references)?),
        };

        let node = graph.add_node(DeclNode {
            name: name.clone(),
            identifier,
            references,
        });
        index.insert(name, node);
    }

    // Second pass: resolve references into edges.
    let mut edges: Vec<(NodeIndex, NodeIndex)> = Vec::new();
    for from in graph.node_indices() {
        let node = &graph[from];
        for target in node.identifier.iter().chain(node.references.iter()) {
            let to = lookup(&index, target).ok_or_else(|| {
                SummaryError::UnresolvedIdentifierReference {
                    decl: node.name.clone(),
                    target: target.to_string(),
                }
            })?;
            edges.push((from, to));
        }
    }

    for (from, to) in edges {
        if !graph.contains_edge(from, to) {
            graph.add_edge(from, to, ());
        }
    }

    tracing::debug!(
        library = %library,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built declaration graph"
    );

    Ok(DeclGraph { graph, index })
}

fn lookup(index: &HashMap<Name, NodeIndex>, target: &Name) -> Option<NodeIndex> {
    if let Some(&node) = index.get(target) {
        return Some(node);
    }
    let parent = target.member_parent()?;
    index.get(&parent).copied()
}

/// Parse an opaque declaration's references, keeping those into `library`
/// other than itself, in first-mention order without duplicates.
fn local_references(
    library: &LibraryName,
    owner: &Name,
    references: &[String],
) -> Result<Vec<Name>, SummaryError> {
    let mut out: Vec<Name> = Vec::new();
    for raw in references {
        let name = Name::parse(raw)?;
        if name.library() != library {
            tracing::trace!(decl = %owner, target = %name, "skipping cross-library reference");
            continue;
        }
        // Recursive types (through boxes or optionals) mention themselves.
        if &name == owner || out.contains(&name) {
            continue;
        }
        out.push(name);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeclKind;

    fn library() -> LibraryName {
        LibraryName::parse("example").unwrap()
    }

    fn int_const(name: &str, value: IrConstValue) -> IrDecl {
        IrDecl::constant(name, "int32", value)
    }

    #[test]
    fn test_nodes_keep_source_rank() {
        let decls = vec![
            int_const("example/A", IrConstValue::numeric("0")),
            int_const("example/B", IrConstValue::identifier("example/A")),
            IrDecl::opaque("example/S", DeclKind::Struct, ["example/B", "example/A"]),
        ];
        let graph = build(&library(), &decls).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.rank_of(&Name::parse("example/S").unwrap()), Some(2));
        assert_eq!(graph.dependencies(1), vec![0]);
        assert_eq!(graph.dependencies(2), vec![0, 1]);
        assert_eq!(graph.dependents(0), vec![1, 2]);
        assert_eq!(
            graph.node(1).and_then(|n| n.identifier.as_ref()).map(|n| n.to_string()),
            Some("example/A".to_string())
        );
    }

    #[test]
    fn test_unresolved_identifier() {
        let decls = vec![int_const("example/B", IrConstValue::identifier("example/MISSING"))];
        let err = build(&library(), &decls).unwrap_err();
        assert_eq!(
            err,
            SummaryError::UnresolvedIdentifierReference {
                decl: Name::parse("example/B").unwrap(),
                target: "example/MISSING".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_declaration() {
        let decls = vec![
            int_const("example/A", IrConstValue::numeric("0")),
            int_const("example/A", IrConstValue::numeric("1")),
        ];
        let err = build(&library(), &decls).unwrap_err();
        assert!(matches!(err, SummaryError::DuplicateDeclaration { .. }));
    }

    #[test]
    fn test_invalid_name() {
        let decls = vec![int_const("A", IrConstValue::numeric("0"))];
        let err = build(&library(), &decls).unwrap_err();
        assert!(matches!(err, SummaryError::InvalidName { .. }));
    }

    #[test]
    fn test_opaque_references_filtering() {
        let decls = vec![
            IrDecl::opaque("example/Color", DeclKind::Enum, Vec::<String>::new()),
            IrDecl::opaque(
                "example/Node",
                DeclKind::Struct,
                [
                    "example/Node",
                    "other.lib/Thing",
                    "example/Color",
                    "example/Color",
                ],
            ),
        ];
        let graph = build(&library(), &decls).unwrap();
        let node = graph.node(1).unwrap();
        assert_eq!(node.references, vec![Name::parse("example/Color").unwrap()]);
        assert_eq!(graph.dependencies(1), vec![0]);
    }

    #[test]
    fn test_member_reference_points_at_owner() {
        let decls = vec![
            IrDecl::opaque("example/Color", DeclKind::Enum, Vec::<String>::new()),
            IrDecl::constant("example/RED", "uint32", IrConstValue::identifier("example/Color.RED")),
        ];
        let graph = build(&library(), &decls).unwrap();
        assert_eq!(graph.dependencies(1), vec![0]);
    }
}
