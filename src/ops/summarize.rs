//! Summary assembly.
//!
//! Builds the dependency graph, canonicalizes every declaration, and emits
//! them in the requested order. Stops at the first error; there is no
//! partial summary.

use crate::comment;
use crate::core::{Const, Decl, DeclOrder, LibraryName, Opaque, Summary};
use crate::errors::SummaryError;
use crate::graph::{self, DeclGraph, DeclNode};
use crate::ir::{IrConst, IrConstValue, IrDecl, IrDeclKind, IrLibrary};
use crate::util::Config;
use crate::value::{self, Canonicalizer, ValueSource};

/// Summarize `ir` with its declarations in `order`.
pub fn new_summary(ir: &IrLibrary, order: DeclOrder) -> Result<Summary, SummaryError> {
    let name = LibraryName::parse(&ir.name)?;
    tracing::debug!(library = %name, decls = ir.declarations.len(), %order, "summarizing library");

    let graph = graph::build(&name, &ir.declarations)?;
    debug_assert_eq!(graph.len(), ir.declarations.len());

    check_value_categories(&graph, &ir.declarations)?;

    // Always computed: it detects cycles, and canonicalizing in this order
    // resolves referenced constants before the constants that use them.
    let dependency_order = graph.dependency_order()?;

    let mut canonicalizer = Canonicalizer::new();
    let mut slots: Vec<Option<Decl>> = vec![None; ir.declarations.len()];
    for &rank in &dependency_order {
        let decl = summarize_decl(&mut canonicalizer, &graph[rank], &ir.declarations[rank])?;
        slots[rank] = Some(decl);
    }

    let emit = match order {
        DeclOrder::Source => graph.source_order(),
        DeclOrder::Dependency => dependency_order,
    };
    let decls: Vec<Decl> = emit
        .into_iter()
        .filter_map(|rank| slots[rank].take())
        .collect();

    tracing::debug!(library = %name, decls = decls.len(), "summary assembled");
    Ok(Summary::new(name, order, decls))
}

/// Summarize `ir` using the order selected in `config`.
pub fn summarize_with_config(ir: &IrLibrary, config: &Config) -> Result<Summary, SummaryError> {
    new_summary(ir, config.summary.decl_order)
}

/// Reject constants of unsupported types, first in source order.
fn check_value_categories(graph: &DeclGraph, decls: &[IrDecl]) -> Result<(), SummaryError> {
    for (rank, decl) in decls.iter().enumerate() {
        if let IrDeclKind::Const(c) = &decl.kind {
            value::classify(&c.type_name).map_err(|reason| {
                SummaryError::UnsupportedValueCategory {
                    decl: graph[rank].name.clone(),
                    reason,
                }
            })?;
        }
    }
    Ok(())
}

fn summarize_decl(
    canonicalizer: &mut Canonicalizer,
    node: &DeclNode,
    decl: &IrDecl,
) -> Result<Decl, SummaryError> {
    let comments = comment::extract_lines(decl.doc_comments());

    Ok(match &decl.kind {
        IrDeclKind::Const(c) => Decl::Const(summarize_const(canonicalizer, node, c, comments)?),
        IrDeclKind::Struct(_) => Decl::Struct(opaque(node, comments)),
        IrDeclKind::Enum(_) => Decl::Enum(opaque(node, comments)),
        IrDeclKind::Bits(_) => Decl::Bits(opaque(node, comments)),
        IrDeclKind::Protocol(_) => Decl::Protocol(opaque(node, comments)),
        IrDeclKind::Alias(_) => Decl::Alias(opaque(node, comments)),
    })
}

fn summarize_const(
    canonicalizer: &mut Canonicalizer,
    node: &DeclNode,
    ir: &IrConst,
    comments: Vec<String>,
) -> Result<Const, SummaryError> {
    let source = match (&ir.value, node.identifier.as_ref()) {
        (IrConstValue::Literal { literal }, _) => ValueSource::Literal(literal),
        (IrConstValue::Identifier { .. }, Some(target)) => ValueSource::Identifier(target),
        (IrConstValue::Identifier { identifier }, None) => {
            return Err(SummaryError::UnresolvedIdentifierReference {
                decl: node.name.clone(),
                target: identifier.clone(),
            })
        }
    };

    let value = canonicalizer.canonicalize(&node.name, &ir.type_name, source)?;
    Ok(Const {
        name: node.name.clone(),
        kind: value.kind,
        type_name: ir.type_name.clone(),
        value: value.text,
        identifier: node.identifier.clone(),
        comments,
    })
}

fn opaque(node: &DeclNode, comments: Vec<String>) -> Opaque {
    Opaque {
        name: node.name.clone(),
        comments,
        references: node.references.clone(),
    }
}
