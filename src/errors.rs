//! Summarization error types and diagnostics.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::Name;
use crate::util::diagnostic::Diagnostic;

/// Why a constant's value category was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// `float32` and `float64` constants.
    Float,
    /// Any other type that is not bool, integer or string.
    Type(String),
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedReason::Float => write!(f, "floats are unsupported"),
            UnsupportedReason::Type(ty) => write!(f, "unsupported constant type `{}`", ty),
        }
    }
}

/// Error produced while summarizing a library.
///
/// Every variant is fatal: summarization stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum SummaryError {
    #[error("{reason}")]
    #[diagnostic(
        code(declsum::unsupported_value_category),
        help("Only bool, integer and string constants can be summarized")
    )]
    UnsupportedValueCategory { decl: Name, reason: UnsupportedReason },

    #[error("unresolved reference to `{target}` from `{decl}`")]
    #[diagnostic(code(declsum::unresolved_reference))]
    UnresolvedIdentifierReference { decl: Name, target: String },

    #[error("cyclic dependency among declarations: {}", join_names(.decls))]
    #[diagnostic(
        code(declsum::cyclic_dependency),
        help("Break the cycle by defining one of the declarations in terms of a literal")
    )]
    CyclicDependency { decls: Vec<Name> },

    #[error("duplicate declaration `{name}`")]
    #[diagnostic(code(declsum::duplicate_declaration))]
    DuplicateDeclaration { name: Name },

    #[error("invalid name `{name}`: {reason}")]
    #[diagnostic(code(declsum::invalid_name))]
    InvalidName { name: String, reason: String },

    #[error("malformed integer literal `{literal}` for `{decl}`")]
    #[diagnostic(code(declsum::malformed_literal))]
    MalformedLiteral { decl: Name, literal: String },

    #[error("value of `{decl}` is {found} where {expected} was expected")]
    #[diagnostic(code(declsum::type_mismatch))]
    ValueTypeMismatch {
        decl: Name,
        expected: String,
        found: String,
    },

    #[error("`{decl}` references `{target}`, which is not a constant")]
    #[diagnostic(code(declsum::non_constant_reference))]
    NonConstantReference { decl: Name, target: Name },
}

fn join_names(names: &[Name]) -> String {
    names
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl SummaryError {
    pub(crate) fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SummaryError::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// The declaration the error is about, when there is one.
    pub fn decl(&self) -> Option<&Name> {
        match self {
            SummaryError::UnsupportedValueCategory { decl, .. }
            | SummaryError::UnresolvedIdentifierReference { decl, .. }
            | SummaryError::MalformedLiteral { decl, .. }
            | SummaryError::ValueTypeMismatch { decl, .. }
            | SummaryError::NonConstantReference { decl, .. } => Some(decl),
            SummaryError::DuplicateDeclaration { name } => Some(name),
            SummaryError::CyclicDependency { decls } => decls.first(),
            SummaryError::InvalidName { .. } => None,
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            SummaryError::UnsupportedValueCategory { decl, reason } => {
                let diag = Diagnostic::error(format!("cannot summarize `{}`: {}", decl, reason));
                match reason {
                    UnsupportedReason::Float => diag.with_suggestion(
                        "Express the value as an integer (e.g. fixed point) or a string",
                    ),
                    UnsupportedReason::Type(_) => diag
                        .with_context("constants must be bool, integer or string typed"),
                }
            }

            SummaryError::UnresolvedIdentifierReference { decl, target } => {
                Diagnostic::error(format!("`{}` refers to unknown declaration `{}`", decl, target))
                    .with_context("identifier values must name a declaration in the same library")
                    .with_suggestion("Regenerate the IR; the front end should have rejected this")
            }

            SummaryError::CyclicDependency { decls } => {
                let names: Vec<String> = decls.iter().map(|n| n.to_string()).collect();
                Diagnostic::error("cyclic dependency between declarations")
                    .with_context(format!("cycle: {}", names.join(" <-> ")))
                    .with_suggestion(
                        "Break the cycle by removing or restructuring the references",
                    )
            }

            SummaryError::DuplicateDeclaration { name } => {
                Diagnostic::error(format!("`{}` is declared more than once", name))
            }

            SummaryError::InvalidName { name, reason } => {
                Diagnostic::error(format!("invalid name `{}`", name)).with_context(reason.clone())
            }

            SummaryError::MalformedLiteral { decl, literal } => {
                Diagnostic::error(format!("cannot parse the value of `{}`", decl))
                    .with_context(format!("`{}` is not a binary, hex or decimal integer", literal))
            }

            SummaryError::ValueTypeMismatch {
                decl,
                expected,
                found,
            } => Diagnostic::error(format!("type mismatch in `{}`", decl))
                .with_context(format!("expected a {} value, found a {} value", expected, found)),

            SummaryError::NonConstantReference { decl, target } => {
                Diagnostic::error(format!("`{}` is defined in terms of `{}`", decl, target))
                    .with_context(format!("`{}` is not a constant", target))
            }
        }
    }
}
