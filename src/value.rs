//! Constant value classification and canonicalization.
//!
//! Literal values keep their source spelling: `0xabcd` stays `0xabcd`.
//! Values defined in terms of another constant are re-rendered from the
//! resolved value instead, and integers among them always come out in
//! decimal, whatever radix the referenced literal used.

use std::collections::HashMap;

use crate::core::{Name, TypeKind};
use crate::errors::{SummaryError, UnsupportedReason};
use crate::ir::IrLiteral;

const INTEGER_TYPES: &[&str] = &[
    "int8", "int16", "int32", "int64", "uint8", "uint16", "uint32", "uint64",
];

const FLOAT_TYPES: &[&str] = &["float32", "float64"];

/// Classify a declared type into its value category.
pub fn classify(type_name: &str) -> Result<TypeKind, UnsupportedReason> {
    if type_name == "bool" {
        return Ok(TypeKind::Bool);
    }
    if type_name == "string" || is_bounded_string(type_name) {
        return Ok(TypeKind::String);
    }
    if INTEGER_TYPES.contains(&type_name) {
        return Ok(TypeKind::Integer);
    }
    if FLOAT_TYPES.contains(&type_name) {
        return Err(UnsupportedReason::Float);
    }
    Err(UnsupportedReason::Type(type_name.to_string()))
}

// `string:32`
fn is_bounded_string(type_name: &str) -> bool {
    match type_name.strip_prefix("string:") {
        Some(bound) => !bound.is_empty() && bound.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Parse an integer literal: optional `-`, then `0x`/`0X` hex, `0b`/`0B`
/// binary, or decimal digits.
///
/// `i128` covers both `uint64` and `int64`. Returns `None` for malformed
/// text or magnitudes past `i128`.
pub fn parse_integer_literal(text: &str) -> Option<i128> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (radix, digits) = if let Some(d) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, d)
    } else if let Some(d) = unsigned
        .strip_prefix("0b")
        .or_else(|| unsigned.strip_prefix("0B"))
    {
        (2, d)
    } else {
        (10, unsigned)
    };

    // from_str_radix tolerates a sign of its own; we only accept ours.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Where a constant's value comes from.
#[derive(Debug, Clone, Copy)]
pub enum ValueSource<'a> {
    Literal(&'a IrLiteral),
    Identifier(&'a Name),
}

/// A constant's value after canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalValue {
    pub kind: TypeKind,
    /// Text recorded in the summary.
    pub text: String,
    /// Numeric value, for integer constants.
    pub integer: Option<i128>,
}

/// Canonicalizes constants and remembers their values, so that constants
/// defined in terms of earlier ones can be resolved.
///
/// Constants must be fed in dependency order.
#[derive(Debug, Default)]
pub struct Canonicalizer {
    resolved: HashMap<Name, CanonicalValue>,
}

impl Canonicalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonicalize the constant `name` and record its value.
    pub fn canonicalize(
        &mut self,
        name: &Name,
        type_name: &str,
        source: ValueSource<'_>,
    ) -> Result<CanonicalValue, SummaryError> {
        let kind = classify(type_name).map_err(|reason| SummaryError::UnsupportedValueCategory {
            decl: name.clone(),
            reason,
        })?;

        let value = match source {
            ValueSource::Literal(literal) => canonicalize_literal(name, kind, literal)?,
            ValueSource::Identifier(target) => {
                let resolved =
                    self.resolved
                        .get(target)
                        .ok_or_else(|| SummaryError::NonConstantReference {
                            decl: name.clone(),
                            target: target.clone(),
                        })?;
                canonicalize_reference(name, kind, resolved)?
            }
        };

        tracing::trace!(decl = %name, value = %value.text, "canonicalized constant");
        self.resolved.insert(name.clone(), value.clone());
        Ok(value)
    }

    /// The recorded value of an already-canonicalized constant.
    pub fn resolved(&self, name: &Name) -> Option<&CanonicalValue> {
        self.resolved.get(name)
    }
}

fn canonicalize_literal(
    name: &Name,
    kind: TypeKind,
    literal: &IrLiteral,
) -> Result<CanonicalValue, SummaryError> {
    match (kind, literal) {
        (TypeKind::Bool, IrLiteral::Bool(b)) => Ok(CanonicalValue {
            kind,
            text: b.to_string(),
            integer: None,
        }),
        (TypeKind::String, IrLiteral::String(s)) => Ok(CanonicalValue {
            kind,
            text: s.clone(),
            integer: None,
        }),
        (TypeKind::Integer, IrLiteral::Numeric(text)) => {
            let integer =
                parse_integer_literal(text).ok_or_else(|| SummaryError::MalformedLiteral {
                    decl: name.clone(),
                    literal: text.clone(),
                })?;
            Ok(CanonicalValue {
                kind,
                text: text.clone(),
                integer: Some(integer),
            })
        }
        (kind, literal) => Err(SummaryError::ValueTypeMismatch {
            decl: name.clone(),
            expected: kind.to_string(),
            found: literal.category().to_string(),
        }),
    }
}

fn canonicalize_reference(
    name: &Name,
    kind: TypeKind,
    resolved: &CanonicalValue,
) -> Result<CanonicalValue, SummaryError> {
    if resolved.kind != kind {
        return Err(SummaryError::ValueTypeMismatch {
            decl: name.clone(),
            expected: kind.to_string(),
            found: resolved.kind.to_string(),
        });
    }

    let text = match (kind, resolved.integer) {
        (TypeKind::Integer, Some(integer)) => integer.to_string(),
        _ => resolved.text.clone(),
    };

    Ok(CanonicalValue {
        kind,
        text,
        integer: resolved.integer,
    })
}
