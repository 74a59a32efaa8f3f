//! Positional parameter schemas for RPC commands.
//!
//! Every command record carries a metadata table describing its fields in
//! declaration order: the parameter name, its kind, whether it is
//! optional, its default (if any), and whether it collects a variadic
//! tail. The table is normally produced by `#[derive(CommandSchema)]`;
//! registration re-validates it so hand-written implementations are held
//! to the same structural rules.

use std::fmt;

use serde_json::Value;

use crate::error::{Error, ErrorKind};

/// The kind of value a positional parameter accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    Bool,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float,
    String,
    /// An array whose elements are all of the inner kind.
    Array(Box<ParamKind>),
    /// A mapping from string keys to values of the inner kind.
    Map(Box<ParamKind>),
    /// A nested record, validated structurally during assignment.
    Object,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::Bool => write!(f, "bool"),
            ParamKind::Int32 => write!(f, "int32"),
            ParamKind::Int64 => write!(f, "int64"),
            ParamKind::Uint32 => write!(f, "uint32"),
            ParamKind::Uint64 => write!(f, "uint64"),
            ParamKind::Float => write!(f, "float"),
            ParamKind::String => write!(f, "string"),
            ParamKind::Array(inner) => write!(f, "array of {inner}"),
            ParamKind::Map(inner) => write!(f, "map of string to {inner}"),
            ParamKind::Object => write!(f, "object"),
        }
    }
}

/// Metadata for one field of a command record, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// Parameter name, taken from the field identifier.
    pub name: &'static str,
    pub kind: ParamKind,
    pub optional: bool,
    /// Value assigned by the unmarshaller when the parameter is omitted.
    /// Only legal on optional fields.
    pub default: Option<Value>,
    /// Collects all remaining positional values. Only legal on the final
    /// field, with an array kind.
    pub variadic: bool,
}

/// A command record with a wire method name and a positional parameter
/// schema. Implemented via `#[derive(CommandSchema)]`.
pub trait CommandSchema {
    /// Method name on the wire, unique across a registry.
    const METHOD: &'static str;

    /// The parameter schema, one entry per field in declaration order.
    fn param_specs() -> Vec<ParamSpec>;
}

/// Validates the structural rules a parameter table must satisfy before
/// it can back a registered method.
pub fn validate_param_specs(method: &str, specs: &[ParamSpec]) -> Result<(), Error> {
    let mut seen_optional = false;
    let last = specs.len().saturating_sub(1);

    for (index, spec) in specs.iter().enumerate() {
        if spec.variadic {
            if index != last {
                return Err(Error::new(
                    ErrorKind::UnsupportedFieldType,
                    format!(
                        "variadic parameter {} of method {} is not the final parameter",
                        spec.name, method
                    ),
                ));
            }
            if spec.optional {
                return Err(Error::new(
                    ErrorKind::UnsupportedFieldType,
                    format!(
                        "variadic parameter {} of method {} cannot be optional",
                        spec.name, method
                    ),
                ));
            }
            if !matches!(spec.kind, ParamKind::Array(_)) {
                return Err(Error::new(
                    ErrorKind::UnsupportedFieldType,
                    format!(
                        "variadic parameter {} of method {} must have an array kind",
                        spec.name, method
                    ),
                ));
            }
        } else if spec.optional {
            seen_optional = true;
        } else if seen_optional {
            return Err(Error::new(
                ErrorKind::NonOptionalField,
                format!(
                    "required parameter {} of method {} follows an optional parameter",
                    spec.name, method
                ),
            ));
        }

        if let Some(default) = &spec.default {
            if !spec.optional {
                return Err(Error::new(
                    ErrorKind::NonOptionalDefault,
                    format!(
                        "required parameter {} of method {} carries a default",
                        spec.name, method
                    ),
                ));
            }
            if !default_matches_kind(default, &spec.kind) {
                return Err(Error::new(
                    ErrorKind::MismatchedDefault,
                    format!(
                        "default for parameter {} of method {} is not a {}",
                        spec.name, method, spec.kind
                    ),
                ));
            }
        }
    }
    Ok(())
}

/// Number of parameters that must always be supplied.
pub(crate) fn required_count(specs: &[ParamSpec]) -> usize {
    specs
        .iter()
        .filter(|spec| !spec.optional && !spec.variadic)
        .count()
}

fn default_matches_kind(value: &Value, kind: &ParamKind) -> bool {
    match kind {
        ParamKind::Bool => value.is_boolean(),
        ParamKind::Int32 => value
            .as_i64()
            .is_some_and(|n| i32::try_from(n).is_ok()),
        ParamKind::Int64 => value.as_i64().is_some(),
        ParamKind::Uint32 => value
            .as_u64()
            .is_some_and(|n| u32::try_from(n).is_ok()),
        ParamKind::Uint64 => value.as_u64().is_some(),
        ParamKind::Float => value.is_number(),
        ParamKind::String => value.is_string(),
        ParamKind::Array(inner) => value
            .as_array()
            .is_some_and(|items| items.iter().all(|item| default_matches_kind(item, inner))),
        ParamKind::Map(inner) => value
            .as_object()
            .is_some_and(|map| map.values().all(|item| default_matches_kind(item, inner))),
        ParamKind::Object => value.is_object(),
    }
}
