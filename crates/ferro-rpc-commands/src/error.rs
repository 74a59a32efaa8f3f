use std::fmt;

use thiserror::Error;

/// Classification of a registry or codec failure.
///
/// Every error surfaced by this crate carries exactly one of these kinds.
/// The `Display` names are stable; tests and log scrapers match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorKind {
    /// A method name was registered twice.
    DuplicateMethod = 0,
    /// Registration supplied zero or unknown usage-flag bits.
    InvalidUsageFlags,
    /// A positional value's type is incompatible with its target field.
    InvalidType,
    /// A command record embeds another record rather than declaring plain
    /// fields.
    EmbeddedType,
    /// A command record has a field that is not publicly visible.
    UnexportedField,
    /// A field's type is outside the supported parameter kinds.
    UnsupportedFieldType,
    /// A required field was declared after an optional field.
    NonOptionalField,
    /// A required field carries a default value.
    NonOptionalDefault,
    /// An optional field's default is not representable as the field's
    /// kind.
    MismatchedDefault,
    /// The method name (or command type) is not in the registry.
    UnregisteredMethod,
    /// The positional parameter count is outside the method's bounds.
    NumParams,
    /// A registered method has no description for help output.
    MissingDescription,
}

impl ErrorKind {
    /// Stable numeric code for the kind.
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Resolve a raw code back to its kind, if assigned.
    pub fn from_code(code: u16) -> Option<ErrorKind> {
        use ErrorKind::*;
        let kind = match code {
            0 => DuplicateMethod,
            1 => InvalidUsageFlags,
            2 => InvalidType,
            3 => EmbeddedType,
            4 => UnexportedField,
            5 => UnsupportedFieldType,
            6 => NonOptionalField,
            7 => NonOptionalDefault,
            8 => MismatchedDefault,
            9 => UnregisteredMethod,
            10 => NumParams,
            11 => MissingDescription,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::DuplicateMethod => "DuplicateMethod",
            ErrorKind::InvalidUsageFlags => "InvalidUsageFlags",
            ErrorKind::InvalidType => "InvalidType",
            ErrorKind::EmbeddedType => "EmbeddedType",
            ErrorKind::UnexportedField => "UnexportedField",
            ErrorKind::UnsupportedFieldType => "UnsupportedFieldType",
            ErrorKind::NonOptionalField => "NonOptionalField",
            ErrorKind::NonOptionalDefault => "NonOptionalDefault",
            ErrorKind::MismatchedDefault => "MismatchedDefault",
            ErrorKind::UnregisteredMethod => "UnregisteredMethod",
            ErrorKind::NumParams => "NumParams",
            ErrorKind::MissingDescription => "MissingDescription",
        };
        f.write_str(name)
    }
}

/// Stringify a raw kind code, tolerating codes this build does not know
/// about (from newer peers or persisted logs).
pub fn kind_name(code: u16) -> String {
    match ErrorKind::from_code(code) {
        Some(kind) => kind.to_string(),
        None => format!("Unknown ErrorKind ({code})"),
    }
}

/// A registry or codec failure: a kind plus a human-readable description
/// naming the offending method or field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description}")]
pub struct Error {
    kind: ErrorKind,
    description: String,
}

impl Error {
    pub fn new(kind: ErrorKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
