// Error types for veq

use std::error::Error;
use std::fmt;

/// Construction-time validation errors.
///
/// Malformed values are rejected when they are built; `structural_eq` and
/// `stable_hash` have no error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedValueError {
    /// A field name repeats within one composite.
    DuplicateField { name: String },
    /// A kind declares a field the value does not carry.
    MissingField { kind: String, name: String },
    /// A value carries a field its kind does not declare.
    UndeclaredField { kind: String, name: String },
    /// A kind was checked against a non-composite value.
    NotComposite { kind: String, actual: String },
    /// JSON input with no value-tree representation.
    UnsupportedJson(String),
}

impl Error for MalformedValueError {}

impl fmt::Display for MalformedValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedValueError::DuplicateField { name } => {
                write!(f, "Duplicate field name: {}", name)
            }
            MalformedValueError::MissingField { kind, name } => {
                write!(f, "Kind {} declares field {} but the value lacks it", kind, name)
            }
            MalformedValueError::UndeclaredField { kind, name } => {
                write!(f, "Field {} is not declared by kind {}", name, kind)
            }
            MalformedValueError::NotComposite { kind, actual } => {
                write!(f, "Kind {} expects a composite, got {}", kind, actual)
            }
            MalformedValueError::UnsupportedJson(msg) => {
                write!(f, "Unsupported JSON input: {}", msg)
            }
        }
    }
}

/// Convenience alias for construction results.
pub type Result<T> = std::result::Result<T, MalformedValueError>;
