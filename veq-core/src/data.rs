// Core type definitions for veq

use crate::error::MalformedValueError;
use serde::{Deserialize, Serialize};

/// An immutable node in a value tree.
///
/// A `Value` is a scalar (`Null`, `Bool`, `Int`, `Double`, `String`), an
/// ordered `Sequence`, or a `Composite` of named fields. Composites must be
/// built through [`Value::composite`] or [`CompositeBuilder`], which reject
/// duplicate field names; equality and hashing assume that invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawValue")]
pub enum Value {
    /// Absent marker. Equal to itself, unequal to any present value.
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    /// Ordered elements; order matters for equality.
    Sequence(Vec<Value>),
    /// Named fields; declaration order does not affect equality.
    Composite(Vec<Field>),
}

/// Named field in a composite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

// Deserialization proxy. Mirrors the serialized variant names; composites
// route through `Value::composite` so deserialized input cannot carry
// duplicate field names. Children arrive already validated via `Value`'s
// own `Deserialize`.
#[derive(Deserialize)]
enum RawValue {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Sequence(Vec<Value>),
    Composite(Vec<Field>),
}

impl TryFrom<RawValue> for Value {
    type Error = MalformedValueError;

    fn try_from(raw: RawValue) -> Result<Value, MalformedValueError> {
        match raw {
            RawValue::Null => Ok(Value::Null),
            RawValue::Bool(b) => Ok(Value::Bool(b)),
            RawValue::Int(n) => Ok(Value::Int(n)),
            RawValue::Double(d) => Ok(Value::Double(d)),
            RawValue::String(s) => Ok(Value::String(s)),
            RawValue::Sequence(elements) => Ok(Value::Sequence(elements)),
            RawValue::Composite(fields) => {
                Value::composite(fields.into_iter().map(|f| (f.name, f.value)))
            }
        }
    }
}

impl Value {
    /// Build a composite from `(name, value)` pairs, preserving the given
    /// field order. Fails with [`MalformedValueError::DuplicateField`] if a
    /// name repeats.
    pub fn composite<I, S>(fields: I) -> Result<Value, MalformedValueError>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        let mut checked: Vec<Field> = Vec::new();
        for (name, value) in fields {
            let name = name.into();
            if checked.iter().any(|f| f.name == name) {
                return Err(MalformedValueError::DuplicateField { name });
            }
            checked.push(Field { name, value });
        }
        Ok(Value::Composite(checked))
    }

    /// Build a sequence from elements.
    pub fn sequence<I>(elements: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Sequence(elements.into_iter().collect())
    }

    /// Variant name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Composite(_) => "composite",
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Value::Composite(_))
    }

    pub fn as_composite(&self) -> Option<&[Field]> {
        match self {
            Value::Composite(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(elements) => Some(elements),
            _ => None,
        }
    }

    /// Look up a field by name in a composite. `None` for other variants or
    /// unknown names.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Composite(fields) => {
                fields.iter().find(|f| f.name == name).map(|f| &f.value)
            }
            _ => None,
        }
    }
}

/// Fluent construction for composites; validation happens in [`build`].
///
/// [`build`]: CompositeBuilder::build
#[derive(Debug, Default)]
pub struct CompositeBuilder {
    fields: Vec<Field>,
}

impl CompositeBuilder {
    pub fn new() -> Self {
        CompositeBuilder { fields: Vec::new() }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Finish construction, rejecting duplicate field names.
    pub fn build(self) -> Result<Value, MalformedValueError> {
        Value::composite(self.fields.into_iter().map(|f| (f.name, f.value)))
    }
}

// Scalar conversions so call sites stay terse

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Sequence(elements)
    }
}
