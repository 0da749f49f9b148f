// JSON interchange for value trees

use crate::data::Value;
use crate::error::{MalformedValueError, Result};

impl Value {
    /// Build a value tree from parsed JSON. Objects become composites,
    /// arrays become sequences, numbers become `Int` when they fit an `i64`
    /// exactly and `Double` otherwise.
    pub fn from_json(json: &serde_json::Value) -> Result<Value> {
        match json {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(d) = n.as_f64() {
                    Ok(Value::Double(d))
                } else {
                    Err(MalformedValueError::UnsupportedJson(format!(
                        "number out of range: {}",
                        n
                    )))
                }
            }
            serde_json::Value::String(s) => Ok(Value::String(s.clone())),
            serde_json::Value::Array(elements) => {
                let converted: Result<Vec<Value>> =
                    elements.iter().map(Value::from_json).collect();
                Ok(Value::Sequence(converted?))
            }
            serde_json::Value::Object(fields) => Value::composite(
                fields
                    .iter()
                    .map(|(name, value)| Ok((name.clone(), Value::from_json(value)?)))
                    .collect::<Result<Vec<(String, Value)>>>()?,
            ),
        }
    }

    /// Render back to JSON. Non-finite doubles have no JSON representation
    /// and map to null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Double(d) => serde_json::Number::from_f64(*d)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Sequence(elements) => {
                serde_json::Value::Array(elements.iter().map(Value::to_json).collect())
            }
            Value::Composite(fields) => serde_json::Value::Object(
                fields
                    .iter()
                    .map(|f| (f.name.clone(), f.value.to_json()))
                    .collect(),
            ),
        }
    }
}
