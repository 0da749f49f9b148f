// Composite kinds - declared field-name sets

use crate::data::Value;
use crate::error::{MalformedValueError, Result};

/// A named composite shape: the set of field names a composite of this kind
/// carries. Declaration order is kept for display; comparisons treat the
/// names as a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kind {
    name: String,
    field_names: Vec<String>,
}

impl Kind {
    /// Declare a kind. Fails on duplicate field names.
    pub fn new<S, I, F>(name: S, field_names: I) -> Result<Kind>
    where
        S: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        let mut checked: Vec<String> = Vec::new();
        for field_name in field_names {
            let field_name = field_name.into();
            if checked.contains(&field_name) {
                return Err(MalformedValueError::DuplicateField { name: field_name });
            }
            checked.push(field_name);
        }
        Ok(Kind {
            name: name.into(),
            field_names: checked,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// Validate that `value` is a composite carrying exactly the declared
    /// field set. Runs at construction boundaries so that comparison never
    /// has to fail.
    pub fn check(&self, value: &Value) -> Result<()> {
        let fields = value
            .as_composite()
            .ok_or_else(|| MalformedValueError::NotComposite {
                kind: self.name.clone(),
                actual: value.type_name().to_string(),
            })?;

        for declared in &self.field_names {
            if !fields.iter().any(|f| &f.name == declared) {
                return Err(MalformedValueError::MissingField {
                    kind: self.name.clone(),
                    name: declared.clone(),
                });
            }
        }
        for field in fields {
            if !self.field_names.contains(&field.name) {
                return Err(MalformedValueError::UndeclaredField {
                    kind: self.name.clone(),
                    name: field.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Build a composite of this kind from `(name, value)` pairs.
    pub fn instantiate<I, S>(&self, values: I) -> Result<Value>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        let value = Value::composite(values)?;
        self.check(&value)?;
        Ok(value)
    }
}

/// The field-name set of a composite, sorted. `None` for non-composites.
pub fn kind_of(value: &Value) -> Option<Vec<&str>> {
    value.as_composite().map(|fields| {
        let mut names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        names.sort_unstable();
        names
    })
}

/// Whether two values are composites declaring identical field-name sets.
pub fn same_kind(a: &Value, b: &Value) -> bool {
    match (kind_of(a), kind_of(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
