// Test utilities and generators for veq property-based testing

#![allow(dead_code)]

use proptest::prelude::*;
use veq_core::data::Value;

/// Generate field names
pub fn arb_field_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("id".to_string()),
        Just("name".to_string()),
        Just("value".to_string()),
        Just("brand".to_string()),
        Just("count".to_string()),
        "[a-z][a-z0-9_]*",
    ]
}

/// Build a composite through the validating constructor, keeping the first
/// occurrence of each generated name so construction always succeeds.
fn unique_composite(pairs: Vec<(String, Value)>) -> Value {
    let mut unique: Vec<(String, Value)> = Vec::new();
    for (name, value) in pairs {
        if !unique.iter().any(|(n, _)| n == &name) {
            unique.push((name, value));
        }
    }
    Value::composite(unique).unwrap()
}

/// Generate scalar Values
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Double),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

/// Generate a Value with limited recursion depth
pub fn arb_value_depth(depth: u32) -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(depth, 64, 6, move |inner| {
        prop_oneof![
            // Sequences
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
            // Composites with unique field names
            prop::collection::vec((arb_field_name(), inner), 0..5).prop_map(unique_composite),
        ]
    })
}

/// Generate a reasonable Value (depth 3)
pub fn arb_value() -> impl Strategy<Value = Value> {
    arb_value_depth(3)
}

/// Generate a composite with at least two uniquely named fields, so that
/// permutation is observable
pub fn arb_composite() -> impl Strategy<Value = Value> {
    prop::collection::vec((arb_field_name(), arb_value_depth(2)), 2..6).prop_map(|mut pairs| {
        if pairs.iter().skip(1).all(|(name, _)| name == &pairs[0].0) {
            pairs.push(("padding_field".to_string(), Value::Null));
        }
        unique_composite(pairs)
    })
}

/// Rebuild a value with every composite's field order reversed, recursively.
/// The result is a different construction path for the same logical value.
pub fn permute_fields(value: &Value) -> Value {
    match value {
        Value::Sequence(elements) => {
            Value::Sequence(elements.iter().map(permute_fields).collect())
        }
        Value::Composite(fields) => Value::composite(
            fields
                .iter()
                .rev()
                .map(|f| (f.name.clone(), permute_fields(&f.value))),
        )
        .unwrap(),
        scalar => scalar.clone(),
    }
}

/// Sort every composite's fields by name, recursively. Another construction
/// path for the same logical value.
pub fn sort_fields(value: &Value) -> Value {
    match value {
        Value::Sequence(elements) => Value::Sequence(elements.iter().map(sort_fields).collect()),
        Value::Composite(fields) => {
            let mut sorted: Vec<(String, Value)> = fields
                .iter()
                .map(|f| (f.name.clone(), sort_fields(&f.value)))
                .collect();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));
            Value::composite(sorted).unwrap()
        }
        scalar => scalar.clone(),
    }
}
