// Structural equality over value trees

use crate::data::{Field, Value};

/// Value-based equality, total over all pairs of well-formed values.
///
/// Scalars compare by variant and payload; sequences by length and pairwise
/// elements in order; composites by field-name set and recursive equality at
/// every name, regardless of declaration order. Any mismatch of shape or
/// type yields `false`, never an error.
pub fn structural_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Double(x), Value::Double(y)) => double_eq(*x, *y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Sequence(x), Value::Sequence(y)) => sequence_eq(x, y),
        (Value::Composite(x), Value::Composite(y)) => composite_eq(x, y),
        _ => false,
    }
}

/// Pairwise element equality, order-sensitive.
pub fn sequence_eq(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| structural_eq(x, y))
}

// Field names are unique within each side (enforced at construction), so
// equal lengths plus every left field matching by name implies identical
// field-name sets.
fn composite_eq(a: &[Field], b: &[Field]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().all(|fa| {
        b.iter()
            .find(|fb| fb.name == fa.name)
            .is_some_and(|fb| structural_eq(&fa.value, &fb.value))
    })
}

// IEEE `==` breaks reflexivity for NaN; group all NaNs into one class so the
// relation is a true equivalence. `0.0 == -0.0` stays true, and hashing
// canonicalizes both cases the same way.
fn double_eq(x: f64, y: f64) -> bool {
    x == y || (x.is_nan() && y.is_nan())
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        structural_eq(self, other)
    }
}

// Valid because NaNs are grouped: the relation is reflexive.
impl Eq for Value {}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && structural_eq(&self.value, &other.value)
    }
}

impl Eq for Field {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_cross_type_is_false() {
        assert!(!structural_eq(&Value::from("1"), &Value::Int(1)));
        assert!(!structural_eq(&Value::Int(1), &Value::Double(1.0)));
        assert!(!structural_eq(&Value::Null, &Value::Bool(false)));
    }

    #[test]
    fn test_nan_is_reflexive() {
        let nan = Value::Double(f64::NAN);
        assert!(structural_eq(&nan, &nan));
        assert!(structural_eq(&nan, &Value::Double(-f64::NAN)));
        assert!(!structural_eq(&nan, &Value::Double(1.0)));
    }

    #[test]
    fn test_field_order_ignored() {
        let a = Value::composite(vec![("x", Value::Int(1)), ("y", Value::Int(2))]).unwrap();
        let b = Value::composite(vec![("y", Value::Int(2)), ("x", Value::Int(1))]).unwrap();
        assert!(structural_eq(&a, &b));
    }

    #[test]
    fn test_field_name_set_mismatch_is_false() {
        let a = Value::composite(vec![("x", Value::Int(1))]).unwrap();
        let b = Value::composite(vec![("y", Value::Int(1))]).unwrap();
        assert!(!structural_eq(&a, &b));
    }

    #[test]
    fn test_composite_vs_scalar_is_false() {
        let composite = Value::composite(vec![("x", Value::Int(1))]).unwrap();
        assert!(!structural_eq(&composite, &Value::Int(1)));
        assert!(!structural_eq(&composite, &Value::Sequence(vec![Value::Int(1)])));
    }

    #[test]
    fn test_sequence_order_matters() {
        let a = Value::sequence(vec![Value::Int(1), Value::Int(2)]);
        let b = Value::sequence(vec![Value::Int(2), Value::Int(1)]);
        assert!(!structural_eq(&a, &b));
        assert!(structural_eq(&a, &a.clone()));
    }

    #[test]
    fn test_null_fields() {
        let present = Value::composite(vec![("x", Value::Int(1))]).unwrap();
        let absent = Value::composite(vec![("x", Value::Null)]).unwrap();
        let absent_too = Value::composite(vec![("x", Value::Null)]).unwrap();
        assert!(!structural_eq(&present, &absent));
        assert!(structural_eq(&absent, &absent_too));
    }
}
