// veq - structural equality and stable hashing for immutable value trees
//
// A `Value` is a scalar, an ordered sequence, or a composite of named
// fields, built once and never mutated. `compare::structural_eq` defines
// value-based equality over those trees (order-independent for composite
// fields, order-sensitive for sequences) and `hash::stable_hash` produces a
// hash consistent with it across construction paths and runs.

pub mod compare;
pub mod data;
pub mod error;
pub mod hash;
pub mod json;
pub mod kind;
