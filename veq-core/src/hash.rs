// Stable hashing consistent with structural equality
//
// The hash is part of the public contract: equal values hash identically
// across construction paths, runs, and platforms. Std's default hasher
// guarantees none of that, so the primitives are written out here:
// FNV-1a for byte strings and a splitmix64 finalizer for mixing.

use crate::data::Value;
use std::hash::{Hash, Hasher};

// Per-variant tags keep e.g. String("1") and Int(1) apart where avoidable.
const TAG_NULL: u64 = 0x56455100_00000001;
const TAG_BOOL: u64 = 0x56455100_00000002;
const TAG_INT: u64 = 0x56455100_00000003;
const TAG_DOUBLE: u64 = 0x56455100_00000004;
const TAG_STRING: u64 = 0x56455100_00000005;
const TAG_SEQUENCE: u64 = 0x56455100_00000006;
const TAG_COMPOSITE: u64 = 0x56455100_00000007;

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x00000100000001b3;

/// Hash a value such that `structural_eq(a, b)` implies
/// `stable_hash(a) == stable_hash(b)`.
///
/// Composite fields combine through a wrapping sum of per-field digests, so
/// declaration order never shows in the result; sequences fold their
/// elements in order.
pub fn stable_hash(value: &Value) -> u64 {
    match value {
        Value::Null => TAG_NULL,
        Value::Bool(b) => mix(TAG_BOOL, *b as u64),
        Value::Int(n) => mix(TAG_INT, *n as u64),
        Value::Double(d) => mix(TAG_DOUBLE, canonical_bits(*d)),
        Value::String(s) => mix(TAG_STRING, fnv1a(s.as_bytes())),
        Value::Sequence(elements) => elements
            .iter()
            .fold(TAG_SEQUENCE, |acc, e| mix(acc, stable_hash(e))),
        Value::Composite(fields) => {
            let sum = fields.iter().fold(0u64, |acc, f| {
                acc.wrapping_add(mix(fnv1a(f.name.as_bytes()), stable_hash(&f.value)))
            });
            mix(TAG_COMPOSITE, sum)
        }
    }
}

// All NaNs collapse to the quiet-NaN pattern and -0.0 to +0.0, matching the
// equivalence classes of `structural_eq`.
fn canonical_bits(d: f64) -> u64 {
    if d.is_nan() {
        0x7ff8000000000000
    } else if d == 0.0 {
        0
    } else {
        d.to_bits()
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in bytes {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

// splitmix64 finalizer
fn mix(a: u64, b: u64) -> u64 {
    let mut x = a ^ b.wrapping_mul(0x9e3779b97f4a7c15);
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(stable_hash(self));
    }
}
