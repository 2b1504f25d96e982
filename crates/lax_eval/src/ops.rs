//! Binary operator implementations.
//!
//! Direct enum-based dispatch over `(Value, Value)` pairs. The type set is
//! fixed, so exhaustive pattern matching is preferred over trait objects;
//! unsupported pairs fall through to a typed error.

#![expect(
    clippy::cast_precision_loss,
    reason = "integer operands widen to f64 in mixed arithmetic"
)]

use crate::errors::{
    division_by_zero, integer_overflow, invalid_concat, invalid_contains, invalid_mul_div,
    length_mismatch, unhashable, EvalResult,
};
use lax_ir::{SetElem, Value};

/// `+` — concatenation, merge, union, or numeric sum.
///
/// Mapping merge is right-biased: keys from `right` override `left`.
pub(crate) fn concat(left: Value, right: Value) -> EvalResult {
    match (left, right) {
        (Value::Str(mut a), Value::Str(b)) => {
            a.push_str(&b);
            Ok(Value::Str(a))
        }
        (Value::List(mut a), Value::List(b)) => {
            a.extend(b);
            Ok(Value::List(a))
        }
        (Value::Tuple(mut a), Value::Tuple(b)) => {
            a.extend(b);
            Ok(Value::Tuple(a))
        }
        (Value::Bytes(mut a), Value::Bytes(b)) => {
            a.extend(b);
            Ok(Value::Bytes(a))
        }
        (Value::Map(mut a), Value::Map(b)) => {
            a.extend(b);
            Ok(Value::Map(a))
        }
        (Value::Set(a), Value::Set(b)) => Ok(Value::Set(a.union(b))),
        (Value::Int(a), Value::Int(b)) => a
            .checked_add(b)
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("addition")),
        (Value::Int(a), Value::Float(b)) => Ok(Value::Float(a as f64 + b)),
        (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a + b as f64)),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
        (left, right) => Err(invalid_concat(&left, &right)),
    }
}

/// `*` — numeric product, replication, element-wise product, or set
/// Cartesian product.
pub(crate) fn multiply(left: Value, right: Value) -> EvalResult {
    match (left, right) {
        (Value::List(a), Value::List(b)) => elementwise(a, b, "*", multiply),
        (Value::Int(a), Value::Int(b)) => a
            .checked_mul(b)
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("multiplication")),
        (Value::Int(a), Value::Float(b)) => Ok(Value::Float(a as f64 * b)),
        (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a * b as f64)),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a * b)),
        (Value::Str(s), Value::Int(n)) | (Value::Int(n), Value::Str(s)) => {
            Ok(Value::Str(s.repeat(replication_count(n))))
        }
        (Value::List(items), Value::Int(n)) | (Value::Int(n), Value::List(items)) => {
            Ok(Value::List(replicate(&items, n)))
        }
        (Value::Bytes(bytes), Value::Int(n)) | (Value::Int(n), Value::Bytes(bytes)) => {
            Ok(Value::Bytes(replicate(&bytes, n)))
        }
        (Value::Set(a), Value::Set(b)) => Ok(Value::Set(a.product(&b))),
        (left, right) => Err(invalid_mul_div("*", &left, &right)),
    }
}

/// `/` — true division; any numeric division yields a float. Defined only
/// for numeric pairs and element-wise over equal-length lists.
pub(crate) fn divide(left: Value, right: Value) -> EvalResult {
    match (left, right) {
        (Value::List(a), Value::List(b)) => elementwise(a, b, "/", divide),
        (Value::Int(a), Value::Int(b)) => float_div(a as f64, b as f64),
        (Value::Int(a), Value::Float(b)) => float_div(a as f64, b),
        (Value::Float(a), Value::Int(b)) => float_div(a, b as f64),
        (Value::Float(a), Value::Float(b)) => float_div(a, b),
        (left, right) => Err(invalid_mul_div("/", &left, &right)),
    }
}

/// `:>` — membership. Lists and tuples compare elements, sets and
/// mappings hash the probe (mapping keys only match string-like probes),
/// strings and bytes test containment of a sub-sequence.
pub(crate) fn contains(left: Value, right: Value) -> EvalResult {
    let found = match (&left, &right) {
        (_, Value::List(items)) | (_, Value::Tuple(items)) => items.contains(&left),
        (_, Value::Set(set)) => {
            let Some(elem) = SetElem::try_from_value(&left) else {
                return Err(unhashable(&left));
            };
            set.contains(&elem)
        }
        (_, Value::Map(map)) => {
            if SetElem::try_from_value(&left).is_none() {
                return Err(unhashable(&left));
            }
            match &left {
                Value::Str(text) | Value::Ident(text) => map.contains_key(text),
                _ => false,
            }
        }
        (Value::Str(needle), Value::Str(haystack)) => haystack.contains(needle.as_str()),
        (Value::Bytes(needle), Value::Bytes(haystack)) => contains_subslice(haystack, needle),
        _ => return Err(invalid_contains(&left, &right)),
    };
    Ok(Value::Bool(found))
}

/// Element-wise combination of two equal-length lists.
fn elementwise(
    left: Vec<Value>,
    right: Vec<Value>,
    op: &str,
    apply: fn(Value, Value) -> EvalResult,
) -> EvalResult {
    if left.len() != right.len() {
        return Err(length_mismatch(op, left.len(), right.len()));
    }
    left.into_iter()
        .zip(right)
        .map(|(a, b)| apply(a, b))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::List)
}

fn float_div(a: f64, b: f64) -> EvalResult {
    if b == 0.0 {
        return Err(division_by_zero());
    }
    Ok(Value::Float(a / b))
}

/// Replication counts clamp at zero, so negative factors yield empties.
fn replication_count(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

fn replicate<T: Clone>(items: &[T], n: i64) -> Vec<T> {
    let count = replication_count(n);
    let mut out = Vec::with_capacity(items.len() * count);
    for _ in 0..count {
        out.extend(items.iter().cloned());
    }
    out
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}
