//! Canonical total ordering over values.
//!
//! Used to canonicalize collections before an order-insensitive comparison.
//! Values of different kinds order by kind: null, booleans, numbers,
//! strings, keyed collections, objects. Integers, floats and numeric strings
//! share the number rank and compare by exact numeric value; equal numbers
//! then order integer, float, string.

use std::cmp::Ordering;

use crate::array::KeyedArray;
use crate::value::Value;

/// 2^63, the first float above every `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

#[derive(Clone, Copy, Debug)]
enum Number {
    Int(i64),
    Float(f64),
}

fn number(value: &Value) -> Option<Number> {
    match value {
        Value::Int(n) => Some(Number::Int(*n)),
        Value::Float(f) => Some(Number::Float(*f)),
        Value::Str(_) => {
            let text = value.as_str()?.trim();
            match text.parse::<i64>() {
                Ok(n) => Some(Number::Int(n)),
                Err(_) => value.as_number().map(Number::Float),
            }
        }
        _ => None,
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::Str(_) if number(value).is_some() => 2,
        Value::Str(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn variant(value: &Value) -> u8 {
    match value {
        Value::Int(_) => 0,
        Value::Float(_) => 1,
        _ => 2,
    }
}

fn cmp_numbers(a: Number, b: Number) -> Ordering {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x.cmp(&y),
        (Number::Int(x), Number::Float(y)) => cmp_int_float(x, y),
        (Number::Float(x), Number::Int(y)) => cmp_int_float(y, x).reverse(),
        (Number::Float(x), Number::Float(y)) => cmp_floats(x, y),
    }
}

// Zeros of either sign are equal; NaNs sit at the ends by sign.
fn cmp_floats(x: f64, y: f64) -> Ordering {
    x.partial_cmp(&y).unwrap_or_else(|| x.total_cmp(&y))
}

// Exact: the integer is never rounded through f64.
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() {
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= I64_BOUND {
        return Ordering::Less;
    }
    if f < -I64_BOUND {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    i.cmp(&(whole as i64))
        .then_with(|| whole.partial_cmp(&f).unwrap_or(Ordering::Equal))
}

/// Compare two values under the canonical ordering.
pub fn canonical_cmp(a: &Value, b: &Value) -> Ordering {
    if let (Some(x), Some(y)) = (number(a), number(b)) {
        return cmp_numbers(x, y)
            .then_with(|| variant(a).cmp(&variant(b)))
            .then_with(|| match (a, b) {
                (Value::Float(x), Value::Float(y)) => x.total_cmp(y),
                (Value::Str(x), Value::Str(y)) => x.cmp(y),
                _ => Ordering::Equal,
            });
    }
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Str(x), Value::Str(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => cmp_arrays(x, y),
        (Value::Object(x), Value::Object(y)) => x
            .class
            .cmp(&y.class)
            .then_with(|| cmp_arrays(&x.properties, &y.properties)),
        _ => rank(a).cmp(&rank(b)),
    }
}

// Shorter collections first, then entry by entry (key, then value).
fn cmp_arrays(a: &KeyedArray, b: &KeyedArray) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        a.iter()
            .zip(b.iter())
            .map(|((ka, va), (kb, vb))| ka.cmp(kb).then_with(|| canonical_cmp(va, vb)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}
