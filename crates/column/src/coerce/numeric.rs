//! Int64, Float64 and Boolean targets.

use super::{Outcome, Rejection};
use crate::value::Value;

/// `2^63` as f64; the first value past the top of the i64 range
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Truncate toward zero, `None` for NaN, infinities and anything outside i64
pub(crate) fn trunc_to_i64(v: f64) -> Option<i64> {
    if !v.is_finite() {
        return None;
    }
    let t = v.trunc();
    (t >= -I64_UPPER_BOUND && t < I64_UPPER_BOUND).then(|| t as i64)
}

/// Coerce into an `Int64` payload
pub fn to_int64(value: &Value) -> Outcome<i64> {
    match value {
        Value::Null => Outcome::Null,
        Value::Integer(i) => Outcome::Exact(*i),
        Value::Boolean(b) => Outcome::Lossy(i64::from(*b)),
        Value::Float(f) => Outcome::lossy_or(trunc_to_i64(*f), Rejection::TypeMismatch),
        Value::Date(days) => Outcome::Lossy(i64::from(*days)),
        Value::Text(t) => Outcome::lossy_or(t.parse::<i64>().ok(), Rejection::ParseFailure),
        Value::Bytes(_)
        | Value::Time(_)
        | Value::Duration(..)
        | Value::Datetime(..) => Outcome::mismatch(),
    }
}

/// Coerce into a `Float64` payload
pub fn to_float64(value: &Value) -> Outcome<f64> {
    match value {
        Value::Null => Outcome::Null,
        Value::Float(f) => Outcome::Exact(*f),
        Value::Boolean(b) => Outcome::Lossy(if *b { 1.0 } else { 0.0 }),
        Value::Integer(i) => Outcome::Lossy(*i as f64),
        Value::Date(days) => Outcome::Lossy(f64::from(*days)),
        Value::Text(t) => Outcome::lossy_or(t.parse::<f64>().ok(), Rejection::ParseFailure),
        Value::Bytes(_)
        | Value::Time(_)
        | Value::Duration(..)
        | Value::Datetime(..) => Outcome::mismatch(),
    }
}

/// Coerce into a `Boolean` payload.
///
/// Text never converts, not even the literals `"true"` and `"false"`.
pub fn to_boolean(value: &Value) -> Outcome<bool> {
    match value {
        Value::Null => Outcome::Null,
        Value::Boolean(b) => Outcome::Exact(*b),
        Value::Integer(i) => Outcome::Lossy(*i != 0),
        Value::Float(f) => Outcome::Lossy(*f != 0.0),
        Value::Text(_)
        | Value::Bytes(_)
        | Value::Date(_)
        | Value::Time(_)
        | Value::Duration(..)
        | Value::Datetime(..) => Outcome::mismatch(),
    }
}
