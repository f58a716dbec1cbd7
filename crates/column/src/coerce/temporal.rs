//! Date, Time, Duration and Datetime targets.
//!
//! Numeric sources are interpreted in the target's physical representation
//! (days, nanoseconds, or the target unit), with floats truncated toward zero.
//! Duration and datetime values only pass through unchanged when their unit
//! matches the target's; a different unit is a [`Rejection::UnitMismatch`].

use super::numeric::trunc_to_i64;
use super::{Outcome, Rejection};
use crate::epoch;
use crate::types::TimeUnit;
use crate::value::Value;

/// Coerce into a `Date` payload (days since the epoch)
pub fn to_date(value: &Value) -> Outcome<i32> {
    match value {
        Value::Null => Outcome::Null,
        Value::Date(days) => Outcome::Exact(*days),
        Value::Datetime(v, unit) => {
            Outcome::lossy_or(epoch::datetime_to_days(*v, *unit), Rejection::TypeMismatch)
        }
        Value::Integer(i) => Outcome::lossy_or(epoch::days_from_i64(*i), Rejection::TypeMismatch),
        Value::Float(f) => Outcome::lossy_or(
            trunc_to_i64(*f).and_then(epoch::days_from_i64),
            Rejection::TypeMismatch,
        ),
        Value::Text(t) => Outcome::lossy_or(epoch::parse_date(t), Rejection::ParseFailure),
        Value::Boolean(_) | Value::Bytes(_) | Value::Time(_) | Value::Duration(..) => {
            Outcome::mismatch()
        }
    }
}

/// Coerce into a `Time` payload (nanoseconds since midnight)
pub fn to_time(value: &Value) -> Outcome<i64> {
    match value {
        Value::Null => Outcome::Null,
        Value::Time(nanos) => Outcome::Exact(*nanos),
        Value::Integer(i) => {
            Outcome::lossy_or(epoch::checked_time_of_day(*i), Rejection::TypeMismatch)
        }
        Value::Float(f) => Outcome::lossy_or(
            trunc_to_i64(*f).and_then(epoch::checked_time_of_day),
            Rejection::TypeMismatch,
        ),
        Value::Datetime(v, unit) => Outcome::Lossy(epoch::datetime_to_time_of_day(*v, *unit)),
        Value::Text(t) => Outcome::lossy_or(epoch::parse_time(t), Rejection::ParseFailure),
        Value::Boolean(_) | Value::Bytes(_) | Value::Date(_) | Value::Duration(..) => {
            Outcome::mismatch()
        }
    }
}

/// Coerce into a `Duration` payload counted in `unit`
pub fn to_duration(value: &Value, unit: TimeUnit) -> Outcome<i64> {
    match value {
        Value::Null => Outcome::Null,
        Value::Duration(v, actual) => same_unit(*v, *actual, unit),
        Value::Integer(i) => Outcome::Lossy(*i),
        Value::Float(f) => Outcome::lossy_or(trunc_to_i64(*f), Rejection::TypeMismatch),
        Value::Boolean(_)
        | Value::Text(_)
        | Value::Bytes(_)
        | Value::Date(_)
        | Value::Time(_)
        | Value::Datetime(..) => Outcome::mismatch(),
    }
}

/// Coerce into a `Datetime` payload counted in `unit` since the epoch
pub fn to_datetime(value: &Value, unit: TimeUnit) -> Outcome<i64> {
    match value {
        Value::Null => Outcome::Null,
        Value::Datetime(v, actual) => same_unit(*v, *actual, unit),
        Value::Date(days) => {
            Outcome::lossy_or(epoch::days_to_datetime(*days, unit), Rejection::TypeMismatch)
        }
        Value::Integer(i) => Outcome::Lossy(*i),
        Value::Float(f) => Outcome::lossy_or(trunc_to_i64(*f), Rejection::TypeMismatch),
        Value::Text(t) => Outcome::lossy_or(epoch::parse_datetime(t, unit), Rejection::ParseFailure),
        Value::Boolean(_) | Value::Bytes(_) | Value::Time(_) | Value::Duration(..) => {
            Outcome::mismatch()
        }
    }
}

fn same_unit(v: i64, actual: TimeUnit, expected: TimeUnit) -> Outcome<i64> {
    if actual == expected {
        Outcome::Exact(v)
    } else {
        Outcome::Unrepresentable(Rejection::UnitMismatch { expected, actual })
    }
}
