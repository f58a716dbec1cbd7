//! Binary and String targets.

use bytes::Bytes;

use super::{Outcome, Rejection};
use crate::epoch;
use crate::value::Value;

/// Coerce into a `Binary` payload
pub fn to_binary(value: &Value) -> Outcome<Bytes> {
    match value {
        Value::Null => Outcome::Null,
        Value::Bytes(b) => Outcome::Exact(b.clone()),
        Value::Text(t) => Outcome::Lossy(Bytes::copy_from_slice(t.as_bytes())),
        Value::Boolean(_)
        | Value::Integer(_)
        | Value::Float(_)
        | Value::Date(_)
        | Value::Time(_)
        | Value::Duration(..)
        | Value::Datetime(..) => Outcome::mismatch(),
    }
}

/// Coerce into a `String` payload.
///
/// Bytes never convert, even when they hold valid UTF-8.
pub fn to_string(value: &Value) -> Outcome<String> {
    match value {
        Value::Null => Outcome::Null,
        Value::Text(t) => Outcome::Exact(t.clone()),
        Value::Integer(i) => Outcome::Lossy(i.to_string()),
        Value::Float(f) => Outcome::Lossy(format_float(*f)),
        Value::Boolean(b) => Outcome::Lossy(b.to_string()),
        Value::Date(days) => Outcome::lossy_or(
            epoch::date_from_days(*days).map(|d| d.to_string()),
            Rejection::TypeMismatch,
        ),
        Value::Time(nanos) => Outcome::lossy_or(
            epoch::time_from_nanos(*nanos).map(|t| t.to_string()),
            Rejection::TypeMismatch,
        ),
        Value::Datetime(v, unit) => Outcome::lossy_or(
            epoch::naive_datetime_from_timestamp(*v, *unit).map(|dt| dt.to_string()),
            Rejection::TypeMismatch,
        ),
        Value::Bytes(_) | Value::Duration(..) => Outcome::mismatch(),
    }
}

/// Shortest round-trip decimal text, always marked as a float (`1.0`, not `1`)
fn format_float(v: f64) -> String {
    let mut s = v.to_string();
    if v.is_finite() && !s.contains(['.', 'e', 'E']) {
        s.push_str(".0");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimeUnit;

    #[test]
    fn test_to_binary() {
        assert_eq!(
            to_binary(&Value::bytes(&b"123"[..])),
            Outcome::Exact(Bytes::from_static(b"123"))
        );
        assert_eq!(
            to_binary(&Value::text("xyz")),
            Outcome::Lossy(Bytes::from_static(b"xyz"))
        );
        assert_eq!(to_binary(&Value::integer(100)), Outcome::mismatch());
        assert_eq!(to_binary(&Value::boolean(true)), Outcome::mismatch());
    }

    #[test]
    fn test_to_string() {
        assert_eq!(to_string(&Value::text("xyz")), Outcome::Exact("xyz".to_owned()));
        assert_eq!(to_string(&Value::integer(1)), Outcome::Lossy("1".to_owned()));
        assert_eq!(to_string(&Value::float(2.5)), Outcome::Lossy("2.5".to_owned()));
        assert_eq!(to_string(&Value::boolean(true)), Outcome::Lossy("true".to_owned()));
        assert_eq!(to_string(&Value::date(0)), Outcome::Lossy("1970-01-01".to_owned()));
        assert_eq!(
            to_string(&Value::time(36_000_000_000_001)),
            Outcome::Lossy("10:00:00.000000001".to_owned())
        );
        assert_eq!(
            to_string(&Value::datetime(1_500, TimeUnit::Milliseconds)),
            Outcome::Lossy("1970-01-01 00:00:01.500".to_owned())
        );
        assert_eq!(to_string(&Value::bytes(&b"123"[..])), Outcome::mismatch());
        assert_eq!(
            to_string(&Value::duration(1, TimeUnit::Microseconds)),
            Outcome::mismatch()
        );
        assert_eq!(to_string(&Value::time(-1)), Outcome::mismatch());
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-0.5), "-0.5");
        assert!(format_float(1e300).ends_with(".0"));
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }
}
