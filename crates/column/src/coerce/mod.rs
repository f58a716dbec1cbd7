//! The coercion table.
//!
//! One pure, total function per [`TargetType`] classifies a source [`Value`]
//! as an [`Outcome`]:
//!
//! | Outcome | Meaning | Strict | Non-strict |
//! |---|---|---|---|
//! | `Null` | source was null | null slot | null slot |
//! | `Exact` | native representation, no loss | value | value |
//! | `Lossy` | defined but information-losing | abort | value |
//! | `Unrepresentable` | no defined conversion | abort | null slot |
//!
//! The per-target functions live in [`numeric`], [`text`] and [`temporal`]
//! and return the target's physical payload type, which is what the column
//! builder stores. [`coerce`] dispatches on a runtime `TargetType` and wraps
//! the payload back into a `Value`.
//!
//! ```rust
//! use colcast_column::coerce::{coerce, Outcome};
//! use colcast_column::{TargetType, Value};
//!
//! assert_eq!(coerce(&Value::float(2.5), TargetType::Int64), Outcome::Lossy(Value::integer(2)));
//! assert!(coerce(&Value::text("true"), TargetType::Boolean).is_unrepresentable());
//! ```

pub mod numeric;
pub mod temporal;
pub mod text;

use crate::types::{TargetType, TimeUnit};
use crate::value::Value;

/// Why a value has no conversion into a target type
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// No mapping from this value kind, or the result is out of range
    TypeMismatch,
    /// Same temporal base type with a different unit
    UnitMismatch { expected: TimeUnit, actual: TimeUnit },
    /// Text that does not parse into the target's grammar
    ParseFailure,
}

/// Classification of a single coercion attempt
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    /// The source was null
    Null,
    /// Native representation, no information lost
    Exact(T),
    /// Defined conversion that loses information
    Lossy(T),
    /// No defined conversion
    Unrepresentable(Rejection),
}

impl<T> Outcome<T> {
    /// `Lossy` if a conversion produced a value, otherwise the given rejection
    #[inline]
    pub fn lossy_or(value: Option<T>, rejection: Rejection) -> Self {
        match value {
            Some(v) => Self::Lossy(v),
            None => Self::Unrepresentable(rejection),
        }
    }

    /// Shorthand for `Unrepresentable(TypeMismatch)`
    #[inline]
    pub const fn mismatch() -> Self {
        Self::Unrepresentable(Rejection::TypeMismatch)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Null => Outcome::Null,
            Self::Exact(v) => Outcome::Exact(f(v)),
            Self::Lossy(v) => Outcome::Lossy(f(v)),
            Self::Unrepresentable(r) => Outcome::Unrepresentable(r),
        }
    }

    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    pub const fn is_lossy(&self) -> bool {
        matches!(self, Self::Lossy(_))
    }

    pub const fn is_unrepresentable(&self) -> bool {
        matches!(self, Self::Unrepresentable(_))
    }

    /// The coerced payload, if any
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Exact(v) | Self::Lossy(v) => Some(v),
            Self::Null | Self::Unrepresentable(_) => None,
        }
    }
}

/// Coerce a value into a runtime-selected target type
pub fn coerce(value: &Value, target: TargetType) -> Outcome<Value> {
    match target {
        TargetType::Int64 => numeric::to_int64(value).map(Value::Integer),
        TargetType::Float64 => numeric::to_float64(value).map(Value::Float),
        TargetType::Boolean => numeric::to_boolean(value).map(Value::Boolean),
        TargetType::Binary => text::to_binary(value).map(Value::Bytes),
        TargetType::String => text::to_string(value).map(Value::Text),
        TargetType::Date => temporal::to_date(value).map(Value::Date),
        TargetType::Time => temporal::to_time(value).map(Value::Time),
        TargetType::Duration(unit) => {
            temporal::to_duration(value, unit).map(|v| Value::Duration(v, unit))
        }
        TargetType::Datetime(unit) => {
            temporal::to_datetime(value, unit).map(|v| Value::Datetime(v, unit))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_null_for_every_target() {
        for target in TargetType::all() {
            assert_eq!(coerce(&Value::Null, target), Outcome::Null, "{target}");
        }
    }

    #[test]
    fn test_exact_path_is_identity() {
        let cases = [
            (Value::integer(-1), TargetType::Int64),
            (Value::float(0.5), TargetType::Float64),
            (Value::boolean(false), TargetType::Boolean),
            (Value::bytes(&b"xyz"[..]), TargetType::Binary),
            (Value::text("xyz"), TargetType::String),
            (Value::date(11_000), TargetType::Date),
            (Value::time(1_000), TargetType::Time),
            (
                Value::duration(3, TimeUnit::Milliseconds),
                TargetType::Duration(TimeUnit::Milliseconds),
            ),
            (
                Value::datetime(-5, TimeUnit::Nanoseconds),
                TargetType::Datetime(TimeUnit::Nanoseconds),
            ),
        ];
        for (value, target) in cases {
            let once = coerce(&value, target);
            assert_eq!(once, Outcome::Exact(value.clone()));
            let twice = coerce(&once.into_value().unwrap(), target);
            assert_eq!(twice, Outcome::Exact(value));
        }
    }

    #[test]
    fn test_outcome_helpers() {
        assert_eq!(
            Outcome::lossy_or(Some(1), Rejection::ParseFailure),
            Outcome::Lossy(1)
        );
        assert_eq!(
            Outcome::<i32>::lossy_or(None, Rejection::ParseFailure),
            Outcome::Unrepresentable(Rejection::ParseFailure)
        );
        assert_eq!(Outcome::Exact(2).map(|v| v * 2), Outcome::Exact(4));
        assert_eq!(Outcome::<i32>::Null.into_value(), None);
        assert!(Outcome::<i32>::mismatch().is_unrepresentable());
    }
}
