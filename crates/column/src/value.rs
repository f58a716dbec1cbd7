//! Dynamically-typed scalar values.
//!
//! [`Value`] is the closed set of scalar shapes the engine accepts as input.
//! Producers (decoders, bindings, tests) build these; the coercion table
//! consumes them. [`ValueKind`] is the bare variant tag, used in error reports.

use core::fmt::{self, Display, Formatter};

use bytes::Bytes;
use chrono::{NaiveDate, NaiveTime};

use crate::epoch;
use crate::types::TimeUnit;

/// A single dynamically-typed scalar
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Null/None value
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Integer number (i64)
    Integer(i64),

    /// Floating point number (f64)
    Float(f64),

    /// UTF-8 text string
    Text(String),

    /// Binary data
    Bytes(Bytes),

    /// Days since 1970-01-01
    Date(i32),

    /// Nanoseconds since midnight
    Time(i64),

    /// Time span counted in `TimeUnit`s
    Duration(i64, TimeUnit),

    /// `TimeUnit`s since the Unix epoch, no timezone
    Datetime(i64, TimeUnit),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Create an integer value
    pub const fn integer(v: i64) -> Self {
        Self::Integer(v)
    }

    /// Create a float value
    pub const fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Create a text value from String or &str
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// Create a bytes value
    pub fn bytes(v: impl Into<Bytes>) -> Self {
        Self::Bytes(v.into())
    }

    /// Create a date value from a day index
    pub const fn date(days: i32) -> Self {
        Self::Date(days)
    }

    /// Create a date value from a calendar date, `None` if it is invalid
    pub fn date_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    /// Create a time value from nanoseconds since midnight
    pub const fn time(nanos: i64) -> Self {
        Self::Time(nanos)
    }

    /// Create a time value from wall-clock parts, `None` if they are invalid
    pub fn time_hms_nano(hour: u32, minute: u32, second: u32, nano: u32) -> Option<Self> {
        NaiveTime::from_hms_nano_opt(hour, minute, second, nano).map(Self::from)
    }

    /// Create a duration value
    pub const fn duration(v: i64, unit: TimeUnit) -> Self {
        Self::Duration(v, unit)
    }

    /// Create a datetime value
    pub const fn datetime(v: i64, unit: TimeUnit) -> Self {
        Self::Datetime(v, unit)
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Date(_) => ValueKind::Date,
            Self::Time(_) => ValueKind::Time,
            Self::Duration(..) => ValueKind::Duration,
            Self::Datetime(..) => ValueKind::Datetime,
        }
    }

    /// Check if this is null
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Unit of a duration or datetime value
    pub const fn time_unit(&self) -> Option<TimeUnit> {
        match self {
            Self::Duration(_, unit) | Self::Datetime(_, unit) => Some(*unit),
            _ => None,
        }
    }

    /// Try to get as string slice
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(t) => f.write_str(t),
            Self::Bytes(b) => write!(f, "{b:?}"),
            Self::Date(days) => match epoch::date_from_days(*days) {
                Some(date) => write!(f, "{date}"),
                None => write!(f, "date({days})"),
            },
            Self::Time(nanos) => match epoch::time_from_nanos(*nanos) {
                Some(time) => write!(f, "{time}"),
                None => write!(f, "time({nanos})"),
            },
            Self::Duration(v, unit) => write!(f, "{v}{unit}"),
            Self::Datetime(v, unit) => match epoch::naive_datetime_from_timestamp(*v, *unit) {
                Some(dt) => write!(f, "{dt}"),
                None => write!(f, "datetime({v}{unit})"),
            },
        }
    }
}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(v))
    }
}

impl From<Bytes> for Value {
    fn from(v: Bytes) -> Self {
        Self::Bytes(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::Date(epoch::days_from_date(v))
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Self::Time(epoch::nanos_from_time(v))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Variant tag of a [`Value`]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    Bytes,
    Date,
    Time,
    Duration,
    Datetime,
}

impl ValueKind {
    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Date => "date",
            Self::Time => "time",
            Self::Duration => "duration",
            Self::Datetime => "datetime",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::null().kind(), ValueKind::Null);
        assert_eq!(Value::integer(42).kind(), ValueKind::Integer);
        assert_eq!(Value::text("a").kind(), ValueKind::Text);
        assert_eq!(
            Value::duration(1, TimeUnit::Nanoseconds).kind(),
            ValueKind::Duration
        );
        assert_eq!(ValueKind::Datetime.to_string(), "datetime");
    }

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from(7_i32), Value::Integer(7));
        assert_eq!(Value::from("x"), Value::Text("x".into()));
        assert_eq!(Value::from(b"123".to_vec()), Value::bytes(&b"123"[..]));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(2.5)), Value::Float(2.5));
    }

    #[test]
    fn test_temporal_constructors() {
        assert_eq!(Value::date_ymd(1970, 1, 2), Some(Value::Date(1)));
        assert_eq!(Value::date_ymd(1970, 2, 30), None);
        assert_eq!(
            Value::time_hms_nano(0, 0, 1, 5),
            Some(Value::Time(1_000_000_005))
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::null().to_string(), "null");
        assert_eq!(Value::boolean(true).to_string(), "true");
        assert_eq!(Value::Date(0).to_string(), "1970-01-01");
        assert_eq!(Value::Time(3_600_000_000_000).to_string(), "01:00:00");
        assert_eq!(
            Value::datetime(86_400_000, TimeUnit::Milliseconds).to_string(),
            "1970-01-02 00:00:00"
        );
        assert_eq!(Value::duration(5, TimeUnit::Nanoseconds).to_string(), "5ns");
    }
}
