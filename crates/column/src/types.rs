//! Target type descriptors.
//!
//! [`TargetType`] names the semantic type a column is built as. Temporal
//! targets carry a [`TimeUnit`]; two descriptors are equal only when both the
//! base type and the unit match, so `Duration(Microseconds)` and
//! `Duration(Nanoseconds)` are distinct targets.
//!
//! ```rust
//! use colcast_column::{TargetType, TimeUnit};
//!
//! let target: TargetType = "duration[ns]".parse().unwrap();
//! assert_eq!(target, TargetType::Duration(TimeUnit::Nanoseconds));
//! assert_eq!(TargetType::duration().to_string(), "duration[us]");
//! ```

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MILLIS_PER_SECOND: i64 = 1_000;
const MICROS_PER_SECOND: i64 = 1_000_000;
const NANOS_PER_SECOND: i64 = 1_000_000_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// Temporal resolution attached to duration and datetime values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeUnit {
    /// Milliseconds
    #[cfg_attr(feature = "serde", serde(rename = "ms"))]
    Milliseconds,
    /// Microseconds
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "us"))]
    Microseconds,
    /// Nanoseconds
    #[cfg_attr(feature = "serde", serde(rename = "ns"))]
    Nanoseconds,
}

impl TimeUnit {
    /// Short suffix used in type names (`ms`, `us`, `ns`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Milliseconds => "ms",
            Self::Microseconds => "us",
            Self::Nanoseconds => "ns",
        }
    }

    /// Number of units in one second
    pub const fn per_second(self) -> i64 {
        match self {
            Self::Milliseconds => MILLIS_PER_SECOND,
            Self::Microseconds => MICROS_PER_SECOND,
            Self::Nanoseconds => NANOS_PER_SECOND,
        }
    }

    /// Number of units in one day
    pub const fn per_day(self) -> i64 {
        self.per_second() * SECONDS_PER_DAY
    }

    /// Number of nanoseconds in one unit
    pub const fn nanos_per_unit(self) -> i64 {
        NANOS_PER_SECOND / self.per_second()
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = ParseTargetTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ms" => Ok(Self::Milliseconds),
            "us" | "μs" => Ok(Self::Microseconds),
            "ns" => Ok(Self::Nanoseconds),
            _ => Err(ParseTargetTypeError::unknown_unit(s)),
        }
    }
}

/// Semantic type a value sequence is coerced into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetType {
    Int64,
    Float64,
    Boolean,
    Binary,
    String,
    /// Days since 1970-01-01
    Date,
    /// Nanoseconds since midnight
    Time,
    Duration(TimeUnit),
    /// Units since the Unix epoch, no timezone
    Datetime(TimeUnit),
}

impl TargetType {
    /// Duration in the default unit (microseconds)
    pub fn duration() -> Self {
        Self::Duration(TimeUnit::default())
    }

    /// Datetime in the default unit (microseconds)
    pub fn datetime() -> Self {
        Self::Datetime(TimeUnit::default())
    }

    /// Unit carried by temporal targets
    pub const fn time_unit(&self) -> Option<TimeUnit> {
        match self {
            Self::Duration(unit) | Self::Datetime(unit) => Some(*unit),
            _ => None,
        }
    }

    /// Check if this target is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int64 | Self::Float64)
    }

    /// Check if this target is temporal
    pub const fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date | Self::Time | Self::Duration(_) | Self::Datetime(_)
        )
    }

    /// Every target type, temporal ones in every unit
    pub fn all() -> Vec<Self> {
        let mut all = vec![
            Self::Int64,
            Self::Float64,
            Self::Boolean,
            Self::Binary,
            Self::String,
            Self::Date,
            Self::Time,
        ];
        for unit in [
            TimeUnit::Milliseconds,
            TimeUnit::Microseconds,
            TimeUnit::Nanoseconds,
        ] {
            all.push(Self::Duration(unit));
            all.push(Self::Datetime(unit));
        }
        all
    }
}

impl Display for TargetType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int64 => f.write_str("i64"),
            Self::Float64 => f.write_str("f64"),
            Self::Boolean => f.write_str("bool"),
            Self::Binary => f.write_str("binary"),
            Self::String => f.write_str("str"),
            Self::Date => f.write_str("date"),
            Self::Time => f.write_str("time"),
            Self::Duration(unit) => write!(f, "duration[{unit}]"),
            Self::Datetime(unit) => write!(f, "datetime[{unit}]"),
        }
    }
}

impl FromStr for TargetType {
    type Err = ParseTargetTypeError;

    /// Parse a type name such as `i64`, `string` or `datetime[ms]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (base, unit) = match lower.split_once('[') {
            Some((base, rest)) => {
                let unit = rest
                    .strip_suffix(']')
                    .ok_or_else(|| ParseTargetTypeError::unknown_type(s))?;
                (base, Some(unit.parse::<TimeUnit>()?))
            }
            None => (lower.as_str(), None),
        };

        let target = match base {
            "i64" | "int64" | "int" | "integer" => Self::Int64,
            "f64" | "float64" | "float" | "double" => Self::Float64,
            "bool" | "boolean" => Self::Boolean,
            "binary" | "bytes" => Self::Binary,
            "str" | "string" | "utf8" | "text" => Self::String,
            "date" => Self::Date,
            "time" => Self::Time,
            "duration" => return Ok(Self::Duration(unit.unwrap_or_default())),
            "datetime" | "timestamp" => return Ok(Self::Datetime(unit.unwrap_or_default())),
            _ => return Err(ParseTargetTypeError::unknown_type(s)),
        };

        if unit.is_some() {
            return Err(ParseTargetTypeError::unexpected_unit(s));
        }
        Ok(target)
    }
}

/// Errors raised while parsing a [`TargetType`] or [`TimeUnit`] name
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTargetTypeError {
    #[error("Unknown target type: '{input}'")]
    UnknownType { input: String },

    #[error("Unknown time unit: '{input}' (expected ms, us or ns)")]
    UnknownUnit { input: String },

    #[error("Target type '{input}' does not take a time unit")]
    UnexpectedUnit { input: String },
}

impl ParseTargetTypeError {
    pub fn unknown_type(input: impl Into<String>) -> Self {
        Self::UnknownType {
            input: input.into(),
        }
    }

    pub fn unknown_unit(input: impl Into<String>) -> Self {
        Self::UnknownUnit {
            input: input.into(),
        }
    }

    pub fn unexpected_unit(input: impl Into<String>) -> Self {
        Self::UnexpectedUnit {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_scales() {
        assert_eq!(TimeUnit::Milliseconds.per_day(), 86_400_000);
        assert_eq!(TimeUnit::Microseconds.nanos_per_unit(), 1_000);
        assert_eq!(TimeUnit::Nanoseconds.nanos_per_unit(), 1);
        assert_eq!(TimeUnit::default(), TimeUnit::Microseconds);
    }

    #[test]
    fn test_equality_includes_unit() {
        assert_ne!(
            TargetType::Duration(TimeUnit::Microseconds),
            TargetType::Duration(TimeUnit::Nanoseconds)
        );
        assert_eq!(TargetType::duration(), TargetType::Duration(TimeUnit::Microseconds));
        assert_ne!(
            TargetType::Duration(TimeUnit::Microseconds),
            TargetType::Datetime(TimeUnit::Microseconds)
        );
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for target in TargetType::all() {
            let parsed: TargetType = target.to_string().parse().unwrap();
            assert_eq!(parsed, target);
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("Int64".parse::<TargetType>().unwrap(), TargetType::Int64);
        assert_eq!("utf8".parse::<TargetType>().unwrap(), TargetType::String);
        assert_eq!("duration".parse::<TargetType>().unwrap(), TargetType::duration());
        assert_eq!(
            "datetime[ms]".parse::<TargetType>().unwrap(),
            TargetType::Datetime(TimeUnit::Milliseconds)
        );
    }

    #[test]
    fn test_from_str_errors() {
        assert!(matches!(
            "decimal".parse::<TargetType>(),
            Err(ParseTargetTypeError::UnknownType { .. })
        ));
        assert!(matches!(
            "duration[s]".parse::<TargetType>(),
            Err(ParseTargetTypeError::UnknownUnit { .. })
        ));
        assert!(matches!(
            "i64[ns]".parse::<TargetType>(),
            Err(ParseTargetTypeError::UnexpectedUnit { .. })
        ));
        assert!(matches!(
            "duration[ns".parse::<TargetType>(),
            Err(ParseTargetTypeError::UnknownType { .. })
        ));
    }
}
