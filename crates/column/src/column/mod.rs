//! Typed columns
//!
//! A [`Column`] is a name, one typed payload vector ([`ColumnData`]) and a
//! [`Validity`] sequence of the same length. Columns are produced by the
//! fallback constructor and then owned by the caller.

mod builder;

pub use builder::{ColumnBuilder, Validity};

use bytes::Bytes;

use crate::config::FallbackOptions;
use crate::error::ColumnResult;
use crate::fallback;
use crate::types::{TargetType, TimeUnit};
use crate::value::Value;

/// Physical payload of a column, one variant per target type
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int64(Vec<i64>),
    Float64(Vec<f64>),
    Boolean(Vec<bool>),
    Binary(Vec<Bytes>),
    String(Vec<String>),
    Date(Vec<i32>),
    Time(Vec<i64>),
    Duration(Vec<i64>, TimeUnit),
    Datetime(Vec<i64>, TimeUnit),
}

impl ColumnData {
    pub fn dtype(&self) -> TargetType {
        match self {
            Self::Int64(_) => TargetType::Int64,
            Self::Float64(_) => TargetType::Float64,
            Self::Boolean(_) => TargetType::Boolean,
            Self::Binary(_) => TargetType::Binary,
            Self::String(_) => TargetType::String,
            Self::Date(_) => TargetType::Date,
            Self::Time(_) => TargetType::Time,
            Self::Duration(_, unit) => TargetType::Duration(*unit),
            Self::Datetime(_, unit) => TargetType::Datetime(*unit),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Int64(v) | Self::Time(v) | Self::Duration(v, _) | Self::Datetime(v, _) => v.len(),
            Self::Float64(v) => v.len(),
            Self::Boolean(v) => v.len(),
            Self::Binary(v) => v.len(),
            Self::String(v) => v.len(),
            Self::Date(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Payload at `index` as a [`Value`], ignoring validity
    pub fn value_at(&self, index: usize) -> Option<Value> {
        let value = match self {
            Self::Int64(v) => Value::Integer(*v.get(index)?),
            Self::Float64(v) => Value::Float(*v.get(index)?),
            Self::Boolean(v) => Value::Boolean(*v.get(index)?),
            Self::Binary(v) => Value::Bytes(v.get(index)?.clone()),
            Self::String(v) => Value::Text(v.get(index)?.clone()),
            Self::Date(v) => Value::Date(*v.get(index)?),
            Self::Time(v) => Value::Time(*v.get(index)?),
            Self::Duration(v, unit) => Value::Duration(*v.get(index)?, *unit),
            Self::Datetime(v, unit) => Value::Datetime(*v.get(index)?, *unit),
        };
        Some(value)
    }

    pub fn as_int64(&self) -> Option<&[i64]> {
        match self {
            Self::Int64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float64(&self) -> Option<&[f64]> {
        match self {
            Self::Float64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<&[bool]> {
        match self {
            Self::Boolean(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&[Bytes]> {
        match self {
            Self::Binary(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&[String]> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&[i32]> {
        match self {
            Self::Date(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<&[i64]> {
        match self {
            Self::Time(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<(&[i64], TimeUnit)> {
        match self {
            Self::Duration(v, unit) => Some((v, *unit)),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<(&[i64], TimeUnit)> {
        match self {
            Self::Datetime(v, unit) => Some((v, *unit)),
            _ => None,
        }
    }
}

/// A named, single-typed column with per-slot validity
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
    validity: Validity,
}

impl Column {
    pub(crate) fn from_parts(name: String, data: ColumnData, validity: Validity) -> Self {
        debug_assert_eq!(data.len(), validity.len());
        Self {
            name,
            data,
            validity,
        }
    }

    /// Build a column from dynamically-typed values.
    ///
    /// Strict mode fails on the first value that is not an exact match for
    /// `target`; non-strict mode keeps lossy conversions, stores null for the
    /// rest and never fails.
    ///
    /// ```rust
    /// use colcast_column::{Column, TargetType, Value};
    ///
    /// let values = [Value::integer(1), Value::float(2.5), Value::text("x")];
    /// let column = Column::from_values("a", &values, TargetType::Int64, false).unwrap();
    /// assert_eq!(column.to_values(), vec![Value::integer(1), Value::integer(2), Value::Null]);
    ///
    /// let err = Column::from_values("a", &values, TargetType::Int64, true).unwrap_err();
    /// assert!(err.to_string().contains("unexpected value"));
    /// assert_eq!(err.index(), 1);
    /// ```
    pub fn from_values(
        name: impl Into<String>,
        values: &[Value],
        target: TargetType,
        strict: bool,
    ) -> ColumnResult<Self> {
        let options = FallbackOptions::default().with_strictness(strict.into());
        fallback::build_column(name, values, target, &options)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn dtype(&self) -> TargetType {
        self.data.dtype()
    }

    pub fn len(&self) -> usize {
        self.validity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validity.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.validity.null_count()
    }

    pub fn is_valid(&self, index: usize) -> bool {
        self.validity.is_valid(index)
    }

    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    /// Slot at `index`: `Some(Value::Null)` for null slots, `None` past the end
    pub fn get(&self, index: usize) -> Option<Value> {
        if index >= self.len() {
            return None;
        }
        if self.validity.is_valid(index) {
            self.data.value_at(index)
        } else {
            Some(Value::Null)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        (0..self.len()).map(|i| self.get(i).unwrap_or_default())
    }

    pub fn to_values(&self) -> Vec<Value> {
        self.iter().collect()
    }

    pub fn into_parts(self) -> (String, ColumnData, Validity) {
        (self.name, self.data, self.validity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Column {
        let validity: Validity = [true, false, true].into_iter().collect();
        Column::from_parts("n".to_owned(), ColumnData::Int64(vec![4, 0, 6]), validity)
    }

    #[test]
    fn test_accessors() {
        let mut column = sample();
        assert_eq!(column.name(), "n");
        assert_eq!(column.dtype(), TargetType::Int64);
        assert_eq!(column.len(), 3);
        assert_eq!(column.null_count(), 1);
        assert_eq!(column.get(0), Some(Value::Integer(4)));
        assert_eq!(column.get(1), Some(Value::Null));
        assert_eq!(column.get(3), None);
        assert_eq!(column.data().as_int64(), Some(&[4, 0, 6][..]));
        assert_eq!(column.data().as_float64(), None);

        column.rename("m");
        let (name, data, validity) = column.into_parts();
        assert_eq!(name, "m");
        assert_eq!(data.len(), validity.len());
    }

    #[test]
    fn test_to_values() {
        assert_eq!(
            sample().to_values(),
            vec![Value::Integer(4), Value::Null, Value::Integer(6)]
        );
    }

    #[test]
    fn test_temporal_payload_carries_unit() {
        let data = ColumnData::Duration(vec![1], TimeUnit::Nanoseconds);
        assert_eq!(data.dtype(), TargetType::Duration(TimeUnit::Nanoseconds));
        assert_eq!(
            data.value_at(0),
            Some(Value::Duration(1, TimeUnit::Nanoseconds))
        );
        assert_eq!(data.as_duration(), Some((&[1_i64][..], TimeUnit::Nanoseconds)));
    }
}
