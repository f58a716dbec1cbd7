//! Column construction errors
//!
//! Only strict construction fails. Every variant reports the column name, the
//! index of the first offending value, that value's kind and the target type,
//! and every message starts with `unexpected value` so callers that match on
//! that text keep working.

use thiserror::Error;

use crate::types::{TargetType, TimeUnit};
use crate::value::ValueKind;

/// Result type for column construction
pub type ColumnResult<T> = Result<T, ColumnError>;

/// Strict-mode construction failure
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColumnError {
    /// The value kind has no conversion into the target type
    #[error(
        "unexpected value while building column '{column}' of type {target}: \
         {kind} at index {index} cannot be converted"
    )]
    TypeMismatch {
        column: String,
        index: usize,
        kind: ValueKind,
        target: TargetType,
    },

    /// A conversion exists but loses information, which strict mode forbids
    #[error(
        "unexpected value while building column '{column}' of type {target}: \
         {kind} at index {index} would lose information in strict mode"
    )]
    LossyUnderStrict {
        column: String,
        index: usize,
        kind: ValueKind,
        target: TargetType,
    },

    /// Same temporal base type, different time unit
    #[error(
        "unexpected value while building column '{column}' of type {target}: \
         {kind}[{unit}] at index {index} has a different time unit"
    )]
    UnitMismatch {
        column: String,
        index: usize,
        kind: ValueKind,
        unit: TimeUnit,
        target: TargetType,
    },

    /// Text that does not parse into the target's grammar
    #[error(
        "unexpected value while building column '{column}' of type {target}: \
         text {input:?} at index {index} does not parse"
    )]
    ParseFailure {
        column: String,
        index: usize,
        input: String,
        target: TargetType,
    },
}

impl ColumnError {
    pub fn type_mismatch(
        column: impl Into<String>,
        index: usize,
        kind: ValueKind,
        target: TargetType,
    ) -> Self {
        Self::TypeMismatch {
            column: column.into(),
            index,
            kind,
            target,
        }
    }

    pub fn lossy_under_strict(
        column: impl Into<String>,
        index: usize,
        kind: ValueKind,
        target: TargetType,
    ) -> Self {
        Self::LossyUnderStrict {
            column: column.into(),
            index,
            kind,
            target,
        }
    }

    pub fn unit_mismatch(
        column: impl Into<String>,
        index: usize,
        kind: ValueKind,
        unit: TimeUnit,
        target: TargetType,
    ) -> Self {
        Self::UnitMismatch {
            column: column.into(),
            index,
            kind,
            unit,
            target,
        }
    }

    pub fn parse_failure(
        column: impl Into<String>,
        index: usize,
        input: impl Into<String>,
        target: TargetType,
    ) -> Self {
        Self::ParseFailure {
            column: column.into(),
            index,
            input: input.into(),
            target,
        }
    }

    /// Name of the column being built
    pub fn column(&self) -> &str {
        match self {
            Self::TypeMismatch { column, .. }
            | Self::LossyUnderStrict { column, .. }
            | Self::UnitMismatch { column, .. }
            | Self::ParseFailure { column, .. } => column,
        }
    }

    /// Position of the first offending value in the input
    pub fn index(&self) -> usize {
        match self {
            Self::TypeMismatch { index, .. }
            | Self::LossyUnderStrict { index, .. }
            | Self::UnitMismatch { index, .. }
            | Self::ParseFailure { index, .. } => *index,
        }
    }

    /// Kind of the offending value
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Self::TypeMismatch { kind, .. }
            | Self::LossyUnderStrict { kind, .. }
            | Self::UnitMismatch { kind, .. } => *kind,
            Self::ParseFailure { .. } => ValueKind::Text,
        }
    }

    pub fn target(&self) -> TargetType {
        match self {
            Self::TypeMismatch { target, .. }
            | Self::LossyUnderStrict { target, .. }
            | Self::UnitMismatch { target, .. }
            | Self::ParseFailure { target, .. } => *target,
        }
    }
}
