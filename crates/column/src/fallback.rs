//! Fallback column construction.
//!
//! Drives every input value through the coercion table and the strictness
//! policy, left to right, into a typed [`ColumnBuilder`]. Strict construction
//! stops at the first violation and reports it; non-strict construction is
//! total.
//!
//! Slice input may be split into contiguous chunks that are coerced on the
//! rayon pool (see [`ParallelOptions`](crate::config::ParallelOptions)). Each
//! chunk stops at its own first violation and chunk results are combined in
//! input order, so the reported error is always the lowest-indexed one, the
//! same as a sequential scan.

use core::borrow::Borrow;

use crate::coerce::{self, Outcome, Rejection, numeric, temporal, text};
use crate::column::{Column, ColumnBuilder, ColumnData, Validity};
use crate::config::{FallbackOptions, ParallelOptions};
use crate::error::{ColumnError, ColumnResult};
use crate::policy::{Strictness, Violation};
use crate::types::TargetType;
use crate::value::Value;

/// Build a column from a slice of values
pub fn build_column(
    name: impl Into<String>,
    values: &[Value],
    target: TargetType,
    options: &FallbackOptions,
) -> ColumnResult<Column> {
    let name = name.into();
    let site = Site {
        column: &name,
        target,
        strictness: options.strictness,
    };
    let span = tracing::debug_span!(
        "build_column",
        column = %name,
        %target,
        len = values.len(),
        strict = site.strictness.is_strict(),
    );
    let _guard = span.enter();

    let input = SliceInput {
        values,
        chunk_size: chunking(&options.parallel, values.len()),
    };
    let (data, validity) = site.build(input)?;
    Ok(Column::from_parts(name, data, validity))
}

/// Build a column from any sequence of owned values.
///
/// Always sequential; the builder is pre-sized from the iterator's lower
/// size hint.
pub fn build_column_from_iter<I>(
    name: impl Into<String>,
    values: I,
    target: TargetType,
    strictness: Strictness,
) -> ColumnResult<Column>
where
    I: IntoIterator<Item = Value>,
{
    let name = name.into();
    let site = Site {
        column: &name,
        target,
        strictness,
    };
    let iter = values.into_iter();
    let span = tracing::debug_span!(
        "build_column",
        column = %name,
        %target,
        len = iter.size_hint().0,
        strict = strictness.is_strict(),
    );
    let _guard = span.enter();

    let (data, validity) = site.build(IterInput { iter })?;
    Ok(Column::from_parts(name, data, validity))
}

/// Coerce a single value, resolving it with the given strictness.
///
/// `Ok(None)` is a null slot. Errors report index 0 and an unnamed column.
pub fn coerce_value(
    value: &Value,
    target: TargetType,
    strictness: Strictness,
) -> ColumnResult<Option<Value>> {
    let site = Site {
        column: "",
        target,
        strictness,
    };
    strictness
        .resolve(coerce::coerce(value, target))
        .map_err(|violation| site.error(0, value, violation))
}

#[cfg(feature = "parallel")]
fn chunking(parallel: &ParallelOptions, len: usize) -> Option<usize> {
    parallel
        .applies_to(len)
        .then(|| parallel.effective_chunk_size())
}

#[cfg(not(feature = "parallel"))]
fn chunking(_parallel: &ParallelOptions, _len: usize) -> Option<usize> {
    None
}

/// What is being built, and under which policy
struct Site<'a> {
    column: &'a str,
    target: TargetType,
    strictness: Strictness,
}

impl Site<'_> {
    fn build<S: Input>(&self, input: S) -> ColumnResult<(ColumnData, Validity)> {
        let built = match self.target {
            TargetType::Int64 => wrap(input.coerce_all(self, numeric::to_int64), ColumnData::Int64),
            TargetType::Float64 => {
                wrap(input.coerce_all(self, numeric::to_float64), ColumnData::Float64)
            }
            TargetType::Boolean => {
                wrap(input.coerce_all(self, numeric::to_boolean), ColumnData::Boolean)
            }
            TargetType::Binary => wrap(input.coerce_all(self, text::to_binary), ColumnData::Binary),
            TargetType::String => wrap(input.coerce_all(self, text::to_string), ColumnData::String),
            TargetType::Date => wrap(input.coerce_all(self, temporal::to_date), ColumnData::Date),
            TargetType::Time => wrap(input.coerce_all(self, temporal::to_time), ColumnData::Time),
            TargetType::Duration(unit) => wrap(
                input.coerce_all(self, |v| temporal::to_duration(v, unit)),
                |data| ColumnData::Duration(data, unit),
            ),
            TargetType::Datetime(unit) => wrap(
                input.coerce_all(self, |v| temporal::to_datetime(v, unit)),
                |data| ColumnData::Datetime(data, unit),
            ),
        };

        match &built {
            Ok((_, validity)) => {
                tracing::debug!(nulls = validity.null_count(), "column built");
            }
            Err(err) => {
                tracing::debug!(
                    index = err.index(),
                    kind = %err.value_kind(),
                    "strict construction aborted"
                );
            }
        }
        built
    }

    /// Append each value's resolved slot, stopping at the first violation
    fn fill<T, V, F>(
        &self,
        builder: &mut ColumnBuilder<T>,
        values: impl IntoIterator<Item = V>,
        offset: usize,
        coerce: &F,
    ) -> ColumnResult<()>
    where
        T: Default,
        V: Borrow<Value>,
        F: Fn(&Value) -> Outcome<T>,
    {
        for (i, value) in values.into_iter().enumerate() {
            let value = value.borrow();
            match self.strictness.resolve(coerce(value)) {
                Ok(Some(v)) => builder.append_value(v),
                Ok(None) => {
                    if !value.is_null() {
                        tracing::trace!(
                            index = offset + i,
                            kind = %value.kind(),
                            "unrepresentable value stored as null"
                        );
                    }
                    builder.append_null();
                }
                Err(violation) => return Err(self.error(offset + i, value, violation)),
            }
        }
        Ok(())
    }

    fn error(&self, index: usize, value: &Value, violation: Violation) -> ColumnError {
        let (column, target, kind) = (self.column, self.target, value.kind());
        match violation {
            Violation::Lossy => ColumnError::lossy_under_strict(column, index, kind, target),
            Violation::Rejected(Rejection::TypeMismatch) => {
                ColumnError::type_mismatch(column, index, kind, target)
            }
            Violation::Rejected(Rejection::UnitMismatch { actual, .. }) => {
                ColumnError::unit_mismatch(column, index, kind, actual, target)
            }
            Violation::Rejected(Rejection::ParseFailure) => {
                let input = value.as_str().map_or_else(|| value.to_string(), str::to_owned);
                ColumnError::parse_failure(column, index, input, target)
            }
        }
    }
}

fn wrap<T>(
    built: ColumnResult<(Vec<T>, Validity)>,
    data: impl FnOnce(Vec<T>) -> ColumnData,
) -> ColumnResult<(ColumnData, Validity)> {
    built.map(|(values, validity)| (data(values), validity))
}

/// A source of values that can be driven through one coercion function
trait Input {
    fn coerce_all<T, F>(self, site: &Site<'_>, coerce: F) -> ColumnResult<(Vec<T>, Validity)>
    where
        T: Default + Send,
        F: Fn(&Value) -> Outcome<T> + Sync;
}

struct SliceInput<'a> {
    values: &'a [Value],
    /// `Some` when the slice should be split across the rayon pool
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    chunk_size: Option<usize>,
}

impl Input for SliceInput<'_> {
    fn coerce_all<T, F>(self, site: &Site<'_>, coerce: F) -> ColumnResult<(Vec<T>, Validity)>
    where
        T: Default + Send,
        F: Fn(&Value) -> Outcome<T> + Sync,
    {
        #[cfg(feature = "parallel")]
        if let Some(chunk_size) = self.chunk_size {
            return coerce_chunked(site, self.values, chunk_size, &coerce).map(ColumnBuilder::finish);
        }

        let mut builder = ColumnBuilder::with_capacity(self.values.len());
        site.fill(&mut builder, self.values, 0, &coerce)?;
        Ok(builder.finish())
    }
}

#[cfg(feature = "parallel")]
fn coerce_chunked<T, F>(
    site: &Site<'_>,
    values: &[Value],
    chunk_size: usize,
    coerce: &F,
) -> ColumnResult<ColumnBuilder<T>>
where
    T: Default + Send,
    F: Fn(&Value) -> Outcome<T> + Sync,
{
    use rayon::prelude::*;

    tracing::debug!(
        chunks = values.len().div_ceil(chunk_size),
        chunk_size,
        "coercing in parallel"
    );

    let chunks: Vec<ColumnResult<ColumnBuilder<T>>> = values
        .par_chunks(chunk_size)
        .enumerate()
        .map(|(n, chunk)| {
            let mut builder = ColumnBuilder::with_capacity(chunk.len());
            site.fill(&mut builder, chunk, n * chunk_size, coerce)?;
            Ok(builder)
        })
        .collect();

    let mut builder = ColumnBuilder::with_capacity(values.len());
    for chunk in chunks {
        builder.append_builder(chunk?);
    }
    Ok(builder)
}

struct IterInput<I> {
    iter: I,
}

impl<I: Iterator<Item = Value>> Input for IterInput<I> {
    fn coerce_all<T, F>(self, site: &Site<'_>, coerce: F) -> ColumnResult<(Vec<T>, Validity)>
    where
        T: Default + Send,
        F: Fn(&Value) -> Outcome<T> + Sync,
    {
        let mut builder = ColumnBuilder::with_capacity(self.iter.size_hint().0);
        site.fill(&mut builder, self.iter, 0, &coerce)?;
        Ok(builder.finish())
    }
}
