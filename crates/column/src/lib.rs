//! Fallback construction of typed columns from dynamically-typed values.
//!
//! A sequence of heterogeneous [`Value`]s is coerced element by element into a
//! single-typed [`Column`] of a caller-chosen [`TargetType`]. Each value is
//! classified by the coercion table ([`coerce`]) as exact, lossy or
//! unrepresentable, and the [`Strictness`] policy decides what happens next:
//!
//! - **strict**: only exact values and nulls are accepted; the first other
//!   value aborts construction with a [`ColumnError`]
//! - **non-strict**: lossy values are kept, unrepresentable ones become null;
//!   construction never fails
//!
//! ```rust
//! use colcast_column::prelude::*;
//!
//! let values = vec![Value::integer(0), Value::float(2.5), Value::text("x"), Value::Null];
//!
//! let column = build_column("n", &values, TargetType::Int64, &FallbackOptions::non_strict())?;
//! assert_eq!(column.data().as_int64(), Some(&[0, 2, 0, 0][..]));
//! assert_eq!(column.null_count(), 2);
//!
//! let err = build_column("n", &values, TargetType::Int64, &FallbackOptions::strict()).unwrap_err();
//! assert_eq!(err.index(), 1);
//! # Ok::<(), ColumnError>(())
//! ```
//!
//! ## Features
//!
//! - `serde` (default): serialization for target types, strictness and options
//! - `parallel` (default): chunked coercion of large slices on the rayon pool

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coerce;
pub mod column;
pub mod config;
mod epoch;
pub mod error;
pub mod fallback;
pub mod policy;
pub mod types;
pub mod value;

pub use coerce::{Outcome, Rejection};
pub use column::{Column, ColumnBuilder, ColumnData, Validity};
pub use config::{FallbackOptions, ParallelOptions};
pub use error::{ColumnError, ColumnResult};
pub use fallback::{build_column, build_column_from_iter, coerce_value};
pub use policy::{Strictness, Violation};
pub use types::{ParseTargetTypeError, TargetType, TimeUnit};
pub use value::{Value, ValueKind};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Column, ColumnData, ColumnError, ColumnResult, FallbackOptions, Strictness, TargetType,
        TimeUnit, Value, build_column, build_column_from_iter,
    };
}
