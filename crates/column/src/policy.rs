//! Strictness policy.
//!
//! Turns a per-element [`Outcome`] into a slot to append (`Some` value or
//! `None` for null) or a [`Violation`] that aborts construction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coerce::{Outcome, Rejection};

/// How information-losing or undefined conversions are treated
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strictness {
    /// Only exact values and nulls are accepted; anything else aborts
    #[default]
    Strict,
    /// Lossy values are kept, unrepresentable ones become null; never fails
    NonStrict,
}

/// Reason strict mode refused an outcome
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    Lossy,
    Rejected(Rejection),
}

impl Strictness {
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }

    /// Resolve an outcome into the slot to append
    #[inline]
    pub fn resolve<T>(self, outcome: Outcome<T>) -> Result<Option<T>, Violation> {
        match (self, outcome) {
            (_, Outcome::Null) => Ok(None),
            (_, Outcome::Exact(v)) => Ok(Some(v)),
            (Self::NonStrict, Outcome::Lossy(v)) => Ok(Some(v)),
            (Self::NonStrict, Outcome::Unrepresentable(_)) => Ok(None),
            (Self::Strict, Outcome::Lossy(_)) => Err(Violation::Lossy),
            (Self::Strict, Outcome::Unrepresentable(r)) => Err(Violation::Rejected(r)),
        }
    }
}

impl From<bool> for Strictness {
    /// `true` selects [`Strictness::Strict`]
    fn from(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::NonStrict }
    }
}
