//! Append-only typed builder with a parallel validity sequence

/// Per-slot validity flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validity {
    flags: Vec<bool>,
    null_count: usize,
}

impl Validity {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            flags: Vec::with_capacity(capacity),
            null_count: 0,
        }
    }

    /// All-valid flags of the given length
    pub fn all_valid(len: usize) -> Self {
        Self {
            flags: vec![true; len],
            null_count: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, valid: bool) {
        self.flags.push(valid);
        self.null_count += usize::from(!valid);
    }

    pub fn append(&mut self, other: Self) {
        self.flags.extend(other.flags);
        self.null_count += other.null_count;
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.null_count
    }

    /// `false` for null slots and for indices past the end
    #[inline]
    pub fn is_valid(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }
}

impl FromIterator<bool> for Validity {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut validity = Self::default();
        for valid in iter {
            validity.push(valid);
        }
        validity
    }
}

/// Accumulates coerced payloads and their validity in input order.
///
/// Null slots store `T::default()` so the payload vector always has one entry
/// per slot. There is no rollback; an aborted build just drops the builder.
#[derive(Debug, Clone)]
pub struct ColumnBuilder<T> {
    values: Vec<T>,
    validity: Validity,
}

impl<T: Default> ColumnBuilder<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Builder pre-sized for `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            validity: Validity::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn append_value(&mut self, value: T) {
        self.values.push(value);
        self.validity.push(true);
    }

    #[inline]
    pub fn append_null(&mut self) {
        self.values.push(T::default());
        self.validity.push(false);
    }

    #[inline]
    pub fn append_option(&mut self, value: Option<T>) {
        match value {
            Some(v) => self.append_value(v),
            None => self.append_null(),
        }
    }

    /// Move all slots of `other` onto the end of this builder
    pub fn append_builder(&mut self, other: Self) {
        self.values.extend(other.values);
        self.validity.append(other.validity);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.validity.null_count()
    }

    pub fn finish(self) -> (Vec<T>, Validity) {
        (self.values, self.validity)
    }
}

impl<T: Default> Default for ColumnBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
