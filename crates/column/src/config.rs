//! Fallback construction options

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::policy::Strictness;

/// Options for [`build_column`](crate::fallback::build_column)
///
/// With the `serde` feature, missing fields fall back to their defaults so a
/// partial document such as `{"strictness": "non_strict"}` loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FallbackOptions {
    /// Strict aborts on lossy or unrepresentable values, non-strict nulls them
    pub strictness: Strictness,
    /// Chunked parallel coercion of slice input
    pub parallel: ParallelOptions,
}

impl FallbackOptions {
    pub fn strict() -> Self {
        Self::default().with_strictness(Strictness::Strict)
    }

    pub fn non_strict() -> Self {
        Self::default().with_strictness(Strictness::NonStrict)
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn with_parallel(mut self, parallel: ParallelOptions) -> Self {
        self.parallel = parallel;
        self
    }

    /// Force sequential construction
    pub fn sequential(mut self) -> Self {
        self.parallel.enabled = false;
        self
    }
}

/// When and how slice input is split across the rayon pool.
///
/// Ignored when the crate is built without the `parallel` feature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParallelOptions {
    pub enabled: bool,
    /// Inputs shorter than this are coerced sequentially
    pub min_len: usize,
    /// Values per chunk; zero is treated as one
    pub chunk_size: usize,
}

impl ParallelOptions {
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Whether an input of `len` values should be split
    pub fn applies_to(&self, len: usize) -> bool {
        self.enabled && len >= self.min_len && len > self.effective_chunk_size()
    }

    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.max(1)
    }
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            min_len: 65_536,
            chunk_size: 16_384,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FallbackOptions::default();
        assert_eq!(options.strictness, Strictness::Strict);
        assert!(options.parallel.enabled);
        assert_eq!(options.parallel.min_len, 65_536);
        assert_eq!(options.parallel.chunk_size, 16_384);
    }

    #[test]
    fn test_applies_to() {
        let parallel = ParallelOptions::default().with_min_len(10).with_chunk_size(4);
        assert!(!parallel.applies_to(9));
        assert!(parallel.applies_to(10));
        assert!(!FallbackOptions::default().sequential().parallel.applies_to(1 << 20));

        let single_chunk = ParallelOptions::default().with_min_len(0).with_chunk_size(100);
        assert!(!single_chunk.applies_to(100));
        assert_eq!(ParallelOptions::default().with_chunk_size(0).effective_chunk_size(), 1);
    }
}
