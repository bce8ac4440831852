//! Implements [`Hasher`] for identifiers by reducing their numeric payload modulo the number of
//! buckets.
//!
//! Payloads aren't mixed: `P00000100` and `P00000200` share bucket 0 of a 100-bucket table.
use shelf_core::{suffix_mod, Hasher, ShelfError};

/// Hasher that maps `"P12345678"` to `12345678 % num_buckets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixModHasher {
    num_buckets: u32,
}

impl Hasher<str> for SuffixModHasher {
    fn with_num_buckets(num_buckets: u32) -> Result<Self, ShelfError> {
        if num_buckets == 0 {
            return Err(ShelfError::ZeroCapacity);
        }
        Ok(Self { num_buckets })
    }

    #[inline]
    fn num_buckets(&self) -> u32 {
        self.num_buckets
    }

    #[inline]
    fn hash(&self, value: &str) -> Result<u32, ShelfError> {
        suffix_mod(value, self.num_buckets)
    }
}
