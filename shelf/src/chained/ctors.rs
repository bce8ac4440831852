//! Implements constructors for [`ChainedHashTable`].
use crate::chained::{Chain, ChainedHashTable};
use crate::hashing::SuffixModHasher;
use log::debug;
use shelf_core::{Hasher, ShelfError};

impl<H: Hasher<str>> ChainedHashTable<H> {
    /// Create an empty table with `num_buckets` buckets hashed by `H`.
    ///
    /// # Errors
    ///
    /// - [`ShelfError::ZeroCapacity`] if `num_buckets` is 0.
    pub fn new(num_buckets: u32) -> Result<Self, ShelfError> {
        Ok(Self::from_hasher(H::with_num_buckets(num_buckets)?))
    }

    /// Create an empty table around an already constructed `hasher`.
    pub fn from_hasher(hasher: H) -> Self {
        let num_buckets = hasher.num_buckets() as usize;
        debug!("Creating a chained hash table with {} buckets", num_buckets);

        let buckets: Box<[Chain]> = (0..num_buckets).map(|_| Chain::new()).collect();
        Self {
            hasher,
            buckets,
            len: 0,
        }
    }
}

impl ChainedHashTable<SuffixModHasher> {
    /// Create an empty table with `capacity` buckets keyed by identifier payloads.
    pub fn with_capacity(capacity: u32) -> Result<Self, ShelfError> {
        Self::new(capacity)
    }
}
