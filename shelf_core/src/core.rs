//! Core trait declarations for the whole project.
use crate::error::ShelfError;
use crate::record::{ProductRecord, RecordUpdate};

/// Maps keys of a specific type onto a fixed range of bucket indices.
///
/// Differs from [`core::hash::Hasher`] in the way that the output is already reduced to
/// `[0, num_buckets)` and that hashing may fail: keys are structured and a key that doesn't have
/// the expected structure has no bucket at all.
pub trait Hasher<T: ?Sized> {
    /// Create a hasher that distributes keys over `num_buckets` buckets.
    ///
    /// # Errors
    ///
    /// - [`ShelfError::ZeroCapacity`] if `num_buckets` is 0.
    fn with_num_buckets(num_buckets: u32) -> Result<Self, ShelfError>
    where
        Self: Sized;

    /// Get the number of buckets (exclusive upper bound of the hash value).
    fn num_buckets(&self) -> u32;

    /// Hash the given `value` into a bucket index.
    ///
    /// Must be deterministic: the same value always lands in the same bucket.
    fn hash(&self, value: &T) -> Result<u32, ShelfError>;
}

/// A fixed-capacity hash table of [`ProductRecord`]s keyed by their identifiers.
pub trait HashTable<H: Hasher<str>> {
    /// Get the hasher that places identifiers into buckets.
    fn hasher(&self) -> &H;

    /// Insert `record`, or overwrite the non-key fields of the record with the same identifier.
    fn insert(&mut self, record: ProductRecord) -> Result<(), ShelfError>;

    /// Get the record with the given identifier.
    fn search(&self, id: &str) -> Result<Option<&ProductRecord>, ShelfError>;

    /// Apply `update` to the record with the given identifier, returns `false` if it's absent.
    fn edit(&mut self, id: &str, update: RecordUpdate) -> Result<bool, ShelfError>;

    /// Remove the record with the given identifier, returns `false` if it's absent.
    fn delete(&mut self, id: &str) -> Result<bool, ShelfError>;

    /// Get the records stored in the bucket `bucket_idx`, in insertion order.
    ///
    /// # Panics
    ///
    /// - If `bucket_idx` is not less than the number of buckets.
    fn chain(&self, bucket_idx: u32) -> &[ProductRecord];

    /// Get the number of records in the table.
    fn len(&self) -> usize;

    /// Check if the table is empty.
    fn is_empty(&self) -> bool;

    /// Get the load factor of the table.
    fn load_factor(&self) -> f64;

    /// Get the number of collisions in the table.
    fn num_collisions(&self) -> usize;
}
