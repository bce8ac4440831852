//! Declares core types for [`ChainedHashTable`].
use crate::hashing::SuffixModHasher;
use shelf_core::{Hasher, ProductRecord};
use std::fmt::{Debug, Formatter};

/// A chain of records that share one bucket index, kept in insertion order.
pub type Chain = Vec<ProductRecord>;

/// Hash table of inventory records based on separate chaining.
///
/// # Guarantees
///
/// - The number of buckets is fixed at construction, the table never rehashes.
/// - A record always sits in the bucket its identifier hashes to.
/// - An identifier is stored at most once: inserting a known identifier updates the record.
/// - Records of one bucket keep their insertion order, removing a record doesn't reorder the rest.
///
/// Lookups cost O(1 + chain length). Nothing in the table keeps the load factor in check, that's
/// up to the caller choosing the capacity.
///
/// # Examples
///
/// ```rust
/// use shelf::chained::ChainedHashTable;
/// use shelf_core::{HashTable, ProductRecord, RecordUpdate};
///
/// let mut table = ChainedHashTable::with_capacity(100).unwrap();
/// table.insert(ProductRecord::new("P00000100", "Baby Wipes", "Diapering", 8.9, 30)).unwrap();
/// table.insert(ProductRecord::new("P00000200", "Baby Bib", "Clothing", 5.0, 12)).unwrap();
///
/// // Both identifiers land in bucket 0.
/// assert_eq!(table.chain(0).len(), 2);
///
/// assert!(table.edit("P00000200", RecordUpdate::new().quantity(5)).unwrap());
/// assert_eq!(table.search("P00000200").unwrap().map(|r| r.quantity()), Some(5));
/// ```
pub struct ChainedHashTable<H: Hasher<str> = SuffixModHasher> {
    pub(super) hasher: H,
    pub(super) buckets: Box<[Chain]>,
    pub(super) len: usize,
}

impl<H> Debug for ChainedHashTable<H>
where
    H: Hasher<str> + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("hasher", &self.hasher)
            .field("len", &self.len)
            .field("buckets", &self.buckets)
            .finish()
    }
}
