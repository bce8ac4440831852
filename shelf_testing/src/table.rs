//! Utilities for testing hash table implementations.
use crate::generate::{generate_records, NumParams, RecordParams};
use rand::Rng;
use shelf_core::{suffix_mod, HashTable, Hasher, ProductRecord, RecordUpdate};
use std::collections::HashSet;

/// Verifies that every record sits in the bucket its identifier hashes to, that no identifier is
/// stored twice, and that the chain lengths add up to the table's length.
///
/// # Panics
///
/// - If any of the above doesn't hold.
pub fn check_placement<H: Hasher<str>, T: HashTable<H>>(table: &T) {
    let mut seen = HashSet::new();
    let mut total = 0;

    for bucket_idx in 0..table.hasher().num_buckets() {
        for record in table.chain(bucket_idx) {
            let hash = table.hasher().hash(record.id()).unwrap();
            assert_eq!(hash, bucket_idx, "Record {:?} is in a wrong bucket", record);
            assert!(seen.insert(record.id().to_owned()), "Duplicate record {:?}", record);
            total += 1;
        }
    }

    assert_eq!(total, table.len(), "Chain lengths don't add up to the table length");
}

/// Exercises the whole public contract of a table against a model.
///
/// The table is filled with generated records whose payloads are squeezed into a few multiples of
/// the capacity so that chains get long, then a share of the records is re-inserted, edited and
/// deleted. Placement is re-checked after each phase.
///
/// # Parameters
///
/// - `rng`: A random number generator.
/// - `cons`: Builds an empty table with the given number of buckets.
/// - `num_buckets`: The number of buckets to build the table with.
/// - `num_records`: How many distinct records to insert.
pub fn check_table_contract<R, H, T, C>(
    rng: &mut R,
    cons: C,
    num_buckets: u32,
    num_records: usize,
) where
    R: Rng,
    H: Hasher<str>,
    T: HashTable<H>,
    C: Fn(u32) -> T,
{
    let mut table = cons(num_buckets);
    assert!(table.is_empty());
    assert_eq!(table.hasher().num_buckets(), num_buckets);

    let span = (num_buckets as u64 * 4).max(num_records as u64 * 2);
    let params = RecordParams {
        payload: NumParams::new(0, span - 1),
        ..Default::default()
    };
    let records = generate_records(rng, &params, num_records);

    for (i, record) in records.iter().enumerate() {
        table.insert(record.clone()).unwrap();
        assert_eq!(table.len(), i + 1);
    }
    check_placement(&table);

    for record in &records {
        let expected = suffix_mod(record.id(), num_buckets).unwrap();
        assert_eq!(table.hasher().hash(record.id()).unwrap(), expected);
        assert_eq!(table.search(record.id()).unwrap(), Some(record));
    }

    // Re-inserting a known identifier is an update.
    let mut expected: Vec<ProductRecord> = records.clone();
    for record in expected.iter_mut().step_by(3) {
        let replacement = ProductRecord::new(record.id(), "Replaced", "Upsert", 1.25, 7);
        table.insert(replacement.clone()).unwrap();
        *record = replacement;
    }
    assert_eq!(table.len(), num_records);
    check_placement(&table);

    for record in expected.iter_mut().skip(1).step_by(3) {
        let update = RecordUpdate::new().quantity(rng.random_range(0..100));
        assert!(table.edit(record.id(), update.clone()).unwrap());
        record.apply(update);
    }
    for record in &expected {
        assert_eq!(table.search(record.id()).unwrap(), Some(record));
    }

    let mut deleted = 0;
    for record in expected.iter().step_by(2) {
        assert!(table.delete(record.id()).unwrap());
        assert!(!table.delete(record.id()).unwrap());
        assert_eq!(table.search(record.id()).unwrap(), None);
        assert!(!table.edit(record.id(), RecordUpdate::new().price(0.0)).unwrap());
        deleted += 1;
    }
    assert_eq!(table.len(), num_records - deleted);
    check_placement(&table);

    for record in expected.iter().skip(1).step_by(2) {
        assert_eq!(table.search(record.id()).unwrap(), Some(record));
    }
}

/// Generates contract tests for a table type, one module per named capacity.
///
/// # Example
///
/// ```ignore
/// generate_table_tests!(ChainedHashTable::<SuffixModHasher>::new, single => 1, hundred => 100);
/// ```
#[macro_export]
macro_rules! generate_table_tests {
    ($cons:expr, $($name:ident => $num_buckets:expr),+ $(,)?) => {
        $(
            mod $name {
                use super::*;

                #[test]
                fn test_table_contract() {
                    use rand::SeedableRng;
                    use rand_chacha::ChaCha20Rng;

                    let mut rng = ChaCha20Rng::from_os_rng();
                    $crate::table::check_table_contract(
                        &mut rng,
                        |num_buckets| ($cons)(num_buckets).unwrap(),
                        $num_buckets,
                        300,
                    );
                }

                #[test]
                fn test_table_contract_sparse() {
                    use rand::SeedableRng;
                    use rand_chacha::ChaCha20Rng;

                    let mut rng = ChaCha20Rng::seed_from_u64($num_buckets as u64);
                    $crate::table::check_table_contract(
                        &mut rng,
                        |num_buckets| ($cons)(num_buckets).unwrap(),
                        $num_buckets,
                        3,
                    );
                }
            }
        )+
    };
}
pub use generate_table_tests;
