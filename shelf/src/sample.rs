//! Seeding a table with synthetic baby-product records.
use crate::chained::ChainedHashTable;
use crate::id::generate_identifier;
use log::info;
use rand::Rng;
use shelf_core::{HashTable, ProductRecord, ShelfError};
use std::collections::HashSet;

/// Product names available for seeding, grouped by category.
pub const CATALOG: [(&str, [&str; 3]); 5] = [
    ("Diapering", ["Baby Diaper", "Diaper Cream", "Baby Wipes"]),
    ("Feeding", ["Baby Milk", "Feeding Bottle", "Baby Spoon Set"]),
    ("Bathing", ["Baby Shampoo", "Baby Soap", "Baby Lotion"]),
    ("Clothing", ["Baby Romper", "Baby Blanket", "Baby Bib"]),
    ("Healthcare", ["Baby Thermometer", "Baby Oil", "Baby Powder"]),
];

const MIN_PRICE: f64 = 10.0;
const MAX_PRICE: f64 = 150.0;
const MIN_QUANTITY: i64 = 10;
const MAX_QUANTITY: i64 = 100;

/// Draw a single record with a fresh identifier from `existing`.
pub fn sample_record<R: Rng>(rng: &mut R, existing: &mut HashSet<String>) -> ProductRecord {
    let (category, names) = CATALOG[rng.random_range(0..CATALOG.len())];
    let name = names[rng.random_range(0..names.len())];
    let price = (rng.random_range(MIN_PRICE..=MAX_PRICE) * 100.0).round() / 100.0;
    let quantity = rng.random_range(MIN_QUANTITY..=MAX_QUANTITY);
    let id = generate_identifier(rng, existing);
    ProductRecord::new(id, name, category, price, quantity)
}

/// Insert `count` random records into `table`, registering their identifiers in `existing`.
pub fn seed_sample_data<R: Rng>(
    table: &mut ChainedHashTable,
    rng: &mut R,
    existing: &mut HashSet<String>,
    count: usize,
) -> Result<(), ShelfError> {
    for _ in 0..count {
        table.insert(sample_record(rng, existing))?;
    }
    info!("{} sample baby products inserted", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use shelf_testing::check_placement;

    #[test]
    fn test_seed_sample_data() {
        let mut rng = ChaCha20Rng::seed_from_u64(2024);
        let mut table = ChainedHashTable::with_capacity(100).unwrap();
        let mut existing = HashSet::new();

        seed_sample_data(&mut table, &mut rng, &mut existing, 30).unwrap();

        assert_eq!(table.len(), 30);
        assert_eq!(existing.len(), 30);
        check_placement(&table);

        for record in table.iter() {
            assert!(existing.contains(record.id()));
            assert!((MIN_PRICE..=MAX_PRICE).contains(&record.price()), "Record: {}", record);
            assert!(
                (MIN_QUANTITY..=MAX_QUANTITY).contains(&record.quantity()),
                "Record: {}",
                record
            );
            assert_eq!((record.price() * 100.0).round() / 100.0, record.price());

            let (_, names) = CATALOG
                .iter()
                .find(|(category, _)| *category == record.category())
                .unwrap();
            assert!(names.contains(&record.name()), "Record: {}", record);
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let seed = |table: &mut ChainedHashTable| {
            let mut rng = ChaCha20Rng::seed_from_u64(9);
            seed_sample_data(table, &mut rng, &mut HashSet::new(), 10).unwrap();
        };
        let mut first = ChainedHashTable::with_capacity(16).unwrap();
        let mut second = ChainedHashTable::with_capacity(16).unwrap();
        seed(&mut first);
        seed(&mut second);

        assert_eq!(first.all_records(), second.all_records());
    }
}
