//! Comparison of table lookups against a linear scan over the same records.
use crate::chained::ChainedHashTable;
use crate::id::generate_identifier;
use log::{debug, info};
use rand::Rng;
use shelf_core::{HashTable, ProductRecord, ShelfError};
use std::collections::HashSet;
use std::hint::black_box;
use std::io::Write;
use std::time::Instant;

/// Average lookup time for one data size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchTiming {
    /// Number of records the array scan runs over.
    pub size: usize,
    /// Average time of a table search in microseconds.
    pub table_micros: f64,
    /// Average time of a linear scan in microseconds.
    pub array_micros: f64,
}

fn filler_record(id: String) -> ProductRecord {
    ProductRecord::new(id, "Sample", "Misc", 50.0, 10)
}

/// Time table searches against linear scans for each of `sizes`.
///
/// The records of `table` are snapshotted into an array, which is then topped up with filler
/// records until it holds `max(sizes)` entries. The filler records are inserted into `table` as
/// well. Their identifiers avoid both `existing` and the table's own records, and all of them end
/// up registered in `existing`. For each size `n` the target is the identifier
/// of the `n`-th array entry, the worst case for the scan.
///
/// Returns `None` if `table` is empty.
pub fn compare_search_performance<R: Rng>(
    table: &mut ChainedHashTable,
    rng: &mut R,
    existing: &mut HashSet<String>,
    sizes: &[usize],
    repetitions: u32,
) -> Result<Option<Vec<SearchTiming>>, ShelfError> {
    if table.is_empty() {
        return Ok(None);
    }
    let repetitions = repetitions.max(1);

    let mut array: Vec<ProductRecord> = table.iter().cloned().collect();
    existing.extend(array.iter().map(|r| r.id().to_owned()));
    let target_len = sizes.iter().copied().max().unwrap_or(0);
    while array.len() < target_len {
        let record = filler_record(generate_identifier(rng, existing));
        table.insert(record.clone())?;
        array.push(record);
    }
    debug!("Benchmarking over {} records", array.len());

    let mut timings = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let subset = &array[..size.clamp(1, array.len())];
        let target = subset[subset.len() - 1].id();

        let start = Instant::now();
        for _ in 0..repetitions {
            black_box(table.search(black_box(target))?);
        }
        let table_micros = start.elapsed().as_secs_f64() / repetitions as f64 * 1e6;

        let start = Instant::now();
        for _ in 0..repetitions {
            black_box(subset.iter().find(|r| r.id() == black_box(target)));
        }
        let array_micros = start.elapsed().as_secs_f64() / repetitions as f64 * 1e6;

        timings.push(SearchTiming {
            size,
            table_micros,
            array_micros,
        });
    }

    info!("Search performance measured for {} data sizes", timings.len());
    Ok(Some(timings))
}

/// Write `timings` as a fixed-width comparison table.
pub fn write_timings<W: Write>(out: &mut W, timings: &[SearchTiming]) -> std::io::Result<()> {
    const RULE: &str = "---------------------------------------------------";

    writeln!(out, "Performance Comparison Results")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{:<10}{:>20}{:>20}", "Data Size", "Hash Table (µs)", "Array (µs)")?;
    writeln!(out, "{RULE}")?;
    for timing in timings {
        writeln!(
            out,
            "{:<10}{:>20.4}{:>20.4}",
            timing.size, timing.table_micros, timing.array_micros
        )?;
    }
    writeln!(out, "{RULE}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::seed_sample_data;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use shelf_testing::check_placement;

    #[test]
    fn test_empty_table() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let mut table = ChainedHashTable::with_capacity(10).unwrap();

        let timings =
            compare_search_performance(&mut table, &mut rng, &mut HashSet::new(), &[10], 5)
                .unwrap();

        assert!(timings.is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn test_tops_up_table() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut table = ChainedHashTable::with_capacity(100).unwrap();
        let mut existing = HashSet::new();
        seed_sample_data(&mut table, &mut rng, &mut existing, 30).unwrap();

        let sizes = [10, 50, 100, 200];
        let timings = compare_search_performance(&mut table, &mut rng, &mut existing, &sizes, 3)
            .unwrap()
            .unwrap();

        assert_eq!(timings.iter().map(|t| t.size).collect::<Vec<_>>(), sizes);
        assert!(timings.iter().all(|t| t.table_micros >= 0.0 && t.array_micros >= 0.0));
        assert_eq!(table.len(), 200);
        assert_eq!(existing.len(), 200);
        check_placement(&table);
    }

    #[test]
    fn test_top_up_never_overwrites_records() {
        let mut table = ChainedHashTable::with_capacity(100).unwrap();
        let mut issued = HashSet::new();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let originals: Vec<ProductRecord> = (0..5)
            .map(|_| {
                let id = generate_identifier(&mut rng, &mut issued);
                ProductRecord::new(id, "Baby Soap", "Bathing", 12.5, 40)
            })
            .collect();
        for record in &originals {
            table.insert(record.clone()).unwrap();
        }

        // Same stream as above and an accumulator that knows none of the table's identifiers.
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut existing = HashSet::new();
        compare_search_performance(&mut table, &mut rng, &mut existing, &[10], 1)
            .unwrap()
            .unwrap();

        assert_eq!(table.len(), 10);
        assert_eq!(existing.len(), 10);
        for record in &originals {
            assert_eq!(table.search(record.id()).unwrap(), Some(record));
            assert!(existing.contains(record.id()));
        }
        check_placement(&table);
    }

    #[test]
    fn test_no_top_up_when_large_enough() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let mut table = ChainedHashTable::with_capacity(10).unwrap();
        let mut existing = HashSet::new();
        seed_sample_data(&mut table, &mut rng, &mut existing, 20).unwrap();

        let timings = compare_search_performance(&mut table, &mut rng, &mut existing, &[5, 20], 1)
            .unwrap()
            .unwrap();

        assert_eq!(timings.len(), 2);
        assert_eq!(table.len(), 20);
    }

    #[test]
    fn test_write_timings() {
        let timings = [SearchTiming {
            size: 10,
            table_micros: 0.25,
            array_micros: 1.5,
        }];
        let mut out = Vec::new();
        write_timings(&mut out, &timings).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Performance Comparison Results");
        assert_eq!(lines[4], format!("{:<10}{:>20}{:>20}", 10, "0.2500", "1.5000"));
        assert_eq!(lines.len(), 6);
    }
}
