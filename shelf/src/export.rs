//! CSV export of the bucket layout of a table.
//!
//! The file has a `Table Index,Product IDs` header and one row per non-empty bucket, the second
//! column holding the bucket's identifiers in chain order joined with `", "`.
use crate::chained::ChainedHashTable;
use log::info;
use shelf_core::{Hasher, ShelfError};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

const HEADER: [&str; 2] = ["Table Index", "Product IDs"];

/// Write the bucket layout of `table` as CSV into `writer`.
///
/// Returns whether the table had any record. The header is written either way.
pub fn write_csv<H: Hasher<str>, W: Write>(
    table: &ChainedHashTable<H>,
    writer: W,
) -> Result<bool, ShelfError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER).map_err(io::Error::from)?;

    let mut any = false;
    for (bucket_idx, ids) in table.enumerate_by_bucket() {
        any = true;
        out.write_record([bucket_idx.to_string(), ids.join(", ")])
            .map_err(io::Error::from)?;
    }
    out.flush()?;
    Ok(any)
}

/// Export the bucket layout of `table` into the file at `path`.
///
/// Nothing is created when the table is empty, in which case `Ok(false)` is returned.
pub fn export_csv<H: Hasher<str>, P: AsRef<Path>>(
    table: &ChainedHashTable<H>,
    path: P,
) -> Result<bool, ShelfError> {
    let path = path.as_ref();
    if table.occupied_buckets().next().is_none() {
        info!("No products in the hash table, skipping export to {}", path.display());
        return Ok(false);
    }

    write_csv(table, File::create(path)?)?;
    info!("Exported product IDs grouped by table index to {}", path.display());
    Ok(true)
}
