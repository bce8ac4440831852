//! Ordered enumeration of a [`ChainedHashTable`].
//!
//! Every enumeration walks the buckets in ascending index order and each chain in insertion order,
//! so the output is fully determined by the sequence of operations applied to the table.
use crate::chained::ChainedHashTable;
use shelf_core::{Hasher, ProductRecord};
use std::io::Write;

impl<H: Hasher<str>> ChainedHashTable<H> {
    /// Iterate over the non-empty buckets together with their indices.
    pub fn occupied_buckets(&self) -> impl Iterator<Item = (usize, &[ProductRecord])> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, chain)| !chain.is_empty())
            .map(|(idx, chain)| (idx, chain.as_slice()))
    }

    /// Iterate over all records, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> + '_ {
        self.buckets.iter().flatten()
    }

    /// List the identifiers of every non-empty bucket.
    pub fn enumerate_by_bucket(&self) -> Vec<(usize, Vec<&str>)> {
        self.occupied_buckets()
            .map(|(idx, chain)| (idx, chain.iter().map(|r| r.id()).collect()))
            .collect()
    }

    /// Flatten the table into a vector of records.
    pub fn all_records(&self) -> Vec<&ProductRecord> {
        self.iter().collect()
    }

    /// Write the identifiers of every bucket, empty ones included, one bucket per line.
    pub fn write_ids<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "===== PRODUCT IDS IN HASH TABLE =====")?;
        self.write_buckets(out, |r| r.id().to_owned())
    }

    /// Write the full records of every bucket, empty ones included, one bucket per line.
    pub fn write_items<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "===== INVENTORY RECORDS =====")?;
        self.write_buckets(out, |r| r.to_string())
    }

    fn write_buckets<W, F>(&self, out: &mut W, render: F) -> std::io::Result<()>
    where
        W: Write,
        F: Fn(&ProductRecord) -> String,
    {
        for (idx, chain) in self.buckets.iter().enumerate() {
            if chain.is_empty() {
                writeln!(out, "Bucket {idx}: []")?;
            } else {
                let rendered: Vec<String> = chain.iter().map(&render).collect();
                writeln!(out, "Bucket {idx}: {}", rendered.join(", "))?;
            }
        }
        Ok(())
    }
}
