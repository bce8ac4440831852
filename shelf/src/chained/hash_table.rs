//! Implements [`HashTable`] for [`ChainedHashTable`].
use crate::chained::ChainedHashTable;
use log::debug;
use shelf_core::{HashTable, Hasher, ProductRecord, RecordUpdate, ShelfError};

impl<H: Hasher<str>> ChainedHashTable<H> {
    /// Compute the bucket index of `id`.
    ///
    /// # Errors
    ///
    /// - [`ShelfError::MalformedIdentifier`] if `id` has no numeric payload.
    #[inline]
    pub fn bucket_index(&self, id: &str) -> Result<usize, ShelfError> {
        Ok(self.hasher.hash(id)? as usize)
    }

    /// Get the fixed number of buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn search_mut(&mut self, id: &str) -> Result<Option<&mut ProductRecord>, ShelfError> {
        let bucket_idx = self.bucket_index(id)?;
        Ok(self.buckets[bucket_idx].iter_mut().find(|r| r.id() == id))
    }
}

impl<H: Hasher<str>> HashTable<H> for ChainedHashTable<H> {
    fn hasher(&self) -> &H {
        &self.hasher
    }

    fn insert(&mut self, record: ProductRecord) -> Result<(), ShelfError> {
        let bucket_idx = self.bucket_index(record.id())?;
        let chain = &mut self.buckets[bucket_idx];

        if let Some(existing) = chain.iter_mut().find(|r| r.id() == record.id()) {
            debug!("Updating {} in bucket {}", record.id(), bucket_idx);
            existing.overwrite_with(record);
            return Ok(());
        }

        debug!("Inserting {} into bucket {}", record.id(), bucket_idx);
        chain.push(record);
        self.len += 1;
        Ok(())
    }

    fn search(&self, id: &str) -> Result<Option<&ProductRecord>, ShelfError> {
        let bucket_idx = self.bucket_index(id)?;
        Ok(self.buckets[bucket_idx].iter().find(|r| r.id() == id))
    }

    fn edit(&mut self, id: &str, update: RecordUpdate) -> Result<bool, ShelfError> {
        match self.search_mut(id)? {
            Some(record) => {
                debug!("Editing {}: {:?}", id, update);
                record.apply(update);
                Ok(true)
            }
            None => {
                debug!("Nothing to edit, {} is absent", id);
                Ok(false)
            }
        }
    }

    fn delete(&mut self, id: &str) -> Result<bool, ShelfError> {
        let bucket_idx = self.bucket_index(id)?;
        let chain = &mut self.buckets[bucket_idx];

        match chain.iter().position(|r| r.id() == id) {
            Some(pos) => {
                // `remove` rather than `swap_remove`: the rest of the chain keeps its order.
                chain.remove(pos);
                self.len -= 1;
                debug!("Deleted {} from bucket {}", id, bucket_idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn chain(&self, bucket_idx: u32) -> &[ProductRecord] {
        &self.buckets[bucket_idx as usize]
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    fn num_collisions(&self) -> usize {
        self.buckets.iter().map(|c| c.len().saturating_sub(1)).sum()
    }
}
