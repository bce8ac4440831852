//! Error definitions.
use thiserror::Error;

/// Project-wise error type.
#[derive(Error, Debug)]
pub enum ShelfError {
    /// The part of an identifier after its one-character prefix is not an unsigned integer, so
    /// the identifier can't be placed into a bucket.
    #[error("Malformed product identifier {0:?}: expected a prefix and an unsigned integer.")]
    MalformedIdentifier(String),
    /// A hash table was requested with zero buckets.
    #[error("Hash table capacity must be greater than 0.")]
    ZeroCapacity,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
