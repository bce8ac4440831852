//! Fixed-capacity hash table with separate chaining.
mod core;
pub use self::core::*;
mod ctors;
mod enumerate;
mod hash_table;
