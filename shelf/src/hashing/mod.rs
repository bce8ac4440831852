//! Hash functions that place identifiers into buckets.
mod suffix_mod;
pub use suffix_mod::*;
