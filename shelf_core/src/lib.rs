//! Core trait and type declarations shared by the `shelf` workspace.
pub mod core;
pub mod error;
pub mod id;
pub mod record;

pub use crate::core::*;
pub use crate::error::*;
pub use crate::id::*;
pub use crate::record::*;
