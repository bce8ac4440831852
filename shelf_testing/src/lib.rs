#![allow(dead_code)]

pub mod generate;
pub use generate::*;

pub mod table;
pub use table::*;
