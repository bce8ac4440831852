pub mod chained;
pub mod config;
pub mod export;
pub mod hashing;
pub mod id;
pub mod logger;
pub mod menu;
pub mod performance;
pub mod sample;
