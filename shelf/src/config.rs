//! Runtime configuration of an inventory session.
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::path::PathBuf;

pub const DEFAULT_CAPACITY: u32 = 100;
pub const DEFAULT_SAMPLE_COUNT: usize = 30;
pub const DEFAULT_EXPORT_PATH: &str = "baby_products.csv";
pub const DEFAULT_BENCHMARK_SIZES: [usize; 6] = [10, 50, 100, 200, 500, 1000];
pub const DEFAULT_BENCHMARK_REPETITIONS: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of buckets of the table, fixed for the whole session.
    pub capacity: u32,
    /// Number of synthetic records inserted on startup.
    pub sample_count: usize,
    /// Where the CSV export is written.
    pub export_path: PathBuf,
    /// Seed of the session RNG, drawn from the OS when absent.
    pub seed: Option<u64>,
    pub benchmark_sizes: Vec<usize>,
    pub benchmark_repetitions: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            sample_count: DEFAULT_SAMPLE_COUNT,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            seed: None,
            benchmark_sizes: DEFAULT_BENCHMARK_SIZES.to_vec(),
            benchmark_repetitions: DEFAULT_BENCHMARK_REPETITIONS,
        }
    }
}

impl Config {
    /// Build the session RNG, reproducible when a seed is configured.
    pub fn rng(&self) -> ChaCha20Rng {
        match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_os_rng(),
        }
    }
}
