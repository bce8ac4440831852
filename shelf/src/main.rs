//! `shelf` - interactive baby-product inventory backed by a chained hash table.
//!
//! # Usage
//!
//! ```bash
//! # Default session: 100 buckets, 30 random sample products
//! shelf
//!
//! # Reproducible session with a larger table and a custom export location
//! shelf --capacity 1009 --samples 200 --seed 42 --export-path ./out/products.csv
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use shelf::config::{
    Config, DEFAULT_BENCHMARK_REPETITIONS, DEFAULT_CAPACITY, DEFAULT_EXPORT_PATH,
    DEFAULT_SAMPLE_COUNT,
};
use shelf::logger::initialize_logger;
use shelf::menu::Session;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Baby product inventory backed by a fixed-size chained hash table")]
#[command(version)]
struct Cli {
    /// Number of hash table buckets
    #[arg(short = 'c', long, default_value_t = DEFAULT_CAPACITY)]
    capacity: u32,

    /// Number of random sample products inserted on startup
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Seed for reproducible identifiers and sample data
    #[arg(long)]
    seed: Option<u64>,

    /// Destination of the CSV export
    #[arg(short = 'o', long, default_value = DEFAULT_EXPORT_PATH)]
    export_path: PathBuf,

    /// Searches per data size in the performance comparison
    #[arg(long, default_value_t = DEFAULT_BENCHMARK_REPETITIONS)]
    repetitions: u32,

    /// Verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            capacity: cli.capacity,
            sample_count: cli.samples,
            export_path: cli.export_path,
            seed: cli.seed,
            benchmark_repetitions: cli.repetitions,
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logger(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    debug!("Starting with {:?}", cli);

    let config = Config::from(cli);
    let mut session = Session::new(config).context("Failed to set up the inventory")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    session
        .run(&mut stdin.lock(), &mut stdout.lock())
        .context("Inventory session failed")?;
    Ok(())
}
