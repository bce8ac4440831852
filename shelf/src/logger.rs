//! Process-wide logger setup.
use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Initialize `env_logger` at `level`, `RUST_LOG` takes precedence when set.
///
/// Only the first call has an effect.
pub fn initialize_logger(level: LevelFilter) {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("shelf", level)
            .format_timestamp_millis()
            .parse_default_env();

        // Tests may have installed a logger already.
        let _ = builder.try_init();
    });
}
