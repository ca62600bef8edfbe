//! Benchmark profiles for the gol simulation engine.
//!
//! - [`reference_batch`]: 1000 grids of 20x20, the largest batch the
//!   default [`BatchConfig`] limits accept
//! - [`stress_config`]: 8 grids of 316x316 (~100K cells each)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gol_engine::{BatchConfig, ConfigError, SimulationBatch};

/// Side length of the stress-profile grids.
pub const STRESS_SIDE: i32 = 316;

/// Configuration for the reference batch: the default limits at their
/// maximum.
pub fn reference_config(seed: u64) -> BatchConfig {
    let defaults = BatchConfig::default();
    BatchConfig {
        rows: defaults.max_rows,
        columns: defaults.max_columns,
        count: defaults.max_count,
        seed: Some(seed),
        ..defaults
    }
}

/// Configuration for a few large grids, with the limits raised to fit.
pub fn stress_config(seed: u64) -> BatchConfig {
    BatchConfig {
        rows: STRESS_SIDE,
        columns: STRESS_SIDE,
        count: 8,
        seed: Some(seed),
        max_rows: STRESS_SIDE,
        max_columns: STRESS_SIDE,
        ..BatchConfig::default()
    }
}

/// Build the reference batch.
pub fn reference_batch(seed: u64) -> Result<SimulationBatch, ConfigError> {
    SimulationBatch::from_config(&reference_config(seed))
}

/// Build the stress batch.
pub fn stress_batch(seed: u64) -> Result<SimulationBatch, ConfigError> {
    SimulationBatch::from_config(&stress_config(seed))
}
