//! Batch configuration, validation, and error types.
//!
//! [`BatchConfig`] is the input for building a populated batch of random
//! grids. [`validate()`](BatchConfig::validate) checks it against the
//! interactive limits; the grid type itself accepts any non-negative size.

use gol_core::GridError;
use thiserror::Error;

use crate::batch::MAX_SELECTABLE;

/// Default upper bound on rows per grid.
pub const DEFAULT_MAX_ROWS: i32 = 20;
/// Default upper bound on columns per grid.
pub const DEFAULT_MAX_COLUMNS: i32 = 20;
/// Default upper bound on grids per batch.
pub const DEFAULT_MAX_COUNT: usize = 1000;

// ── BatchConfig ────────────────────────────────────────────────────

/// Parameters for creating a batch of randomly seeded grids.
///
/// All grids in a configured batch share one shape. `seed = None` draws
/// the RNG seed from OS entropy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Rows per grid. Default: 10.
    pub rows: i32,
    /// Columns per grid. Default: 10.
    pub columns: i32,
    /// Number of grids. Default: 1.
    pub count: usize,
    /// RNG seed for reproducible batches. Default: `None`.
    pub seed: Option<u64>,
    /// Largest accepted `rows`. Default: 20.
    pub max_rows: i32,
    /// Largest accepted `columns`. Default: 20.
    pub max_columns: i32,
    /// Largest accepted `count`. Default: 1000.
    pub max_count: usize,
    /// Largest display selection. Default: 8, never above
    /// [`MAX_SELECTABLE`].
    pub max_selectable: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
            count: 1,
            seed: None,
            max_rows: DEFAULT_MAX_ROWS,
            max_columns: DEFAULT_MAX_COLUMNS,
            max_count: DEFAULT_MAX_COUNT,
            max_selectable: MAX_SELECTABLE,
        }
    }
}

impl BatchConfig {
    /// Check every field against its bound.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("rows", i64::from(self.rows), 1, i64::from(self.max_rows))?;
        check_range(
            "columns",
            i64::from(self.columns),
            1,
            i64::from(self.max_columns),
        )?;
        check_range("count", self.count as i64, 1, self.max_count as i64)?;
        if self.max_selectable == 0 || self.max_selectable > MAX_SELECTABLE {
            return Err(ConfigError::InvalidSelectionLimit {
                value: self.max_selectable,
                max: MAX_SELECTABLE,
            });
        }
        Ok(())
    }
}

fn check_range(name: &'static str, value: i64, min: i64, max: i64) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`BatchConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A numeric parameter is outside its accepted range.
    #[error("{name} must be in {min}..={max} (got {value})")]
    OutOfRange {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// `max_selectable` is zero or above the hard limit.
    #[error("max_selectable must be in 1..={max} (got {value})")]
    InvalidSelectionLimit {
        /// The rejected value.
        value: usize,
        /// Hard upper bound.
        max: usize,
    },
    /// A grid could not be built with the configured shape.
    #[error("grid shape rejected: {0}")]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(BatchConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_rows_rejected() {
        let config = BatchConfig {
            rows: 0,
            ..BatchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                name: "rows",
                value: 0,
                min: 1,
                max: 20
            })
        );
    }

    #[test]
    fn columns_above_limit_rejected() {
        let config = BatchConfig {
            columns: 21,
            ..BatchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                name: "columns",
                ..
            })
        ));
    }

    #[test]
    fn raised_limits_accept_larger_grids() {
        let config = BatchConfig {
            rows: 200,
            columns: 300,
            max_rows: 500,
            max_columns: 500,
            ..BatchConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn count_bounds_enforced() {
        for count in [0, 1001] {
            let config = BatchConfig {
                count,
                ..BatchConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::OutOfRange { name: "count", .. })
            ));
        }
    }

    #[test]
    fn selection_limit_capped() {
        let config = BatchConfig {
            max_selectable: 9,
            ..BatchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSelectionLimit { value: 9, max: 8 })
        );
    }
}
