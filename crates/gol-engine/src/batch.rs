//! Lockstep batch of independent grids.
//!
//! [`SimulationBatch`] owns N [`Grid`]s and steps them all in a single
//! call. Grids never share state, so the result of [`step_all()`] is the
//! same as stepping each grid on its own, in any order.
//!
//! The batch also tracks a display selection: at most
//! [`MAX_SELECTABLE`] distinct 0-based indices, replaced atomically by
//! [`set_selection()`].
//!
//! [`step_all()`]: SimulationBatch::step_all
//! [`set_selection()`]: SimulationBatch::set_selection

use gol_core::{Grid, GridError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{BatchConfig, ConfigError};

/// Hard upper bound on the number of grids selected for display.
pub const MAX_SELECTABLE: usize = 8;

// ── Error type ──────────────────────────────────────────────────

/// A rejected display selection. The previous selection is kept.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No indices were given.
    #[error("select at least one grid")]
    Empty,
    /// More indices than the batch allows.
    #[error("{requested} grids requested, at most {max} can be selected")]
    TooMany {
        /// Number of indices given.
        requested: usize,
        /// The batch's selection limit.
        max: usize,
    },
    /// Indices outside `0..grid_count`.
    #[error("grid index {indices:?} out of range (grid_count={grid_count})")]
    OutOfRange {
        /// Every offending index, in request order.
        indices: Vec<usize>,
        /// Number of grids in the batch.
        grid_count: usize,
    },
    /// An index appears more than once.
    #[error("grid index {indices:?} selected more than once")]
    Duplicate {
        /// Every repeated index, once each.
        indices: Vec<usize>,
    },
}

// ── Stats ───────────────────────────────────────────────────────

/// Batch-level aggregates, refreshed by every [`SimulationBatch::step_all`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Number of grids in the batch.
    pub grid_count: usize,
    /// Grids whose most recent step changed at least one cell.
    pub active_count: usize,
    /// Live cells summed over all grids.
    pub total_alive: usize,
}

impl BatchStats {
    fn collect<'a>(grids: impl IntoIterator<Item = &'a Grid>) -> Self {
        grids
            .into_iter()
            .fold(Self::default(), |mut stats, grid| {
                stats.grid_count += 1;
                stats.total_alive += grid.alive_count();
                if grid.is_active() {
                    stats.active_count += 1;
                }
                stats
            })
    }

    /// True if no grid changed on the last step.
    pub fn is_quiescent(&self) -> bool {
        self.active_count == 0
    }
}

// ── SimulationBatch ─────────────────────────────────────────────

/// An ordered batch of independent grids advanced in lockstep.
///
/// Index order is insertion order and is preserved by persistence.
/// Indices are 0-based everywhere in the engine.
#[derive(Clone, Debug)]
pub struct SimulationBatch {
    grids: Vec<Grid>,
    selection: SmallVec<[usize; MAX_SELECTABLE]>,
    max_selectable: usize,
    stats: BatchStats,
}

impl Default for SimulationBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBatch {
    /// Create an empty batch with the default selection limit.
    pub fn new() -> Self {
        Self::with_max_selectable(MAX_SELECTABLE)
    }

    /// Create an empty batch that accepts at most `max_selectable`
    /// indices, clamped to `1..=MAX_SELECTABLE`.
    pub fn with_max_selectable(max_selectable: usize) -> Self {
        Self {
            grids: Vec::new(),
            selection: SmallVec::new(),
            max_selectable: max_selectable.clamp(1, MAX_SELECTABLE),
            stats: BatchStats::default(),
        }
    }

    /// Wrap existing grids. The selection starts empty.
    pub fn from_grids(grids: Vec<Grid>) -> Self {
        let stats = BatchStats::collect(&grids);
        Self {
            grids,
            stats,
            ..Self::new()
        }
    }

    /// Build a batch of `config.count` random grids.
    ///
    /// A configured seed makes the batch reproducible.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] from [`BatchConfig::validate`].
    /// [`ConfigError::Grid`] is unreachable for a validated config.
    pub fn from_config(config: &BatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut batch = Self::with_max_selectable(config.max_selectable);
        batch.grids.reserve(config.count);
        for _ in 0..config.count {
            let mut grid = Grid::new(config.rows, config.columns)?;
            grid.randomize(&mut rng);
            batch.push(grid);
        }
        debug!(
            grids = config.count,
            rows = config.rows,
            columns = config.columns,
            "created random batch"
        );
        Ok(batch)
    }

    /// Append a new `rows × columns` grid with random cells from `rng`.
    ///
    /// Returns the new grid's index.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NegativeDimension`] for negative dimensions;
    /// the batch is left unchanged.
    pub fn add_random<R: Rng + ?Sized>(
        &mut self,
        rows: i32,
        columns: i32,
        rng: &mut R,
    ) -> Result<usize, GridError> {
        let mut grid = Grid::new(rows, columns)?;
        grid.randomize(rng);
        Ok(self.push(grid))
    }

    /// Append an existing grid. Returns its index.
    pub fn push(&mut self, grid: Grid) -> usize {
        self.stats.grid_count += 1;
        self.stats.total_alive += grid.alive_count();
        if grid.is_active() {
            self.stats.active_count += 1;
        }
        self.grids.push(grid);
        self.grids.len() - 1
    }

    /// Advance every grid one generation and refresh the aggregates.
    pub fn step_all(&mut self) -> BatchStats {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.grids.par_iter_mut().for_each(Grid::step);
        }
        #[cfg(not(feature = "parallel"))]
        for grid in &mut self.grids {
            grid.step();
        }

        self.stats = BatchStats::collect(&self.grids);
        debug!(
            grids = self.stats.grid_count,
            active = self.stats.active_count,
            alive = self.stats.total_alive,
            "stepped batch"
        );
        self.stats
    }

    /// Replace the display selection.
    ///
    /// Indices are 0-based and displayed in the given order.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] if `indices` is empty, longer than the
    /// selection limit, names an index outside the batch, or repeats an
    /// index. On error the previous selection is unchanged.
    pub fn set_selection(&mut self, indices: &[usize]) -> Result<(), SelectionError> {
        if let Err(e) = self.check_selection(indices) {
            warn!(error = %e, "rejected grid selection");
            return Err(e);
        }
        self.selection = indices.iter().copied().collect();
        Ok(())
    }

    fn check_selection(&self, indices: &[usize]) -> Result<(), SelectionError> {
        if indices.is_empty() {
            return Err(SelectionError::Empty);
        }
        if indices.len() > self.max_selectable {
            return Err(SelectionError::TooMany {
                requested: indices.len(),
                max: self.max_selectable,
            });
        }
        let grid_count = self.grids.len();
        let out_of_range: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i >= grid_count)
            .collect();
        if !out_of_range.is_empty() {
            return Err(SelectionError::OutOfRange {
                indices: out_of_range,
                grid_count,
            });
        }
        let mut repeated: Vec<usize> = Vec::new();
        for (pos, &i) in indices.iter().enumerate() {
            if indices[..pos].contains(&i) && !repeated.contains(&i) {
                repeated.push(i);
            }
        }
        if !repeated.is_empty() {
            return Err(SelectionError::Duplicate { indices: repeated });
        }
        Ok(())
    }

    /// Current selection, in display order.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Clear the display selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected grids, in selection order.
    pub fn selected(&self) -> impl ExactSizeIterator<Item = &Grid> + '_ {
        self.selection.iter().map(move |&i| &self.grids[i])
    }

    /// Selection limit of this batch.
    pub fn max_selectable(&self) -> usize {
        self.max_selectable
    }

    /// Aggregates as of the last step or insertion.
    pub fn stats(&self) -> BatchStats {
        self.stats
    }

    /// All grids, in index order.
    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }

    /// Grid at `index`, if any.
    pub fn grid(&self, index: usize) -> Option<&Grid> {
        self.grids.get(index)
    }

    /// Number of grids.
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// True if the batch holds no grids.
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Consume the batch into its grids.
    pub fn into_grids(self) -> Vec<Grid> {
        self.grids
    }
}
