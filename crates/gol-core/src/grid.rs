//! Double-buffered Game of Life grid.
//!
//! [`Grid`] owns two equally-sized [`CellMatrix`] buffers. The current
//! generation lives in `cells`; `step()` computes the next generation into
//! `buffer` by reading only `cells`, then swaps the two. The swap exchanges
//! the buffers' heap pointers, so no per-generation allocation happens.
//!
//! ```text
//! step N:   cells ──read──▶ rule ──write──▶ buffer
//!           swap(cells, buffer)
//! step N+1: cells (was buffer) ──▶ rule ──▶ buffer (was cells)
//! ```

use rand::Rng;

use crate::error::GridError;
use crate::matrix::CellMatrix;

/// Generation number of a freshly constructed grid.
pub const FIRST_GENERATION: u64 = 1;

/// All 8 Moore-neighbourhood offsets: N, S, W, E, NW, NE, SW, SE.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A finite Game of Life grid with a persistent scratch buffer.
///
/// Cells outside the grid are permanently dead (no wraparound). Each call
/// to [`step()`](Self::step) advances exactly one generation under the
/// B3/S23 rule and refreshes [`alive_count()`](Self::alive_count) and
/// [`is_active()`](Self::is_active).
#[derive(Clone, Debug)]
pub struct Grid {
    /// Current generation.
    cells: CellMatrix,
    /// Scratch space for the next generation; same shape as `cells`.
    buffer: CellMatrix,
    generation: u64,
    alive_count: usize,
    /// True iff the most recent step changed at least one cell.
    active: bool,
}

impl Grid {
    /// Create an all-dead grid of `rows × columns` cells at generation 1.
    ///
    /// Zero-sized grids are valid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NegativeDimension`] if either dimension is
    /// negative.
    pub fn new(rows: i32, columns: i32) -> Result<Self, GridError> {
        let rows = dimension("rows", rows)?;
        let columns = dimension("columns", columns)?;
        let cells = CellMatrix::new(rows, columns)?;
        Ok(Self::from_matrix(cells, FIRST_GENERATION))
    }

    /// Adopt `cells` as the current state at the given generation.
    ///
    /// Used to restore grids loaded by the codecs. The live-cell count is
    /// derived from `cells`; the grid starts inactive.
    pub fn from_matrix(cells: CellMatrix, generation: u64) -> Self {
        let buffer = CellMatrix::dead_like(&cells);
        let alive_count = cells.count_alive();
        Self {
            cells,
            buffer,
            generation,
            alive_count,
            active: false,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.cells.columns()
    }

    /// Generations elapsed, counting from 1 at creation or from the
    /// restored value.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells in the current generation.
    pub fn alive_count(&self) -> usize {
        self.alive_count
    }

    /// Whether the most recent step changed any cell.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The current generation. The scratch buffer is never exposed.
    pub fn cells(&self) -> &CellMatrix {
        &self.cells
    }

    /// Copy of the current generation.
    pub fn to_matrix(&self) -> CellMatrix {
        self.cells.clone()
    }

    /// Consume the grid, returning the current generation and its number.
    pub fn into_parts(self) -> (CellMatrix, u64) {
        (self.cells, self.generation)
    }

    /// Whether the cell at `(row, column)` is alive.
    ///
    /// Any coordinate outside the grid, including negative ones, is dead.
    /// Never panics.
    pub fn is_alive(&self, row: i32, column: i32) -> bool {
        cell_alive(&self.cells, row, column)
    }

    /// Number of live cells among the 8 neighbours of `(row, column)`.
    ///
    /// Off-grid neighbours count as dead. The result is in `0..=8`.
    pub fn count_nearby(&self, row: i32, column: i32) -> u8 {
        live_neighbours(&self.cells, row, column)
    }

    /// Advance exactly one generation.
    ///
    /// Every cell's next state is computed from the current generation
    /// only:
    /// - fewer than 2 or more than 3 neighbours: dead
    /// - exactly 3: alive
    /// - exactly 2: unchanged
    pub fn step(&mut self) {
        self.generation += 1;

        let rows = self.rows();
        let columns = self.columns();
        let mut alive_count = 0;
        let mut active = false;

        {
            let current = &self.cells;
            let next = self.buffer.as_mut_slice();
            for r in 0..rows {
                for c in 0..columns {
                    let idx = r * columns + c;
                    let was_alive = current.as_slice()[idx];
                    // Dimensions are bounded by i32::MAX at construction.
                    let alive = match live_neighbours(current, r as i32, c as i32) {
                        3 => true,
                        2 => was_alive,
                        _ => false,
                    };
                    next[idx] = alive;
                    if alive {
                        alive_count += 1;
                    }
                    if alive != was_alive {
                        active = true;
                    }
                }
            }
        }

        std::mem::swap(&mut self.cells, &mut self.buffer);
        self.alive_count = alive_count;
        self.active = active;
    }

    /// Assign every cell alive or dead with probability 0.5 each.
    ///
    /// The random source is injected so seeded generators reproduce the
    /// same pattern. Updates the live-cell count; leaves the generation
    /// and activity flag untouched.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut alive_count = 0;
        for cell in self.cells.as_mut_slice() {
            *cell = rng.gen_bool(0.5);
            if *cell {
                alive_count += 1;
            }
        }
        self.alive_count = alive_count;
    }
}

// Free functions over a borrowed matrix so `step()` can read `cells`
// while holding `buffer` mutably.

fn cell_alive(cells: &CellMatrix, row: i32, column: i32) -> bool {
    if row < 0 || column < 0 {
        return false;
    }
    cells.get(row as usize, column as usize).unwrap_or(false)
}

fn live_neighbours(cells: &CellMatrix, row: i32, column: i32) -> u8 {
    MOORE_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| cell_alive(cells, row.saturating_add(dr), column.saturating_add(dc)))
        .count() as u8
}

fn dimension(name: &'static str, value: i32) -> Result<usize, GridError> {
    usize::try_from(value).map_err(|_| GridError::NegativeDimension {
        name,
        value: i64::from(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn grid(lines: &[&str]) -> Grid {
        Grid::from_matrix(CellMatrix::parse(lines).unwrap(), FIRST_GENERATION)
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_starts_dead_at_generation_one() {
        let g = Grid::new(4, 7).unwrap();
        assert_eq!((g.rows(), g.columns()), (4, 7));
        assert_eq!(g.generation(), 1);
        assert_eq!(g.alive_count(), 0);
        assert!(!g.is_active());
    }

    #[test]
    fn new_accepts_zero_dimensions() {
        for (r, c) in [(0, 0), (1, 0), (0, 5)] {
            let g = Grid::new(r, c).unwrap();
            assert_eq!(g.rows(), r as usize);
            assert_eq!(g.columns(), c as usize);
        }
    }

    #[test]
    fn new_rejects_negative_dimensions() {
        assert_eq!(
            Grid::new(-1, 5).unwrap_err(),
            GridError::NegativeDimension {
                name: "rows",
                value: -1
            }
        );
        assert_eq!(
            Grid::new(5, -2).unwrap_err(),
            GridError::NegativeDimension {
                name: "columns",
                value: -2
            }
        );
    }

    #[test]
    fn from_matrix_counts_live_cells() {
        let g = Grid::from_matrix(CellMatrix::parse(&["++ ", "  +"]).unwrap(), 17);
        assert_eq!(g.generation(), 17);
        assert_eq!(g.alive_count(), 3);
    }

    // ── Neighbour queries ───────────────────────────────────────

    #[test]
    fn is_alive_outside_grid_is_false() {
        let g = grid(&["++", "++"]);
        assert!(g.is_alive(0, 0));
        assert!(!g.is_alive(-1, 0));
        assert!(!g.is_alive(0, -1));
        assert!(!g.is_alive(2, 0));
        assert!(!g.is_alive(0, 2));
        assert!(!g.is_alive(i32::MIN, i32::MAX));
    }

    #[test]
    fn count_nearby_excludes_self() {
        let g = grid(&["+++", "+++", "+++"]);
        assert_eq!(g.count_nearby(1, 1), 8);
        assert_eq!(g.count_nearby(0, 0), 3);
        assert_eq!(g.count_nearby(0, 1), 5);
    }

    #[test]
    fn count_nearby_at_extreme_coordinates_does_not_overflow() {
        let g = grid(&["+"]);
        assert_eq!(g.count_nearby(i32::MAX, i32::MAX), 0);
        assert_eq!(g.count_nearby(i32::MIN, i32::MIN), 0);
    }

    // ── Rule table ──────────────────────────────────────────────

    #[test]
    fn two_neighbours_do_not_birth() {
        // Centre has exactly 2 live neighbours and is dead: stays dead.
        let mut g = grid(&["+ +", "   ", "   "]);
        g.step();
        assert!(!g.is_alive(1, 1));
    }

    #[test]
    fn three_neighbours_birth() {
        let mut g = grid(&["+ +", "   ", " + "]);
        g.step();
        assert!(g.is_alive(1, 1));
    }

    #[test]
    fn overcrowding_kills() {
        let mut g = grid(&["+++", "++ ", "   "]);
        assert_eq!(g.count_nearby(1, 1), 4);
        g.step();
        assert!(!g.is_alive(1, 1));
    }

    #[test]
    fn isolated_cell_dies() {
        let mut g = grid(&["   ", " + ", "   "]);
        g.step();
        assert_eq!(g.alive_count(), 0);
        assert!(g.is_active());
    }

    // ── Step bookkeeping ────────────────────────────────────────

    #[test]
    fn step_on_empty_grid_is_inactive() {
        let mut g = Grid::new(0, 0).unwrap();
        g.step();
        assert_eq!(g.generation(), 2);
        assert!(!g.is_active());
        assert_eq!(g.alive_count(), 0);
    }

    #[test]
    fn block_is_a_fixed_point() {
        let mut g = grid(&["++", "++"]);
        g.step();
        assert_eq!(g.cells(), &CellMatrix::parse(&["++", "++"]).unwrap());
        assert!(!g.is_active());
        assert_eq!(g.alive_count(), 4);
    }

    #[test]
    fn activity_clears_once_stable() {
        let mut g = grid(&["++ ", "+  ", "   "]);
        g.step();
        assert!(g.is_active(), "three-cell corner grows into a block");
        g.step();
        assert!(!g.is_active());
    }

    // ── Randomize ───────────────────────────────────────────────

    #[test]
    fn randomize_is_reproducible_with_seed() {
        let mut a = Grid::new(10, 10).unwrap();
        let mut b = Grid::new(10, 10).unwrap();
        a.randomize(&mut ChaCha8Rng::seed_from_u64(7));
        b.randomize(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a.cells(), b.cells());
        assert_eq!(a.alive_count(), a.cells().count_alive());
    }

    #[test]
    fn randomize_keeps_generation_and_activity() {
        let mut g = grid(&["   ", " + ", "   "]);
        g.step();
        assert!(g.is_active());
        g.randomize(&mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(g.generation(), 2);
        assert!(g.is_active());
    }

    #[test]
    fn randomize_produces_both_states() {
        let mut g = Grid::new(20, 20).unwrap();
        g.randomize(&mut ChaCha8Rng::seed_from_u64(99));
        assert!(g.alive_count() > 0);
        assert!(g.alive_count() < 400);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn fresh_grid_is_empty(rows in 0i32..30, cols in 0i32..30) {
            let g = Grid::new(rows, cols).unwrap();
            prop_assert_eq!(g.alive_count(), 0);
            for r in 0..rows {
                for c in 0..cols {
                    prop_assert!(!g.is_alive(r, c));
                }
            }
        }

        #[test]
        fn step_keeps_count_and_generation_consistent(
            rows in 0i32..16,
            cols in 0i32..16,
            seed in any::<u64>(),
            steps in 1usize..6,
        ) {
            let mut g = Grid::new(rows, cols).unwrap();
            g.randomize(&mut ChaCha8Rng::seed_from_u64(seed));
            for i in 0..steps {
                let before = g.to_matrix();
                g.step();
                prop_assert_eq!(g.generation(), 2 + i as u64);
                prop_assert_eq!(g.alive_count(), g.cells().count_alive());
                prop_assert_eq!(g.is_active(), &before != g.cells());
            }
        }

        #[test]
        fn count_nearby_is_bounded(
            seed in any::<u64>(),
            r in -2i32..10,
            c in -2i32..10,
        ) {
            let mut g = Grid::new(8, 8).unwrap();
            g.randomize(&mut ChaCha8Rng::seed_from_u64(seed));
            prop_assert!(g.count_nearby(r, c) <= 8);
        }
    }
}
