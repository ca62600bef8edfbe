//! Test utilities for gol development.
//!
//! Provides the canonical Game of Life fixtures ([`fixtures`]) as glyph
//! literals, plus small helpers for building grids from them and for
//! producing reproducible random grids.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use gol_core::{CellMatrix, Grid, FIRST_GENERATION};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use fixtures::*;

/// Parse a fixture literal. Panics on malformed fixtures.
pub fn pattern(lines: &[&str]) -> CellMatrix {
    CellMatrix::parse(lines).expect("fixture literal must be well-formed")
}

/// Grid holding `lines` at generation 1.
pub fn grid_from(lines: &[&str]) -> Grid {
    Grid::from_matrix(pattern(lines), FIRST_GENERATION)
}

/// Deterministic RNG for tests and benchmarks.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A `rows × columns` grid randomized from `seed`.
pub fn random_grid(rows: i32, columns: i32, seed: u64) -> Grid {
    let mut grid = Grid::new(rows, columns).expect("test dimensions must be non-negative");
    grid.randomize(&mut seeded_rng(seed));
    grid
}

/// Place `lines` into an otherwise dead `rows × columns` matrix with its
/// top-left corner at `(top, left)`.
pub fn embed(lines: &[&str], rows: usize, columns: usize, top: usize, left: usize) -> CellMatrix {
    let src = pattern(lines);
    let mut out = CellMatrix::new(rows, columns).expect("test dimensions must fit");
    for (r, row) in src.iter_rows().enumerate() {
        for (c, &alive) in row.iter().enumerate() {
            out.set(top + r, left + c, alive)
                .expect("embedded pattern must fit inside the target");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_offsets_pattern() {
        let m = embed(BLOCK, 4, 4, 1, 2);
        assert_eq!(m.count_alive(), 4);
        assert_eq!(m.get(1, 2), Some(true));
        assert_eq!(m.get(2, 3), Some(true));
        assert_eq!(m.get(0, 0), Some(false));
    }

    #[test]
    fn random_grid_is_reproducible() {
        assert_eq!(random_grid(6, 9, 3).cells(), random_grid(6, 9, 3).cells());
    }
}
