//! Core types for the gol simulation engine.
//!
//! This is the leaf crate of the workspace. It defines the cell storage
//! ([`CellMatrix`]), the double-buffered [`Grid`] that advances one
//! generation at a time under the standard B3/S23 rule, and the
//! construction errors shared by the higher-level crates.
//!
//! The grid is a finite island: cells outside `[0, rows) × [0, columns)`
//! are permanently dead, so edge cells simply see fewer live neighbours.
//! There is no wraparound.
//!
//! # Examples
//!
//! ```
//! use gol_core::{CellMatrix, Grid};
//!
//! // A vertical blinker flips to a horizontal bar after one step.
//! let cells = CellMatrix::parse(&[" + ", " + ", " + "]).unwrap();
//! let mut grid = Grid::from_matrix(cells, 1);
//! grid.step();
//!
//! assert_eq!(grid.cells(), &CellMatrix::parse(&["   ", "+++", "   "]).unwrap());
//! assert_eq!(grid.generation(), 2);
//! assert_eq!(grid.alive_count(), 3);
//! assert!(grid.is_active());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod matrix;

pub use error::GridError;
pub use grid::{Grid, FIRST_GENERATION, MOORE_OFFSETS};
pub use matrix::{CellMatrix, ALIVE_GLYPH, DEAD_GLYPH};
