//! gol: a Conway's Game of Life simulation engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the gol sub-crates. For most users, adding `gol` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gol::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Three random 10×10 grids, reproducible from the seed.
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let mut batch = SimulationBatch::new();
//! for _ in 0..3 {
//!     batch.add_random(10, 10, &mut rng).unwrap();
//! }
//! batch.set_selection(&[2, 0]).unwrap();
//!
//! let stats = batch.step_all();
//! assert_eq!(stats.grid_count, 3);
//! assert!(batch.grids().iter().all(|g| g.generation() == 2));
//!
//! // Persist and restore. The selection is not part of the save.
//! let text = save(&batch, Format::Text).unwrap();
//! let restored = load(&text, Format::Text).unwrap();
//! assert_eq!(restored.len(), 3);
//! assert!(restored.selection().is_empty());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `gol-core` | `Grid`, `CellMatrix`, the step rule |
//! | [`codec`] | `gol-codec` | `Snapshot`, text and JSON encodings |
//! | [`engine`] | `gol-engine` | `SimulationBatch`, config, `Session` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grids, cell matrices, and the B3/S23 step rule (`gol-core`).
pub use gol_core as grid;

/// Snapshot DTO and its text and JSON encodings (`gol-codec`).
///
/// Decoding is all-or-nothing; see [`codec::FormatError`] for the failure
/// cases.
pub use gol_codec as codec;

/// Batched stepping, selection, persistence glue, and the session state
/// machine (`gol-engine`).
pub use gol_engine as engine;

/// Common imports for typical gol usage.
///
/// ```rust
/// use gol::prelude::*;
/// ```
pub mod prelude {
    // Grid
    pub use gol_core::{CellMatrix, Grid, ALIVE_GLYPH, DEAD_GLYPH};

    // Persistence
    pub use gol_codec::{Format, Snapshot, SnapshotEntry};
    pub use gol_engine::{load, save};

    // Engine
    pub use gol_engine::{BatchConfig, BatchStats, Event, Outcome, Session, SessionState};
    pub use gol_engine::{SimulationBatch, MAX_SELECTABLE};

    // Errors
    pub use gol_codec::FormatError;
    pub use gol_core::GridError;
    pub use gol_engine::{ConfigError, SelectionError, SessionError};
}
