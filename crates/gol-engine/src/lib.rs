//! Batched simulation engine for independent Game of Life grids.
//!
//! [`SimulationBatch`] owns an ordered collection of [`Grid`]s and
//! advances all of them one generation per [`step_all()`] call,
//! aggregating liveness and activity into [`BatchStats`]. A bounded
//! subset of grids can be selected for display.
//!
//! [`persist`] converts batches to and from [`Snapshot`]s and their
//! encodings. [`Session`] is the pause/resume state machine an
//! interactive host drives with tick and user-command events; the engine
//! itself has no notion of wall-clock time.
//!
//! Grids share no state, so stepping order does not affect results.
//! With the `parallel` feature, `step_all()` steps grids on the rayon
//! pool.
//!
//! [`Grid`]: gol_core::Grid
//! [`Snapshot`]: gol_codec::Snapshot
//! [`step_all()`]: SimulationBatch::step_all

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
pub mod persist;
pub mod session;

pub use batch::{BatchStats, SelectionError, SimulationBatch, MAX_SELECTABLE};
pub use config::{BatchConfig, ConfigError};
pub use persist::{decode, encode, load, save};
pub use session::{Event, Outcome, Session, SessionError, SessionState};
