//! Batch persistence.
//!
//! Converts a [`SimulationBatch`] to and from a [`Snapshot`], and to and
//! from a string in either [`Format`]. Only cells and generation numbers
//! are stored; live counts are recomputed on load and a loaded batch
//! starts with an empty selection.

use gol_codec::{Format, FormatError, Snapshot};
use tracing::{info, warn};

use crate::batch::SimulationBatch;

/// Capture every grid of `batch`, in index order.
pub fn encode(batch: &SimulationBatch) -> Snapshot {
    Snapshot::from_grids(batch.grids())
}

/// Rebuild a batch from a snapshot, preserving order.
pub fn decode(snapshot: Snapshot) -> SimulationBatch {
    SimulationBatch::from_grids(snapshot.into_grids())
}

/// Encode `batch` as a string in `format`.
///
/// # Errors
///
/// Returns [`FormatError::Json`] if JSON serialization fails. Text
/// encoding is infallible.
pub fn save(batch: &SimulationBatch, format: Format) -> Result<String, FormatError> {
    let out = format.encode(&encode(batch))?;
    info!(grids = batch.len(), %format, bytes = out.len(), "saved batch");
    Ok(out)
}

/// Decode a batch from `input` in `format`.
///
/// Loading is all-or-nothing: on any error no batch is produced.
///
/// # Errors
///
/// Any [`FormatError`] from the decoder.
pub fn load(input: &str, format: Format) -> Result<SimulationBatch, FormatError> {
    match format.decode(input) {
        Ok(snapshot) => {
            let batch = decode(snapshot);
            info!(grids = batch.len(), %format, "loaded batch");
            Ok(batch)
        }
        Err(e) => {
            warn!(error = %e, %format, "failed to load batch");
            Err(e)
        }
    }
}
