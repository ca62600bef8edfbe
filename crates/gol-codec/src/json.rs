//! Structured (JSON) encoding.
//!
//! A snapshot is a JSON array of `{"cells": [[bool, ...], ...],
//! "generation": n}` objects, semantically identical to the text format.
//! A zero-row matrix adds `"columns": n` so its width survives. The
//! capitalized keys `Cells` and `Generation` are accepted on input.

use tracing::debug;

use crate::error::FormatError;
use crate::snapshot::Snapshot;

/// Encode a snapshot as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`FormatError::Json`] if serialization fails.
pub fn encode_json(snapshot: &Snapshot) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Decode a JSON snapshot.
///
/// # Errors
///
/// Returns [`FormatError::Json`] for malformed JSON, missing keys, a
/// negative or non-integer generation, or ragged cell rows.
pub fn decode_json(input: &str) -> Result<Snapshot, FormatError> {
    let snapshot: Snapshot = serde_json::from_str(input)?;
    debug!(grids = snapshot.len(), "decoded json snapshot");
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SnapshotEntry;
    use gol_test_utils::{pattern, TOAD};

    #[test]
    fn encodes_as_array_of_objects() {
        let snap = Snapshot::new(vec![SnapshotEntry {
            cells: pattern(&["+ "]),
            generation: 3,
        }]);
        let json = encode_json(&snap).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "cells": [[true, false]], "generation": 3 }])
        );
    }

    #[test]
    fn round_trip_preserves_order() {
        let snap = Snapshot::new(vec![
            SnapshotEntry {
                cells: pattern(TOAD[0]),
                generation: 1,
            },
            SnapshotEntry {
                cells: pattern(TOAD[1]),
                generation: 40,
            },
        ]);
        let back = decode_json(&encode_json(&snap).unwrap()).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn accepts_capitalized_keys() {
        let snap =
            decode_json(r#"[{"Cells": [[false, true], [true, true]], "Generation": 7}]"#).unwrap();
        assert_eq!(snap.entries()[0].generation, 7);
        assert_eq!(snap.entries()[0].cells.count_alive(), 3);
    }

    #[test]
    fn zero_row_grid_keeps_its_width() {
        let snap = Snapshot::new(vec![SnapshotEntry {
            cells: gol_core::CellMatrix::new(0, 5).unwrap(),
            generation: 2,
        }]);
        let json = encode_json(&snap).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "cells": [], "columns": 5, "generation": 2 }])
        );
        let back = decode_json(&json).unwrap();
        assert_eq!(back, snap);
        assert_eq!(back.entries()[0].cells.columns(), 5);
    }

    #[test]
    fn files_without_columns_still_load() {
        let snap = decode_json(r#"[{"Cells": [], "Generation": 4}]"#).unwrap();
        let cells = &snap.entries()[0].cells;
        assert_eq!((cells.rows(), cells.columns()), (0, 0));
    }

    #[test]
    fn rejects_columns_disagreeing_with_rows() {
        assert!(matches!(
            decode_json(r#"[{"cells": [[true, false]], "columns": 3, "generation": 1}]"#),
            Err(FormatError::Json(_))
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(matches!(
            decode_json(r#"[{"cells": [[true], [true, false]], "generation": 1}]"#),
            Err(FormatError::Json(_))
        ));
    }

    #[test]
    fn rejects_negative_generation() {
        assert!(decode_json(r#"[{"cells": [], "generation": -1}]"#).is_err());
    }

    #[test]
    fn rejects_missing_generation() {
        assert!(decode_json(r#"[{"cells": [[true]]}]"#).is_err());
    }
}
