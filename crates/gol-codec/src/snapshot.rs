//! The persistence DTO shared by both encodings.

use gol_core::{CellMatrix, Grid, GridError};
use serde::{Deserialize, Serialize};

/// One persisted grid: its current cells and generation number.
///
/// In the structured encoding a zero-row matrix also writes its width as
/// `columns`, since `cells: []` alone cannot carry it. Field aliases accept
/// the capitalized keys written by older save files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryRepr", into = "EntryRepr")]
pub struct SnapshotEntry {
    /// Current generation's cells, row-major.
    pub cells: CellMatrix,
    /// Generation number at the time of capture.
    pub generation: u64,
}

/// Wire shape of a [`SnapshotEntry`].
#[derive(Serialize, Deserialize)]
struct EntryRepr {
    #[serde(alias = "Cells")]
    cells: CellMatrix,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    columns: Option<usize>,
    #[serde(alias = "Generation")]
    generation: u64,
}

impl TryFrom<EntryRepr> for SnapshotEntry {
    type Error = GridError;

    fn try_from(repr: EntryRepr) -> Result<Self, Self::Error> {
        let cells = match repr.columns {
            Some(columns) if repr.cells.rows() == 0 => CellMatrix::new(0, columns)?,
            Some(columns) if columns != repr.cells.columns() => {
                return Err(GridError::Shape {
                    rows: repr.cells.rows(),
                    columns,
                    cells: repr.cells.len(),
                })
            }
            _ => repr.cells,
        };
        Ok(Self {
            cells,
            generation: repr.generation,
        })
    }
}

impl From<SnapshotEntry> for EntryRepr {
    fn from(entry: SnapshotEntry) -> Self {
        let columns = (entry.cells.rows() == 0 && entry.cells.columns() > 0)
            .then(|| entry.cells.columns());
        Self {
            cells: entry.cells,
            columns,
            generation: entry.generation,
        }
    }
}

impl SnapshotEntry {
    /// Capture a grid's persistent state.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            cells: grid.to_matrix(),
            generation: grid.generation(),
        }
    }

    /// Restore a grid. Derived fields are recomputed by the grid itself.
    pub fn into_grid(self) -> Grid {
        Grid::from_matrix(self.cells, self.generation)
    }
}

impl From<Grid> for SnapshotEntry {
    fn from(grid: Grid) -> Self {
        let (cells, generation) = grid.into_parts();
        Self { cells, generation }
    }
}

/// An ordered sequence of persisted grids.
///
/// Order is preserved through every encoding, so index `i` in a snapshot
/// is index `i` in the restored batch.
///
/// # Examples
///
/// ```
/// use gol_codec::{decode_text, encode_text, Snapshot};
/// use gol_core::Grid;
///
/// let grids = vec![Grid::new(2, 3).unwrap(), Grid::new(1, 1).unwrap()];
/// let snapshot = Snapshot::from_grids(&grids);
/// let text = encode_text(&snapshot);
/// assert!(text.starts_with("2\n2 3 1\n"));
///
/// let restored = decode_text(&text).unwrap();
/// assert_eq!(restored, snapshot);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: Vec<SnapshotEntry>,
}

impl Snapshot {
    /// Wrap an ordered list of entries.
    pub fn new(entries: Vec<SnapshotEntry>) -> Self {
        Self { entries }
    }

    /// Capture each grid in order.
    pub fn from_grids<'a, I>(grids: I) -> Self
    where
        I: IntoIterator<Item = &'a Grid>,
    {
        Self {
            entries: grids.into_iter().map(SnapshotEntry::from_grid).collect(),
        }
    }

    /// Restore every grid in order.
    pub fn into_grids(self) -> Vec<Grid> {
        self.entries.into_iter().map(SnapshotEntry::into_grid).collect()
    }

    /// Persisted entries in order.
    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    /// Consume into the entry list.
    pub fn into_entries(self) -> Vec<SnapshotEntry> {
        self.entries
    }

    /// Append an entry.
    pub fn push(&mut self, entry: SnapshotEntry) {
        self.entries.push(entry);
    }

    /// Number of grids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the snapshot holds no grids.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<SnapshotEntry> for Snapshot {
    fn from_iter<T: IntoIterator<Item = SnapshotEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gol_test_utils::{grid_from, BLINKER};

    #[test]
    fn entry_keeps_generation_and_cells() {
        let mut g = grid_from(BLINKER[0]);
        g.step();
        let entry = SnapshotEntry::from_grid(&g);
        assert_eq!(entry.generation, 2);
        assert_eq!(&entry.cells, g.cells());

        let restored = entry.into_grid();
        assert_eq!(restored.alive_count(), 3);
        assert!(!restored.is_active());
    }

    #[test]
    fn from_owned_grid_moves_cells() {
        let g = grid_from(BLINKER[1]);
        let expected = g.to_matrix();
        let entry = SnapshotEntry::from(g);
        assert_eq!(entry.cells, expected);
        assert_eq!(entry.generation, 1);
    }

    #[test]
    fn grids_round_trip_in_order() {
        let grids = vec![grid_from(BLINKER[0]), grid_from(BLINKER[1])];
        let snap = Snapshot::from_grids(&grids);
        assert_eq!(snap.len(), 2);
        let back = snap.into_grids();
        assert_eq!(back[0].cells(), grids[0].cells());
        assert_eq!(back[1].cells(), grids[1].cells());
    }
}
