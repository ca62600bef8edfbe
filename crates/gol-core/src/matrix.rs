//! Row-major boolean cell storage.
//!
//! [`CellMatrix`] is the unit of state that crosses every boundary in the
//! workspace: the grid keeps two of them (current generation and scratch
//! buffer), and the codecs read and write them. Storage is a single flat
//! `Vec<bool>` indexed `row * columns + column`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Glyph for a live cell in pattern literals and the text save format.
pub const ALIVE_GLYPH: char = '+';

/// Glyph for a dead cell in pattern literals and the text save format.
pub const DEAD_GLYPH: char = ' ';

/// Largest row or column count; coordinates are `i32`.
const MAX_DIM: usize = i32::MAX as usize;

/// A rectangular, row-major matrix of cell states (`true` = alive).
///
/// Serializes as a two-dimensional boolean array (`[[bool, ...], ...]`),
/// one inner array per row. A matrix with zero rows serializes as `[]`
/// and deserializes with zero columns; containers that need the width
/// store it alongside.
///
/// # Examples
///
/// ```
/// use gol_core::CellMatrix;
///
/// let m = CellMatrix::parse(&["+ ", " +"]).unwrap();
/// assert_eq!((m.rows(), m.columns()), (2, 2));
/// assert_eq!(m.get(0, 0), Some(true));
/// assert_eq!(m.get(0, 1), Some(false));
/// assert_eq!(m.get(5, 5), None);
/// assert_eq!(m.count_alive(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct CellMatrix {
    rows: usize,
    columns: usize,
    data: Vec<bool>,
}

impl CellMatrix {
    /// Create an all-dead matrix of `rows × columns` cells.
    ///
    /// Zero in either dimension is allowed and yields an empty matrix.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionTooLarge`] if either dimension exceeds
    /// `i32::MAX` or the cell count overflows `usize`.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        let len = checked_len(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            data: vec![false; len],
        })
    }

    /// Wrap row-major cell states as a `rows × columns` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionTooLarge`] for an oversized shape, or
    /// [`GridError::Shape`] if `data` does not hold exactly
    /// `rows * columns` cells.
    pub fn from_flat(rows: usize, columns: usize, data: Vec<bool>) -> Result<Self, GridError> {
        let len = Self::cell_count(rows, columns)?;
        if data.len() != len {
            return Err(GridError::Shape {
                rows,
                columns,
                cells: data.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Number of cells in a `rows × columns` matrix, without allocating.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionTooLarge`] if either dimension exceeds
    /// `i32::MAX` or the product overflows `usize`.
    pub fn cell_count(rows: usize, columns: usize) -> Result<usize, GridError> {
        checked_len(rows, columns)
    }

    /// All-dead matrix with the same shape as `other`.
    pub(crate) fn dead_like(other: &CellMatrix) -> Self {
        Self {
            rows: other.rows,
            columns: other.columns,
            data: vec![false; other.data.len()],
        }
    }

    /// Build a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Ragged`] if the rows differ in length, or
    /// [`GridError::DimensionTooLarge`] if the shape exceeds `i32::MAX`.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let columns = rows.first().map_or(0, Vec::len);
        let len = checked_len(rows.len(), columns)?;
        let mut data = Vec::with_capacity(len);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(GridError::Ragged {
                    row: r,
                    expected: columns,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            data,
        })
    }

    /// Parse a pattern literal written with [`ALIVE_GLYPH`] and [`DEAD_GLYPH`].
    ///
    /// Every line must have the same length.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Glyph`] for any other character and
    /// [`GridError::Ragged`] for lines of unequal length.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, GridError> {
        let mut rows = Vec::with_capacity(lines.len());
        for (r, line) in lines.iter().enumerate() {
            let row = line
                .as_ref()
                .chars()
                .enumerate()
                .map(|(c, glyph)| match glyph {
                    ALIVE_GLYPH => Ok(true),
                    DEAD_GLYPH => Ok(false),
                    _ => Err(GridError::Glyph {
                        row: r,
                        column: c,
                        glyph,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells (`rows * columns`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the matrix holds no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// State of the cell at `(row, column)`, or `None` outside the matrix.
    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        if row < self.rows && column < self.columns {
            Some(self.data[row * self.columns + column])
        } else {
            None
        }
    }

    /// Set the cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellOutOfBounds`] outside the matrix.
    pub fn set(&mut self, row: usize, column: usize, alive: bool) -> Result<(), GridError> {
        if row >= self.rows || column >= self.columns {
            return Err(GridError::CellOutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        self.data[row * self.columns + column] = alive;
        Ok(())
    }

    /// Number of live cells.
    pub fn count_alive(&self) -> usize {
        self.data.iter().filter(|&&alive| alive).count()
    }

    /// Iterate rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // chunks(0) panics, so slice by index to support zero-width rows.
        (0..self.rows).map(move |r| &self.data[r * self.columns..(r + 1) * self.columns])
    }

    /// Flat row-major view of every cell.
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.data
    }
}

fn checked_len(rows: usize, columns: usize) -> Result<usize, GridError> {
    let too_large = GridError::DimensionTooLarge { rows, columns };
    if rows > MAX_DIM || columns > MAX_DIM {
        return Err(too_large);
    }
    rows.checked_mul(columns).ok_or(too_large)
}

impl TryFrom<Vec<Vec<bool>>> for CellMatrix {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<CellMatrix> for Vec<Vec<bool>> {
    fn from(m: CellMatrix) -> Self {
        m.iter_rows().map(<[bool]>::to_vec).collect()
    }
}

/// Renders one line per row using the cell glyphs, without a trailing newline.
impl fmt::Display for CellMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                let glyph = if alive { ALIVE_GLYPH } else { DEAD_GLYPH };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}
