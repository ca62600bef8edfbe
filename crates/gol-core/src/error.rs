//! Error types for grid and cell-matrix construction.

use thiserror::Error;

/// Errors arising from constructing a [`Grid`](crate::Grid) or a
/// [`CellMatrix`](crate::CellMatrix), or from addressing a cell that
/// does not exist.
///
/// Stepping, randomizing and neighbour queries never fail; only the
/// construction and mutation entry points return this type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A dimension was negative. Dimensions are never clamped.
    #[error("{name} must be non-negative (got {value})")]
    NegativeDimension {
        /// Which dimension was rejected (`"rows"` or `"columns"`).
        name: &'static str,
        /// The offending value.
        value: i64,
    },
    /// A dimension does not fit the `i32` coordinate space, or the cell
    /// count overflows `usize`.
    #[error("grid of {rows}x{columns} cells is too large")]
    DimensionTooLarge {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },
    /// Rows of a matrix literal have different lengths.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Zero-based index of the first short or long row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A flat cell buffer or a declared width does not match the shape.
    #[error("{cells} cells do not form a {rows}x{columns} matrix")]
    Shape {
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        columns: usize,
        /// Cells actually supplied.
        cells: usize,
    },
    /// A pattern literal contains a character other than the two cell glyphs.
    #[error("invalid cell glyph {glyph:?} at row {row}, column {column}")]
    Glyph {
        /// Zero-based row of the glyph.
        row: usize,
        /// Zero-based column of the glyph.
        column: usize,
        /// The unrecognized character.
        glyph: char,
    },
    /// A write addressed a cell outside the matrix.
    #[error("cell ({row}, {column}) out of bounds for {rows}x{columns} matrix")]
    CellOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Matrix row count.
        rows: usize,
        /// Matrix column count.
        columns: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_dimension_message_names_the_axis() {
        let e = GridError::NegativeDimension {
            name: "columns",
            value: -3,
        };
        assert_eq!(e.to_string(), "columns must be non-negative (got -3)");
    }

    #[test]
    fn glyph_message_quotes_the_character() {
        let e = GridError::Glyph {
            row: 1,
            column: 4,
            glyph: 'x',
        };
        assert_eq!(e.to_string(), "invalid cell glyph 'x' at row 1, column 4");
    }
}
