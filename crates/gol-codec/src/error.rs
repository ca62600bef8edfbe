//! Error types for snapshot decoding.

use gol_core::GridError;
use thiserror::Error;

/// Stored data is structurally invalid.
///
/// Text-format variants carry the 1-based line number of the offending
/// line. A decode that returns any of these produces no partial result.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Input ended before an expected line.
    #[error("line {line}: unexpected end of input, expected {expected}")]
    MissingLine {
        /// Line number where the missing line should have been.
        line: usize,
        /// What was expected (e.g. `"grid header"`).
        expected: &'static str,
    },
    /// A header line has the wrong number of fields.
    #[error("line {line}: expected {expected} header field(s), found {found}")]
    HeaderFields {
        /// Line number of the header.
        line: usize,
        /// Number of fields the header should have.
        expected: usize,
        /// Number of fields present.
        found: usize,
    },
    /// A header field is not a non-negative integer.
    #[error("line {line}: invalid {field} {value:?}")]
    InvalidNumber {
        /// Line number of the header.
        line: usize,
        /// Which field failed (`"count"`, `"rows"`, `"columns"`, `"generation"`).
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },
    /// The declared grid dimensions cannot be allocated.
    #[error("line {line}: {source}")]
    Dimensions {
        /// Line number of the header.
        line: usize,
        /// The underlying construction error.
        #[source]
        source: GridError,
    },
    /// A data row does not have exactly the declared number of columns.
    #[error("line {line}: row has {found} cells, expected {expected}")]
    RowLength {
        /// Line number of the row.
        line: usize,
        /// Declared column count.
        expected: usize,
        /// Cells present on the line.
        found: usize,
    },
    /// A data row contains a character other than the two cell glyphs.
    #[error("line {line}, column {column}: invalid cell glyph {glyph:?}")]
    Glyph {
        /// Line number of the row.
        line: usize,
        /// 1-based column of the glyph.
        column: usize,
        /// The unrecognized character.
        glyph: char,
    },
    /// Non-blank content follows the last declared grid.
    #[error("line {line}: unexpected data after the last grid")]
    TrailingData {
        /// First line of trailing content.
        line: usize,
    },
    /// The structured encoding could not be parsed or produced.
    #[error("structured snapshot: {0}")]
    Json(#[from] serde_json::Error),
    /// A format name is not recognized.
    #[error("unknown snapshot format {name:?} (expected \"text\" or \"json\")")]
    UnknownFormat {
        /// The rejected name.
        name: String,
    },
}
