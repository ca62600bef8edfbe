//! Plain-text save format.
//!
//! The multi-grid file starts with a count line; each grid is a
//! `<rows> <columns> <generation>` header followed by exactly `rows`
//! lines of exactly `columns` glyphs. The legacy single-grid file is one
//! header plus its rows, with no count line.
//!
//! Output always uses `\n`; input may use `\n` or `\r\n`.

use std::fmt::Write as _;
use std::str::FromStr;

use gol_core::{CellMatrix, ALIVE_GLYPH, DEAD_GLYPH};
use tracing::debug;

use crate::error::FormatError;
use crate::snapshot::{Snapshot, SnapshotEntry};

// ── Encoding ────────────────────────────────────────────────────

/// Encode a snapshot in the multi-grid text format.
pub fn encode_text(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", snapshot.len());
    for entry in snapshot.entries() {
        write_entry(&mut out, entry);
    }
    out
}

/// Encode one grid in the legacy single-grid text format.
pub fn encode_single(entry: &SnapshotEntry) -> String {
    let mut out = String::new();
    write_entry(&mut out, entry);
    out
}

fn write_entry(out: &mut String, entry: &SnapshotEntry) {
    let cells = &entry.cells;
    let _ = writeln!(
        out,
        "{} {} {}",
        cells.rows(),
        cells.columns(),
        entry.generation
    );
    for row in cells.iter_rows() {
        out.extend(
            row.iter()
                .map(|&alive| if alive { ALIVE_GLYPH } else { DEAD_GLYPH }),
        );
        out.push('\n');
    }
}

// ── Decoding ────────────────────────────────────────────────────

/// Decode the multi-grid text format.
///
/// # Errors
///
/// Returns a [`FormatError`] for a non-numeric count or header, a header
/// with other than three fields, fewer grids or rows than declared, a row
/// whose length differs from the declared column count, an unknown glyph,
/// or non-blank content after the last grid.
pub fn decode_text(input: &str) -> Result<Snapshot, FormatError> {
    let mut lines = LineReader::new(input);
    let (line, count_text) = lines.next_line("grid count")?;
    let fields = split_fields(line, count_text, 1)?;
    let count: usize = parse_field(line, "count", fields[0])?;

    // Cap the preallocation: the count is untrusted input.
    let mut entries = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        entries.push(read_entry(&mut lines)?);
    }
    lines.expect_end()?;

    debug!(grids = entries.len(), "decoded text snapshot");
    Ok(Snapshot::new(entries))
}

/// Decode the legacy single-grid text format.
///
/// # Errors
///
/// As [`decode_text`], for a single header and its rows.
pub fn decode_single(input: &str) -> Result<SnapshotEntry, FormatError> {
    let mut lines = LineReader::new(input);
    let entry = read_entry(&mut lines)?;
    lines.expect_end()?;
    Ok(entry)
}

/// Decode either text variant, choosing by the shape of the first line.
///
/// A single field selects the multi-grid format; three fields select the
/// legacy single-grid format, returned as a one-entry snapshot.
///
/// # Errors
///
/// [`FormatError::HeaderFields`] if the first line has any other shape,
/// otherwise as the selected decoder.
pub fn decode_any(input: &str) -> Result<Snapshot, FormatError> {
    let first = input.lines().next().ok_or(FormatError::MissingLine {
        line: 1,
        expected: "grid count or grid header",
    })?;
    match first.split_whitespace().count() {
        1 => decode_text(input),
        3 => Ok(Snapshot::new(vec![decode_single(input)?])),
        found => Err(FormatError::HeaderFields {
            line: 1,
            expected: 1,
            found,
        }),
    }
}

fn read_entry(lines: &mut LineReader<'_>) -> Result<SnapshotEntry, FormatError> {
    let (line, header) = lines.next_line("grid header")?;
    let fields = split_fields(line, header, 3)?;
    let rows: usize = parse_field(line, "rows", fields[0])?;
    let columns: usize = parse_field(line, "columns", fields[1])?;
    let generation: u64 = parse_field(line, "generation", fields[2])?;

    // The header is untrusted: validate the shape without allocating, and
    // grow the buffer only as rows actually arrive.
    let len = CellMatrix::cell_count(rows, columns)
        .map_err(|source| FormatError::Dimensions { line, source })?;
    let mut data = Vec::with_capacity(lines.input_len().min(len));
    for _ in 0..rows {
        let (line, text) = lines.next_line("grid row")?;
        let found = text.chars().count();
        if found != columns {
            return Err(FormatError::RowLength {
                line,
                expected: columns,
                found,
            });
        }
        for (c, glyph) in text.chars().enumerate() {
            data.push(match glyph {
                ALIVE_GLYPH => true,
                DEAD_GLYPH => false,
                _ => {
                    return Err(FormatError::Glyph {
                        line,
                        column: c + 1,
                        glyph,
                    })
                }
            });
        }
    }
    let cells = CellMatrix::from_flat(rows, columns, data)
        .map_err(|source| FormatError::Dimensions { line, source })?;

    Ok(SnapshotEntry { cells, generation })
}

fn split_fields(line: usize, text: &str, expected: usize) -> Result<Vec<&str>, FormatError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != expected {
        return Err(FormatError::HeaderFields {
            line,
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_field<T: FromStr>(line: usize, field: &'static str, raw: &str) -> Result<T, FormatError> {
    raw.parse().map_err(|_| FormatError::InvalidNumber {
        line,
        field,
        value: raw.to_string(),
    })
}

/// Line iterator that tracks 1-based line numbers.
struct LineReader<'a> {
    input: &'a str,
    lines: std::str::Lines<'a>,
    /// Number of the line most recently returned.
    line: usize,
}

impl<'a> LineReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            lines: input.lines(),
            line: 0,
        }
    }

    /// Every cell occupies at least one input byte, so this bounds the
    /// cell count of any well-formed entry.
    fn input_len(&self) -> usize {
        self.input.len()
    }

    fn next_line(&mut self, expected: &'static str) -> Result<(usize, &'a str), FormatError> {
        self.line += 1;
        let text = self.lines.next().ok_or(FormatError::MissingLine {
            line: self.line,
            expected,
        })?;
        Ok((self.line, text))
    }

    /// Trailing blank lines are tolerated; anything else is an error.
    fn expect_end(&mut self) -> Result<(), FormatError> {
        for text in self.lines.by_ref() {
            self.line += 1;
            if !text.trim().is_empty() {
                return Err(FormatError::TrailingData { line: self.line });
            }
        }
        Ok(())
    }
}
