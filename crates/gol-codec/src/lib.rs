//! Persistence formats for gol grids.
//!
//! A [`Snapshot`] is the only state that crosses the persistence
//! boundary: an ordered list of `(cells, generation)` pairs. Live-cell
//! counts and activity flags are derived and never stored.
//!
//! Two interchangeable encodings are provided, both operating on
//! in-memory strings (file and stream I/O is the caller's job):
//!
//! - [`text`]: the plain-text save format, multi-grid and legacy
//!   single-grid variants
//! - [`json`]: a structured encoding for interop with JSON tooling
//!
//! # Format
//!
//! ```text
//! <count>
//! <rows> <columns> <generation>
//! <rows lines of exactly <columns> glyphs: '+' alive, ' ' dead>
//! ... repeated <count> times ...
//! ```
//!
//! Decoding is all-or-nothing: any malformed entry fails the whole load.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod json;
pub mod snapshot;
pub mod text;

pub use error::FormatError;
pub use format::Format;
pub use json::{decode_json, encode_json};
pub use snapshot::{Snapshot, SnapshotEntry};
pub use text::{decode_any, decode_single, decode_text, encode_single, encode_text};
