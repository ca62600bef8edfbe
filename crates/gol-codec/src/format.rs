//! Selection between the text and structured encodings.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;
use crate::json::{decode_json, encode_json};
use crate::snapshot::Snapshot;
use crate::text::{decode_any, encode_text};

/// A snapshot encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Plain-text multi-grid format. Decoding also accepts the legacy
    /// single-grid variant.
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

impl Format {
    /// Encode `snapshot` in this format.
    ///
    /// # Errors
    ///
    /// Only the JSON encoder can fail.
    pub fn encode(self, snapshot: &Snapshot) -> Result<String, FormatError> {
        match self {
            Self::Text => Ok(encode_text(snapshot)),
            Self::Json => encode_json(snapshot),
        }
    }

    /// Decode `input` in this format.
    ///
    /// # Errors
    ///
    /// Any [`FormatError`] from the selected decoder.
    pub fn decode(self, input: &str) -> Result<Snapshot, FormatError> {
        match self {
            Self::Text => decode_any(input),
            Self::Json => decode_json(input),
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(FormatError::UnknownFormat { name: s.into() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SnapshotEntry;
    use gol_test_utils::pattern;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("txt".parse::<Format>().unwrap(), Format::Text);
        assert!(matches!(
            "yaml".parse::<Format>(),
            Err(FormatError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn both_formats_round_trip() {
        let snap = Snapshot::new(vec![SnapshotEntry {
            cells: pattern(&["+ +", " + "]),
            generation: 5,
        }]);
        for format in [Format::Text, Format::Json] {
            let encoded = format.encode(&snap).unwrap();
            assert_eq!(format.decode(&encoded).unwrap(), snap, "{format}");
        }
    }
}
