//! Text encodings for qualifier and string-value bytes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Text encoding used to turn column names and string values into bytes.
///
/// Closed set: UTF-8 (the default), US-ASCII, and ISO-8859-1 — the labels
/// that actually show up in sink configurations. UTF-8 is the only member
/// that can represent every value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Charset {
    #[default]
    Utf8,
    Ascii,
    Latin1,
}

impl Charset {
    /// Parse a charset label, case-insensitive. Accepts the canonical
    /// names and their common aliases ("utf8", "ascii", "latin1").
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Self::Utf8),
            "us-ascii" | "ascii" => Some(Self::Ascii),
            "iso-8859-1" | "latin-1" | "latin1" => Some(Self::Latin1),
            _ => None,
        }
    }

    /// Canonical label, as accepted by `parse`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Ascii => "US-ASCII",
            Self::Latin1 => "ISO-8859-1",
        }
    }

    /// Encode a string into bytes, or `None` if the charset cannot
    /// represent it. No silent substitution characters.
    pub fn encode(&self, s: &str) -> Option<Vec<u8>> {
        match self {
            Self::Utf8 => Some(s.as_bytes().to_vec()),
            Self::Ascii => s.is_ascii().then(|| s.as_bytes().to_vec()),
            Self::Latin1 => s.chars().map(|c| u8::try_from(u32::from(c)).ok()).collect(),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
