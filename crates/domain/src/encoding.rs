// crates/domain/src/encoding.rs
use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

/// Measures the encoded length of a string.
///
/// Lengths are always taken over a whole string; encodings whose units do not map one-to-one
/// onto characters are only exact that way.
pub trait ByteEncoder: fmt::Debug + Send + Sync {
    fn encoded_len(&self, text: &str) -> usize;

    fn name(&self) -> &'static str;
}

/// UTF-8 length in bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Encoder;

impl ByteEncoder for Utf8Encoder {
    fn encoded_len(&self, text: &str) -> usize {
        text.len()
    }

    fn name(&self) -> &'static str {
        "utf-8"
    }
}

/// UTF-16 length in bytes (two per code unit, no byte-order mark).
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16Encoder;

impl ByteEncoder for Utf16Encoder {
    fn encoded_len(&self, text: &str) -> usize {
        text.encode_utf16().count() * 2
    }

    fn name(&self) -> &'static str {
        "utf-16"
    }
}

/// Encodings selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    #[serde(rename = "utf-16", alias = "utf16")]
    Utf16,
}

impl Encoding {
    pub fn encoder(self) -> Arc<dyn ByteEncoder> {
        match self {
            Self::Utf8 => Arc::new(Utf8Encoder),
            Self::Utf16 => Arc::new(Utf16Encoder),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
        }
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "utf-16" | "utf16" => Ok(Self::Utf16),
            other => Err(format!("Unknown encoding: {other}")),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
