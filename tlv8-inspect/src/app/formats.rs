/*!
 Output formats and decoding views selectable from the command line.
*/

use std::fmt::Display;

/// Formats that decoded data can be printed as
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DecodeFormat {
    /// Bracketed, indented text
    #[default]
    Text,
    /// A JSON document
    Json,
}

impl DecodeFormat {
    /// Given user's input, return a variant if the input matches one
    pub fn from_cli(format: &str) -> Option<Self> {
        match format.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Display for DecodeFormat {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeFormat::Text => write!(fmt, "text"),
            DecodeFormat::Json => write!(fmt, "json"),
        }
    }
}

/// Formats that encoded bytes can be printed as
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EncodeFormat {
    /// Lowercase hexadecimal
    #[default]
    Hex,
    /// Standard base64 with padding
    Base64,
}

impl EncodeFormat {
    /// Given user's input, return a variant if the input matches one
    pub fn from_cli(format: &str) -> Option<Self> {
        match format.to_lowercase().as_str() {
            "hex" => Some(Self::Hex),
            "base64" | "b64" => Some(Self::Base64),
            _ => None,
        }
    }
}

impl Display for EncodeFormat {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeFormat::Hex => write!(fmt, "hex"),
            EncodeFormat::Base64 => write!(fmt, "base64"),
        }
    }
}

/// Which projection of the decoded stream to print
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Every entry in order
    #[default]
    List,
    /// Entries keyed by type, last value wins
    Mapping,
    /// One mapping per separator-delimited group
    Groups,
}
