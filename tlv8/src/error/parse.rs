/*!
 Errors that can happen when parsing a TLV8 byte stream.
*/

use std::{
    error,
    fmt::{Display, Formatter, Result},
};

/// Errors that can happen when parsing TLV8 data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlvParseError {
    /// A chunk header or payload runs past the end of the buffer
    TruncatedInput {
        /// Index of the first byte that could not be read
        offset: usize,
        /// Number of bytes the chunk declared
        needed: usize,
        /// Number of bytes left in the buffer at `offset`
        available: usize,
    },
}

impl Display for TlvParseError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            TlvParseError::TruncatedInput {
                offset,
                needed,
                available,
            } => write!(
                fmt,
                "Not enough data at offset {offset:x}: needed {needed} bytes but only {available} remain!"
            ),
        }
    }
}

impl error::Error for TlvParseError {}
