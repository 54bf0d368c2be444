/*!
 Errors that can happen when serializing entries into a TLV8 byte stream.
*/

use std::{
    error,
    fmt::{Display, Formatter, Result},
};

use crate::protocol::tlv_types::SEPARATOR;

/// Errors that can happen when encoding a list of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The type is not an integer in `0..=255`; contains the rejected type as text
    InvalidType(String),
    /// A separator entry was paired with a value; contains the value's length
    InvalidSeparatorValue(usize),
}

impl Display for EncodeError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            EncodeError::InvalidType(why) => {
                write!(fmt, "Type {why} is not an integer between 0 and 255!")
            }
            EncodeError::InvalidSeparatorValue(len) => write!(
                fmt,
                "Separator type {SEPARATOR:#04x} must have an empty value, got {len} bytes!"
            ),
        }
    }
}

impl error::Error for EncodeError {}
