/*!
Errors that can happen during the application's runtime
*/

use std::{
    fmt::{Display, Formatter, Result},
    io::Error as IoError,
    path::PathBuf,
};

use tlv8::{EncodeError, TlvParseError};

/// Errors that can happen during the application's runtime
#[derive(Debug)]
pub enum RuntimeError {
    InvalidOptions(String),
    InvalidInput(String),
    Encode(EncodeError),
    Decode(TlvParseError),
    ReadError(IoError, PathBuf),
    DiskError(IoError),
}

impl Display for RuntimeError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            RuntimeError::InvalidOptions(why) => write!(fmt, "Invalid options!\n{why}"),
            RuntimeError::InvalidInput(why) => write!(fmt, "Invalid input: {why}"),
            RuntimeError::Encode(why) => write!(fmt, "Unable to encode: {why}"),
            RuntimeError::Decode(why) => write!(fmt, "Unable to decode: {why}"),
            RuntimeError::ReadError(why, path) => write!(fmt, "{why}: {path:?}"),
            RuntimeError::DiskError(why) => write!(fmt, "{why}"),
        }
    }
}

impl From<EncodeError> for RuntimeError {
    fn from(why: EncodeError) -> Self {
        RuntimeError::Encode(why)
    }
}

impl From<TlvParseError> for RuntimeError {
    fn from(why: TlvParseError) -> Self {
        RuntimeError::Decode(why)
    }
}
