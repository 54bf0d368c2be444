/*!
 Turns command line input into bytes to decode and entries to encode.
*/

use std::{
    fs,
    io::{self, Read},
};

use base64::{prelude::BASE64_STANDARD, Engine};
use tlv8::{
    protocol::tlv_types::{self, SEPARATOR},
    EncodeError, Entry,
};
use tracing::debug;

use crate::app::{error::RuntimeError, options::Input};

/// Prefix that marks a value as hexadecimal
const HEX_PREFIX: &str = "0x";

/// Read the bytes to decode from wherever the user pointed us
pub fn read_input(input: &Input) -> Result<Vec<u8>, RuntimeError> {
    let bytes = match input {
        Input::Hex(text) => decode_hex(text)?,
        Input::Base64(text) => decode_base64(text)?,
        Input::File(path) => {
            fs::read(path).map_err(|why| RuntimeError::ReadError(why, path.to_owned()))?
        }
        Input::Stdin => {
            let mut bytes = vec![];
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(RuntimeError::DiskError)?;
            bytes
        }
    };
    debug!(len = bytes.len(), "Read input");
    Ok(bytes)
}

/// Remove any whitespace, so pasted multi-line dumps can be read
fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Decode hexadecimal text, with or without a leading `0x`
pub fn decode_hex(text: &str) -> Result<Vec<u8>, RuntimeError> {
    let cleaned = strip_whitespace(text);
    let digits = cleaned.strip_prefix(HEX_PREFIX).unwrap_or(&cleaned);
    hex::decode(digits).map_err(|why| RuntimeError::InvalidInput(format!("{why} in {text:?}")))
}

/// Decode standard base64 text
pub fn decode_base64(text: &str) -> Result<Vec<u8>, RuntimeError> {
    BASE64_STANDARD
        .decode(strip_whitespace(text))
        .map_err(|why| RuntimeError::InvalidInput(format!("{why} in {text:?}")))
}

/// Parse a `TYPE=VALUE` argument into an [`Entry`].
///
/// `TYPE` is either a [`tlv_types`] name or an integer; `VALUE` is taken as text unless it
/// starts with `0x`, in which case it is hexadecimal. The separator may be given by name alone.
pub fn parse_entry(arg: &str) -> Result<Entry, RuntimeError> {
    if tlv_types::from_name(arg) == Some(SEPARATOR) {
        return Ok(Entry::separator());
    }

    let (tlv_type, value) = arg.split_once('=').ok_or_else(|| {
        RuntimeError::InvalidInput(format!("expected TYPE=VALUE, got {arg:?}"))
    })?;

    let tlv_type = match tlv_types::from_name(tlv_type) {
        Some(code) => code,
        None => parse_type_code(tlv_type)?,
    };

    let value = match value.strip_prefix(HEX_PREFIX) {
        Some(digits) => decode_hex(digits)?,
        None => value.as_bytes().to_vec(),
    };

    Ok(Entry::new(tlv_type, value))
}

/// Parse a decimal or `0x`-prefixed hexadecimal type code
fn parse_type_code(text: &str) -> Result<u8, EncodeError> {
    let parsed = match text.strip_prefix(HEX_PREFIX) {
        Some(digits) => u8::from_str_radix(digits, 16),
        None => text.parse::<u8>(),
    };
    parsed.map_err(|_| EncodeError::InvalidType(format!("{text:?}")))
}
