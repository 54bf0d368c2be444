/*!
 Serializes `(type, value)` pairs into a TLV8 byte stream.

 Values longer than [`MAX_CHUNK_LEN`] are split into consecutive chunks of the same type.
 Every full chunk is followed by another chunk of that type, so a value whose length is a
 multiple of 255 ends with an empty chunk. This keeps two adjacent entries of the same
 type distinct when the stream is decoded.
*/

use tracing::{debug, trace};

use crate::{
    codec::models::{Entry, HEADER_LEN, MAX_CHUNK_LEN},
    error::encode::EncodeError,
    protocol::tlv_types::SEPARATOR,
};

/// Anything that can be used as the type of an entry.
///
/// Only integers in `0..=255` are valid type codes. Integer types wider than [`u8`] and
/// text are accepted so that out-of-range or non-integer types are reported as
/// [`EncodeError::InvalidType`] instead of being silently truncated.
pub trait TypeCode {
    /// Resolve to a wire type code
    fn type_code(&self) -> Result<u8, EncodeError>;
}

macro_rules! impl_type_code {
    ($($int:ty),*) => {
        $(
            impl TypeCode for $int {
                fn type_code(&self) -> Result<u8, EncodeError> {
                    u8::try_from(*self).map_err(|_| EncodeError::InvalidType(self.to_string()))
                }
            }
        )*
    };
}

impl_type_code!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Text is never a type code, even when it spells out a number
impl TypeCode for str {
    fn type_code(&self) -> Result<u8, EncodeError> {
        Err(EncodeError::InvalidType(format!("{self:?}")))
    }
}

impl TypeCode for String {
    fn type_code(&self) -> Result<u8, EncodeError> {
        self.as_str().type_code()
    }
}

impl<T: TypeCode + ?Sized> TypeCode for &T {
    fn type_code(&self) -> Result<u8, EncodeError> {
        (**self).type_code()
    }
}

/// Number of bytes `entries` occupy once encoded, headers included
pub fn encoded_len(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|entry| chunked_len(entry.value.len()))
        .sum()
}

/// Number of bytes a value of `value_len` bytes occupies once encoded
fn chunked_len(value_len: usize) -> usize {
    let chunks = value_len / MAX_CHUNK_LEN + 1;
    value_len + chunks * HEADER_LEN
}

/// Encode an ordered sequence of `(type, value)` pairs.
///
/// Every type is validated before anything is returned; if any entry is invalid the
/// whole encode fails and no bytes are produced.
///
/// # Example
///
/// ```
/// use tlv8::{decode_to_list, encode, protocol::tlv_types, Entry, SEPARATOR_PAIR};
///
/// let bytes = encode([(tlv_types::STATE, &[3u8][..]), SEPARATOR_PAIR]).unwrap();
/// assert_eq!(bytes, [0x06, 0x01, 0x03, 0xFF, 0x00]);
///
/// let entries = decode_to_list(&bytes).unwrap();
/// assert_eq!(entries, vec![Entry::new(tlv_types::STATE, [3u8]), Entry::separator()]);
/// ```
pub fn encode<I, T, V>(entries: I) -> Result<Vec<u8>, EncodeError>
where
    I: IntoIterator<Item = (T, V)>,
    T: TypeCode,
    V: AsRef<[u8]>,
{
    let mut stream = vec![];
    write_entries(&mut stream, entries)?;
    Ok(stream)
}

/// Encode a slice of [`Entry`] items, i.e. the output of [`decode_to_list`](crate::codec::merge::decode_to_list)
pub fn encode_entries(entries: &[Entry]) -> Result<Vec<u8>, EncodeError> {
    let mut stream = Vec::with_capacity(encoded_len(entries));
    write_entries(&mut stream, entries.iter().map(Entry::as_pair))?;
    Ok(stream)
}

/// Validate and append every entry, stopping at the first invalid one
fn write_entries<I, T, V>(stream: &mut Vec<u8>, entries: I) -> Result<(), EncodeError>
where
    I: IntoIterator<Item = (T, V)>,
    T: TypeCode,
    V: AsRef<[u8]>,
{
    for (idx, (tlv_type, value)) in entries.into_iter().enumerate() {
        let value = value.as_ref();
        let tlv_type = tlv_type
            .type_code()
            .inspect_err(|why| debug!(entry = idx, "Refusing to encode: {why}"))?;

        if tlv_type == SEPARATOR && !value.is_empty() {
            debug!(entry = idx, len = value.len(), "Refusing to encode separator with a value");
            return Err(EncodeError::InvalidSeparatorValue(value.len()));
        }

        write_entry(stream, tlv_type, value);
    }
    Ok(())
}

/// Append one logical entry to the stream as one or more chunks
fn write_entry(stream: &mut Vec<u8>, tlv_type: u8, value: &[u8]) {
    stream.reserve(chunked_len(value.len()));

    let mut chunks = value.chunks_exact(MAX_CHUNK_LEN);
    for chunk in &mut chunks {
        write_chunk(stream, tlv_type, chunk);
    }
    // Always written, even when empty, so the value is terminated
    write_chunk(stream, tlv_type, chunks.remainder());

    trace!(tlv_type, len = value.len(), "Encoded entry");
}

fn write_chunk(stream: &mut Vec<u8>, tlv_type: u8, data: &[u8]) {
    stream.push(tlv_type);
    stream.push(data.len() as u8);
    stream.extend_from_slice(data);
}
