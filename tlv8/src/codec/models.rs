/*!
 Data structures produced and consumed by the TLV8 encoder and decoder.
*/

use indexmap::IndexMap;

use crate::protocol::tlv_types::SEPARATOR;

/// The largest payload a single chunk can carry, because the length field is one byte
pub const MAX_CHUNK_LEN: usize = 255;
/// Number of bytes in a chunk header: one for the type, one for the length
pub const HEADER_LEN: usize = 2;

/// A pre-built separator entry, ready to be passed to [`encode`](crate::codec::encoder::encode)
pub const SEPARATOR_PAIR: (u8, &[u8]) = (SEPARATOR, &[]);

/// Type-keyed view of a decoded stream
///
/// Keys keep the position they were first inserted at, but hold the value of the
/// last logical entry seen with that type.
pub type TlvMap = IndexMap<u8, Vec<u8>>;

/// A logical `(type, value)` pair, possibly reassembled from several chunks
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// The type code identifying the field
    pub tlv_type: u8,
    /// The complete value, of any length
    pub value: Vec<u8>,
}

impl Entry {
    pub fn new(tlv_type: u8, value: impl Into<Vec<u8>>) -> Self {
        Self {
            tlv_type,
            value: value.into(),
        }
    }

    /// Create an empty entry of the [`SEPARATOR`] type
    pub const fn separator() -> Self {
        Self {
            tlv_type: SEPARATOR,
            value: Vec::new(),
        }
    }

    /// `true` if this entry delimits a group of entries
    pub fn is_separator(&self) -> bool {
        self.tlv_type == SEPARATOR
    }

    /// Borrow the entry as a pair that can be passed to [`encode`](crate::codec::encoder::encode)
    pub fn as_pair(&self) -> (u8, &[u8]) {
        (self.tlv_type, &self.value)
    }
}

impl<V: Into<Vec<u8>>> From<(u8, V)> for Entry {
    fn from((tlv_type, value): (u8, V)) -> Self {
        Self::new(tlv_type, value)
    }
}

/// A single on-wire unit, borrowed from the buffer it was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// The type byte
    pub tlv_type: u8,
    /// The chunk's payload; its length is the chunk's length byte
    pub data: &'a [u8],
}

impl Chunk<'_> {
    /// `true` if the next chunk of the same type continues this chunk's value
    pub fn is_full(&self) -> bool {
        self.data.len() == MAX_CHUNK_LEN
    }
}
