/*!
 Reassembles raw chunks into logical entries and builds the list and mapping views of a stream.

 A value longer than 255 bytes is written as a run of chunks of the same type where every chunk
 but the last is full. Reassembly follows two rules:

 - A chunk continues the current entry if it has the same type and the previous chunk was full
 - A chunk that is not full closes the current entry, even if it is empty

 A full chunk followed by a chunk of another type, or by the end of the stream, also closes the entry.
 If a chunk that would continue an entry is truncated, the whole entry is reported as an error.
*/

use std::iter::{FusedIterator, Peekable};

use tracing::trace;

use crate::{
    codec::{
        models::{Entry, TlvMap},
        parser::ChunkReader,
    },
    error::parse::TlvParseError,
};

/// Iterates over the logical entries of a TLV8 byte stream
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    chunks: Peekable<ChunkReader<'a>>,
}

impl<'a> Entries<'a> {
    pub fn new(stream: &'a [u8]) -> Self {
        Self {
            chunks: ChunkReader::new(stream).peekable(),
        }
    }
}

impl Iterator for Entries<'_> {
    type Item = Result<Entry, TlvParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = match self.chunks.next()? {
            Ok(chunk) => chunk,
            Err(why) => return Some(Err(why)),
        };

        let mut value = first.data.to_vec();
        let mut previous = first;
        while previous.is_full() {
            let next = match self.chunks.peek() {
                Some(Ok(next)) if next.tlv_type == previous.tlv_type => *next,
                // The value may continue past the truncation, so none of it is returned
                Some(Err(_)) => return self.chunks.next().and_then(Result::err).map(Err),
                _ => break,
            };
            self.chunks.next();
            value.extend_from_slice(next.data);
            previous = next;
        }

        trace!(tlv_type = first.tlv_type, len = value.len(), "Merged entry");
        Some(Ok(Entry {
            tlv_type: first.tlv_type,
            value,
        }))
    }
}

impl FusedIterator for Entries<'_> {}

/// Decode a TLV8 stream into its entries, in the order they appear.
///
/// Accepts any byte buffer, owned or borrowed, mutable or not; the buffer is never modified.
/// Separators and repeated types are kept as distinct entries.
pub fn decode_to_list<B: AsRef<[u8]>>(buffer: B) -> Result<Vec<Entry>, TlvParseError> {
    Entries::new(buffer.as_ref()).collect()
}

/// Decode a TLV8 stream into a map keyed by type.
///
/// If a type appears in more than one logical entry, the **last** entry wins: its value replaces
/// the earlier ones, while the key stays at the position where it first appeared. Streams with
/// repeated sections should be read with [`decode_to_list`] or [`decode_groups`] instead.
pub fn decode_to_mapping<B: AsRef<[u8]>>(buffer: B) -> Result<TlvMap, TlvParseError> {
    let mut mapping = TlvMap::new();
    for entry in Entries::new(buffer.as_ref()) {
        let entry = entry?;
        mapping.insert(entry.tlv_type, entry.value);
    }
    Ok(mapping)
}

/// Decode a TLV8 stream into one map per group of entries delimited by separators.
///
/// A stream with `n` separators yields `n + 1` groups, so leading, trailing, or adjacent
/// separators produce empty groups. An empty stream yields no groups. Within a group,
/// repeated types follow the same last-wins rule as [`decode_to_mapping`].
pub fn decode_groups<B: AsRef<[u8]>>(buffer: B) -> Result<Vec<TlvMap>, TlvParseError> {
    let stream = buffer.as_ref();
    if stream.is_empty() {
        return Ok(vec![]);
    }

    let mut groups = vec![TlvMap::new()];
    for entry in Entries::new(stream) {
        let entry = entry?;
        if entry.is_separator() {
            groups.push(TlvMap::new());
        } else if let Some(group) = groups.last_mut() {
            group.insert(entry.tlv_type, entry.value);
        }
    }
    Ok(groups)
}
