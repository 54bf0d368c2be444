/*!
 Splits a TLV8 byte stream into its raw chunks.

 Each chunk is laid out as `[type: 1 byte][length: 1 byte][data: length bytes]`, and a stream is
 nothing but chunks written back to back: there is no header, checksum, or overall length.
*/

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{
    codec::models::{Chunk, HEADER_LEN},
    error::parse::TlvParseError,
};

/// Reads [`Chunk`]s from a TLV8 byte stream without copying their data
///
/// Yields `Err` at most once, when a chunk runs past the end of the stream; after
/// that the reader is exhausted.
#[derive(Debug, Clone)]
pub struct ChunkReader<'a> {
    /// The stream we want to parse
    stream: &'a [u8],
    /// The current index we are at in the stream
    idx: usize,
    /// Set once a chunk fails to parse so we never resume in the middle of bad data
    failed: bool,
}

impl<'a> ChunkReader<'a> {
    pub fn new(stream: &'a [u8]) -> Self {
        Self {
            stream,
            idx: 0,
            failed: false,
        }
    }

    /// Index of the next byte to be read
    pub fn position(&self) -> usize {
        self.idx
    }

    /// Read exactly `n` bytes from the stream
    fn read_exact_bytes(&mut self, n: usize) -> Result<&'a [u8], TlvParseError> {
        let stream = self.stream;
        let range = stream
            .get(self.idx..self.idx + n)
            .ok_or(TlvParseError::TruncatedInput {
                offset: self.idx,
                needed: n,
                available: stream.len().saturating_sub(self.idx),
            })?;
        self.idx += n;
        Ok(range)
    }

    /// Read the type, length, and data of the chunk at the current index
    fn read_chunk(&mut self) -> Result<Chunk<'a>, TlvParseError> {
        let header = self.read_exact_bytes(HEADER_LEN)?;
        let (tlv_type, length) = (header[0], header[1]);
        let data = self.read_exact_bytes(length as usize)?;

        trace!(tlv_type, length, offset = self.idx, "Read chunk");
        Ok(Chunk { tlv_type, data })
    }
}

impl<'a> Iterator for ChunkReader<'a> {
    type Item = Result<Chunk<'a>, TlvParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.idx >= self.stream.len() {
            return None;
        }

        let chunk = self.read_chunk();
        if let Err(why) = &chunk {
            debug!("Stopped parsing: {why}");
            self.failed = true;
        }
        Some(chunk)
    }
}

impl FusedIterator for ChunkReader<'_> {}

impl<'a, B: AsRef<[u8]> + ?Sized> From<&'a B> for ChunkReader<'a> {
    fn from(buffer: &'a B) -> Self {
        Self::new(buffer.as_ref())
    }
}

impl<'a, B: AsRef<[u8]> + ?Sized> From<&'a mut B> for ChunkReader<'a> {
    fn from(buffer: &'a mut B) -> Self {
        let buffer: &'a B = buffer;
        Self::new(buffer.as_ref())
    }
}
