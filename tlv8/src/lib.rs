#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod codec;
pub mod error;
pub mod protocol;
pub mod util;

pub use codec::{
    encoder::{encode, encode_entries, encoded_len, TypeCode},
    merge::{decode_groups, decode_to_list, decode_to_mapping, Entries},
    models::{Chunk, Entry, TlvMap, MAX_CHUNK_LEN, SEPARATOR_PAIR},
    parser::ChunkReader,
};
pub use error::{encode::EncodeError, parse::TlvParseError};
pub use util::format::{as_printable, to_string, Render, ToTlvString};
