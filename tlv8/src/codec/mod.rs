/*!
 Contains logic and data structures used to encode and decode TLV8 data.

 ## Overview

 TLV8 is a byte-oriented type-length-value format: each field is written as a one-byte type,
 a one-byte length, and up to 255 bytes of data. Longer values are split across consecutive
 chunks of the same type and merged back together when decoded.

 ## Features

 - Encoding of any ordered sequence of `(type, value)` pairs, with validation of the types
 - Zero-copy iteration over the raw chunks of a stream
 - Decoding into an ordered list, a type-keyed map, or one map per separator-delimited group
*/

pub mod encoder;
pub mod merge;
pub mod models;
pub mod parser;
mod tests;
