/*!
 Errors that can happen when encoding or decoding TLV8 data.
*/

pub mod encode;
pub mod parse;
