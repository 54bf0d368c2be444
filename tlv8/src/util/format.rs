/*!
 Formats decoded TLV8 data as human-readable text for debugging.

 Lists are wrapped in `[` `]` and maps in `{` `}`, with one `  <type>: <value>` line per entry:

 ```text
 [
   1: hello
   2: world
 ]
 ```
*/

use std::{borrow::Cow, collections::BTreeMap, fmt::Display};

use indexmap::IndexMap;

use crate::codec::models::Entry;

/// Values that can be displayed on a single line of formatted output
pub trait Render {
    fn render(&self) -> Cow<'_, str>;
}

/// Borrow `bytes` as text if they are valid UTF-8 without control characters
pub fn as_printable(bytes: &[u8]) -> Option<&str> {
    std::str::from_utf8(bytes)
        .ok()
        .filter(|text| !text.chars().any(char::is_control))
}

/// Bytes are shown as text if they are printable UTF-8, otherwise as `0x`-prefixed hex
impl Render for [u8] {
    fn render(&self) -> Cow<'_, str> {
        match as_printable(self) {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Owned(format!("0x{}", hex::encode(self))),
        }
    }
}

impl Render for Vec<u8> {
    fn render(&self) -> Cow<'_, str> {
        self.as_slice().render()
    }
}

impl<const N: usize> Render for [u8; N] {
    fn render(&self) -> Cow<'_, str> {
        self.as_slice().render()
    }
}

impl Render for str {
    fn render(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Render for String {
    fn render(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> Cow<'_, str> {
        (**self).render()
    }
}

/// Collections that can be formatted as a block of entries
pub trait ToTlvString {
    fn to_tlv_string(&self) -> String;
}

impl ToTlvString for [Entry] {
    fn to_tlv_string(&self) -> String {
        write_block(
            ('[', ']'),
            self.iter()
                .map(|entry| (entry.tlv_type, entry.value.render())),
        )
    }
}

impl ToTlvString for Vec<Entry> {
    fn to_tlv_string(&self) -> String {
        self.as_slice().to_tlv_string()
    }
}

impl<K: Display, V: Render> ToTlvString for [(K, V)] {
    fn to_tlv_string(&self) -> String {
        write_block(
            ('[', ']'),
            self.iter().map(|(key, value)| (key, value.render())),
        )
    }
}

impl<K: Display, V: Render> ToTlvString for Vec<(K, V)> {
    fn to_tlv_string(&self) -> String {
        self.as_slice().to_tlv_string()
    }
}

impl<K: Display, V: Render, S> ToTlvString for IndexMap<K, V, S> {
    fn to_tlv_string(&self) -> String {
        write_block(
            ('{', '}'),
            self.iter().map(|(key, value)| (key, value.render())),
        )
    }
}

impl<K: Display, V: Render> ToTlvString for BTreeMap<K, V> {
    fn to_tlv_string(&self) -> String {
        write_block(
            ('{', '}'),
            self.iter().map(|(key, value)| (key, value.render())),
        )
    }
}

/// Format a list or a map of entries, one entry per line
///
/// # Example
///
/// ```
/// use tlv8::{decode_to_list, decode_to_mapping, to_string};
///
/// let bytes = [0x01, 0x05, b'h', b'e', b'l', b'l', b'o', 0x06, 0x01, 0x03];
///
/// assert_eq!(to_string(&decode_to_list(bytes).unwrap()), "[\n  1: hello\n  6: 0x03\n]\n");
/// assert_eq!(to_string(&decode_to_mapping(bytes).unwrap()), "{\n  1: hello\n  6: 0x03\n}\n");
/// ```
pub fn to_string<T: ToTlvString + ?Sized>(collection: &T) -> String {
    collection.to_tlv_string()
}

fn write_block<'a, K: Display>(
    (open, close): (char, char),
    items: impl Iterator<Item = (K, Cow<'a, str>)>,
) -> String {
    let mut output = format!("{open}\n");
    items.for_each(|(key, value)| output.push_str(&format!("  {key}: {value}\n")));
    output.push(close);
    output.push('\n');
    output
}
