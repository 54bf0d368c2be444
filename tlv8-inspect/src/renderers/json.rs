use json::{object, JsonValue};
use tlv8::{as_printable, protocol::tlv_types, Entry, TlvMap};

use crate::renderers::renderer::Renderer;

/// Number of spaces to indent nested JSON values with
const INDENT: u16 = 2;

pub struct JSON {
    /// Add type names to entries and use them as mapping keys
    names: bool,
}

impl JSON {
    /// Values are strings when they are printable UTF-8, otherwise `{"hex": "..."}`
    fn value(bytes: &[u8]) -> JsonValue {
        match as_printable(bytes) {
            Some(text) => text.into(),
            None => object! {
                hex: hex::encode(bytes),
            },
        }
    }

    /// Key for a type code in a mapping; JSON object keys must be strings
    fn key(&self, code: u8) -> String {
        match tlv_types::name(code) {
            Some(name) if self.names => name.to_string(),
            _ => code.to_string(),
        }
    }

    fn entry(&self, entry: &Entry) -> JsonValue {
        let mut item = JsonValue::new_object();
        item["type"] = entry.tlv_type.into();
        if self.names {
            if let Some(name) = tlv_types::name(entry.tlv_type) {
                item["name"] = name.into();
            }
        }
        item["value"] = Self::value(&entry.value);
        item
    }

    fn mapping(&self, mapping: &TlvMap) -> JsonValue {
        let mut object = JsonValue::new_object();
        mapping
            .iter()
            .for_each(|(code, value)| object[self.key(*code).as_str()] = Self::value(value));
        object
    }
}

impl Renderer for JSON {
    fn new(names: bool) -> Self {
        JSON { names }
    }

    fn render_list(&self, entries: &[Entry]) -> String {
        let list = JsonValue::Array(entries.iter().map(|entry| self.entry(entry)).collect());
        list.pretty(INDENT) + "\n"
    }

    fn render_mapping(&self, mapping: &TlvMap) -> String {
        self.mapping(mapping).pretty(INDENT) + "\n"
    }

    fn render_groups(&self, groups: &[TlvMap]) -> String {
        let groups = JsonValue::Array(groups.iter().map(|group| self.mapping(group)).collect());
        groups.pretty(INDENT) + "\n"
    }
}
