use indexmap::IndexMap;
use tlv8::{protocol::tlv_types, to_string, Entry, TlvMap};

use crate::renderers::renderer::Renderer;

pub struct TXT {
    /// Annotate type codes with their names
    names: bool,
}

impl TXT {
    /// Label a type code, i.e. `6` or `6 (state)`
    fn label(&self, code: u8) -> String {
        match tlv_types::name(code) {
            Some(name) if self.names => format!("{code} ({name})"),
            _ => code.to_string(),
        }
    }
}

impl Renderer for TXT {
    fn new(names: bool) -> Self {
        TXT { names }
    }

    fn render_list(&self, entries: &[Entry]) -> String {
        let labeled: Vec<(String, &[u8])> = entries
            .iter()
            .map(|entry| (self.label(entry.tlv_type), entry.value.as_slice()))
            .collect();
        to_string(&labeled)
    }

    fn render_mapping(&self, mapping: &TlvMap) -> String {
        let labeled: IndexMap<String, &[u8]> = mapping
            .iter()
            .map(|(code, value)| (self.label(*code), value.as_slice()))
            .collect();
        to_string(&labeled)
    }

    fn render_groups(&self, groups: &[TlvMap]) -> String {
        groups
            .iter()
            .map(|group| self.render_mapping(group))
            .collect()
    }
}
