use tlv8::{Entry, TlvMap};

/// Defines behavior for printing each view of a decoded stream in the desired output format
pub trait Renderer {
    /// Create a new renderer; `names` annotates type codes with their HomeKit names
    fn new(names: bool) -> Self
    where
        Self: Sized;
    /// Format every entry, in order
    fn render_list(&self, entries: &[Entry]) -> String;
    /// Format entries keyed by type
    fn render_mapping(&self, mapping: &TlvMap) -> String;
    /// Format one mapping per separator-delimited group
    fn render_groups(&self, groups: &[TlvMap]) -> String;
}
