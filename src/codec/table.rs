//! Flat parameter tables: one byte per entry, entry index is the byte offset

use crate::model::Model;

/// Name used for unused slots
pub const PLACEHOLDER: &str = "-";

/// Ordered parameter table
#[derive(Debug, Clone, Copy)]
pub struct ParamTable {
    entries: &'static [&'static str],
}

impl ParamTable {
    pub const fn new(entries: &'static [&'static str]) -> Self {
        Self { entries }
    }

    /// Number of entries, and so the payload size in bytes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parameter at `index`, or `None` for placeholders and out-of-range indices
    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.entries
            .get(index)
            .copied()
            .filter(|&name| name != PLACEHOLDER)
    }

    /// Byte offset of a named parameter
    pub fn index_of(&self, name: &str) -> Option<usize> {
        if name == PLACEHOLDER {
            return None;
        }
        self.entries.iter().position(|&entry| entry == name)
    }

    /// Named parameters in table order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().copied().filter(|&name| name != PLACEHOLDER)
    }

    /// Full-length payload; placeholders are zero
    pub fn encode(&self, model: &Model) -> Vec<u8> {
        self.entries
            .iter()
            .map(|&name| {
                if name == PLACEHOLDER {
                    0
                } else {
                    model.get(name).clamp(i8::MIN as i32, i8::MAX as i32) as i8 as u8
                }
            })
            .collect()
    }

    /// Decode as much of the table as `payload` covers, as signed bytes
    pub fn decode(&self, payload: &[u8], model: &mut Model) {
        for (&name, &b) in self.entries.iter().zip(payload) {
            if name != PLACEHOLDER {
                model.set(name, b as i8 as i32);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: ParamTable = ParamTable::new(&["-", "cutoff", "-", "detune"]);

    #[test]
    fn test_placeholders_encode_to_zero() {
        let mut m = Model::new();
        m.set("cutoff", 100);
        m.set("detune", -3);
        m.set("-", 55);
        assert_eq!(TABLE.encode(&m), vec![0, 100, 0, 0xFD]);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let mut m = Model::new();
        m.set("cutoff", 1000);
        m.set("detune", -1000);
        assert_eq!(TABLE.encode(&m), vec![0, 127, 0, 0x80]);
    }

    #[test]
    fn test_short_payload_decodes_prefix() {
        let mut m = Model::new();
        TABLE.decode(&[9, 42], &mut m);
        assert_eq!(m.get("cutoff"), 42);
        assert!(!m.contains("detune"));
        assert!(!m.contains("-"));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(TABLE.index_of("detune"), Some(3));
        assert_eq!(TABLE.index_of("-"), None);
        assert_eq!(TABLE.name(0), None);
        assert_eq!(TABLE.name(1), Some("cutoff"));
        assert_eq!(TABLE.name(9), None);
        assert_eq!(TABLE.names().count(), 2);
    }
}
