use super::section::XrefSection;
use std::collections::BTreeMap;

/// All cross-reference sections discovered in a file, keyed by the byte
/// position at which each section starts. Positions are unique per revision,
/// and the map's ordering gives the ascending byte order used for fallback
/// merging and the first/last trailer queries.
#[derive(Debug, Clone, Default)]
pub struct XrefIndex {
    sections: BTreeMap<u64, XrefSection>,
}

impl XrefIndex {
    pub fn new() -> Self {
        XrefIndex {
            sections: BTreeMap::new(),
        }
    }

    /// Inserts `section` at `byte_pos`, replacing any section previously
    /// recorded there, and returns a handle to the stored value.
    pub fn insert(&mut self, byte_pos: u64, section: XrefSection) -> &mut XrefSection {
        let slot = self.sections.entry(byte_pos).or_default();
        *slot = section;
        slot
    }

    pub fn get(&self, byte_pos: u64) -> Option<&XrefSection> {
        self.sections.get(&byte_pos)
    }

    pub fn get_mut(&mut self, byte_pos: u64) -> Option<&mut XrefSection> {
        self.sections.get_mut(&byte_pos)
    }

    pub fn contains(&self, byte_pos: u64) -> bool {
        self.sections.contains_key(&byte_pos)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section at the numerically smallest byte position.
    pub fn first(&self) -> Option<(u64, &XrefSection)> {
        self.sections
            .first_key_value()
            .map(|(pos, section)| (*pos, section))
    }

    /// Section at the numerically largest byte position.
    pub fn last(&self) -> Option<(u64, &XrefSection)> {
        self.sections
            .last_key_value()
            .map(|(pos, section)| (*pos, section))
    }

    /// Byte positions in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = u64> + '_ {
        self.sections.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &XrefSection)> {
        self.sections.iter().map(|(pos, section)| (*pos, section))
    }
}
