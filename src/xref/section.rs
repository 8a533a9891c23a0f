use crate::types::{ObjectId, PdfDictionary};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// On-disk encoding of a cross-reference section. Classic files use the
/// whitespace-delimited table form; files written since PDF 1.5 may use a
/// cross-reference stream instead. Both carry the same logical content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum XRefKind {
    Table,
    Stream,
}

impl Default for XRefKind {
    fn default() -> Self {
        XRefKind::Table
    }
}

/// Where an object's bytes live. A compressed entry points at the object
/// stream containing the object; such entries describe generation-0 objects
/// by convention of the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectLocation {
    /// Absolute byte offset of the object in the file.
    Offset(u64),
    /// Stored inside the object stream with this object number.
    Compressed { container: u32 },
}

impl ObjectLocation {
    pub fn offset(&self) -> Option<u64> {
        match self {
            ObjectLocation::Offset(offset) => Some(*offset),
            ObjectLocation::Compressed { .. } => None,
        }
    }

    pub fn container(&self) -> Option<u32> {
        match self {
            ObjectLocation::Compressed { container } => Some(*container),
            ObjectLocation::Offset(_) => None,
        }
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self, ObjectLocation::Compressed { .. })
    }
}

/// One revision's cross-reference state: the section kind, the local
/// object-location table and, when the scanner has seen one, the revision's
/// trailer dictionary.
///
/// A section is filled in while its revision is scanned and read back during
/// chain resolution; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct XrefSection {
    kind: XRefKind,
    entries: HashMap<ObjectId, ObjectLocation>,
    trailer: Option<PdfDictionary>,
}

impl XrefSection {
    pub fn new(kind: XRefKind) -> Self {
        XrefSection {
            kind,
            entries: HashMap::new(),
            trailer: None,
        }
    }

    pub fn kind(&self) -> XRefKind {
        self.kind
    }

    /// Inserts or overwrites the location of `id` in this revision.
    pub fn add_entry(&mut self, id: ObjectId, location: ObjectLocation) {
        self.entries.insert(id, location);
    }

    pub fn entries(&self) -> &HashMap<ObjectId, ObjectLocation> {
        &self.entries
    }

    pub fn set_trailer(&mut self, trailer: PdfDictionary) {
        self.trailer = Some(trailer);
    }

    pub fn trailer(&self) -> Option<&PdfDictionary> {
        self.trailer.as_ref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_table_kind() {
        let section = XrefSection::default();
        assert_eq!(section.kind(), XRefKind::Table);
        assert!(section.is_empty());
        assert!(section.trailer().is_none());
    }

    #[test]
    fn add_entry_overwrites_same_key() {
        let mut section = XrefSection::new(XRefKind::Table);
        let id = ObjectId::new(4, 0);
        section.add_entry(id, ObjectLocation::Offset(100));
        section.add_entry(id, ObjectLocation::Offset(900));
        assert_eq!(section.len(), 1);
        assert_eq!(section.entries()[&id], ObjectLocation::Offset(900));
    }

    #[test]
    fn location_accessors() {
        let direct = ObjectLocation::Offset(42);
        let packed = ObjectLocation::Compressed { container: 9 };
        assert_eq!(direct.offset(), Some(42));
        assert_eq!(direct.container(), None);
        assert!(!direct.is_compressed());
        assert_eq!(packed.offset(), None);
        assert_eq!(packed.container(), Some(9));
        assert!(packed.is_compressed());
    }
}
