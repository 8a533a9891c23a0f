use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one logical object: object number plus generation number.
///
/// Used as the key of every object-location table. Two entries in different
/// revisions that carry the same `ObjectId` describe the same logical object,
/// with the newer revision's entry taking precedence once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId {
    pub number: u32,
    pub generation: u16,
}

impl ObjectId {
    pub fn new(number: u32, generation: u16) -> Self {
        ObjectId { number, generation }
    }

    pub fn to_reference(&self) -> PdfReference {
        PdfReference::new(self.number, self.generation)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} obj", self.number, self.generation)
    }
}

impl From<(u32, u16)> for ObjectId {
    fn from((number, generation): (u32, u16)) -> Self {
        ObjectId::new(number, generation)
    }
}

/// An indirect reference value as it appears inside a dictionary, e.g. the
/// trailer's `/Root 1 0 R`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PdfReference {
    pub object_number: u32,
    pub generation_number: u16,
}

impl PdfReference {
    pub fn new(object_number: u32, generation_number: u16) -> Self {
        PdfReference {
            object_number,
            generation_number,
        }
    }

    pub fn id(&self) -> ObjectId {
        ObjectId {
            number: self.object_number,
            generation: self.generation_number,
        }
    }

    pub fn number(&self) -> u32 {
        self.object_number
    }

    pub fn generation(&self) -> u16 {
        self.generation_number
    }
}

impl fmt::Display for PdfReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.object_number, self.generation_number)
    }
}

impl From<ObjectId> for PdfReference {
    fn from(id: ObjectId) -> Self {
        id.to_reference()
    }
}

impl From<PdfReference> for ObjectId {
    fn from(reference: PdfReference) -> Self {
        reference.id()
    }
}
