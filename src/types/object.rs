use crate::types::{PdfName, PdfValue};
use indexmap::IndexMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfArray {
    elements: Vec<PdfValue>,
}

impl PdfArray {
    pub fn new() -> Self {
        PdfArray {
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, value: PdfValue) {
        self.elements.push(value);
    }

    pub fn get(&self, index: usize) -> Option<&PdfValue> {
        self.elements.get(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PdfValue> {
        self.elements.iter()
    }
}

impl<'a> IntoIterator for &'a PdfArray {
    type Item = &'a PdfValue;
    type IntoIter = std::slice::Iter<'a, PdfValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Display for PdfArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", elem)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<PdfValue>> for PdfArray {
    fn from(elements: Vec<PdfValue>) -> Self {
        PdfArray { elements }
    }
}

/// Key-value dictionary with insertion order preserved, as the keys appear in
/// the file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfDictionary {
    entries: IndexMap<PdfName, PdfValue>,
}

impl PdfDictionary {
    pub fn new() -> Self {
        PdfDictionary {
            entries: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<PdfName>, value: PdfValue) -> Option<PdfValue> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&PdfValue> {
        self.entries.get(&PdfName::new(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&PdfName::new(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PdfName, &PdfValue)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &PdfName> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &PdfValue> {
        self.entries.values()
    }

    /// Copies every pair of `other` into this dictionary, overwriting the
    /// value of any key already present.
    pub fn merge(&mut self, other: &PdfDictionary) {
        for (key, value) in other.iter() {
            self.entries.insert(key.clone(), value.clone());
        }
    }
}

impl<'a> IntoIterator for &'a PdfDictionary {
    type Item = (&'a PdfName, &'a PdfValue);
    type IntoIter = indexmap::map::Iter<'a, PdfName, PdfValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for PdfDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<<")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{} {}", key, value)?;
        }
        write!(f, ">>")
    }
}

impl From<IndexMap<PdfName, PdfValue>> for PdfDictionary {
    fn from(entries: IndexMap<PdfName, PdfValue>) -> Self {
        PdfDictionary { entries }
    }
}

impl IntoIterator for PdfDictionary {
    type Item = (PdfName, PdfValue);
    type IntoIter = indexmap::map::IntoIter<PdfName, PdfValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
