//! pdf-xref: cross-reference and trailer reconciliation for incrementally
//! updated PDF files.
//!
//! This library offers:
//! - Recording of cross-reference sections (classic tables and xref streams)
//!   as a scanner discovers them
//! - /Prev chain resolution with newer-wins merging of object locations and
//!   trailer fields
//! - Tolerance for malformed files: missing or dangling startxref, dangling
//!   /Prev pointers and cyclic chains degrade to the best partial result
//! - Structured warnings alongside log output for every degradation
//! - PDFDoc text-string encoding with the full Annex D character table
//!
//! Licensed under the GNU General Public License v3.0

/// PDFDoc text-string encoding.
pub mod encoding;
/// Core PDF data types (values, names, strings, dictionaries).
pub mod types;
/// Cross-reference section recording and chain resolution.
pub mod xref;

pub use encoding::{PdfDocEncoding, TextEncoding};
pub use types::{
    ObjectId, PdfArray, PdfDictionary, PdfName, PdfReference, PdfString, PdfValue,
};
pub use xref::{
    ObjectLocation, RevisionBuilder, XRefKind, XrefChainResolver, XrefIndex, XrefSection,
    XrefWarning,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_types() {
        let name = PdfName::new("Type");
        assert_eq!(name.as_str(), "/Type");

        let string = PdfString::new_literal(b"Hello PDF");
        assert_eq!(string.decode_text(), "Hello PDF");

        let mut array = PdfArray::new();
        array.push(PdfValue::Integer(42));
        array.push(PdfValue::Boolean(true));
        assert_eq!(array.len(), 2);

        let mut dict = PdfDictionary::new();
        dict.insert("Type", PdfValue::Name(PdfName::new("Catalog")));
        assert!(dict.contains_key("Type"));
    }

    #[test]
    fn test_resolver_round_trip() {
        let mut resolver = XrefChainResolver::new();
        let mut revision = resolver.begin_revision(1024, XRefKind::Table);
        revision.add_entry(ObjectId::new(1, 0), ObjectLocation::Offset(15));
        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", PdfValue::Integer(2));
        revision.set_trailer(trailer);

        resolver.resolve(Some(1024));

        assert_eq!(resolver.resolved_kind(), Some(XRefKind::Table));
        let entries = resolver.resolved_entries().unwrap();
        assert_eq!(entries[&ObjectId::new(1, 0)], ObjectLocation::Offset(15));
    }
}
