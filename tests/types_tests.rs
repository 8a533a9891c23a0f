use pdf_xref::{PdfDictionary, PdfName, PdfReference, PdfString, PdfValue};

#[test]
fn test_name_normalization_and_equality() {
    let with_slash = PdfName::new("/Prev");
    let without_slash = PdfName::new("Prev");
    assert_eq!(with_slash, without_slash);
    assert_eq!(with_slash.as_str(), "/Prev");
    assert_eq!(without_slash.without_slash(), "Prev");
    assert!(with_slash == "Prev");
    assert!(with_slash == "/Prev");
}

#[test]
fn test_dictionary_merge_overwrites_and_keeps_unrelated_keys() {
    let mut base = PdfDictionary::new();
    base.insert("Size", PdfValue::Integer(4));
    base.insert("Root", PdfValue::Reference(PdfReference::new(1, 0)));

    let mut update = PdfDictionary::new();
    update.insert("Size", PdfValue::Integer(6));
    update.insert("Info", PdfValue::Reference(PdfReference::new(5, 0)));

    base.merge(&update);

    assert_eq!(base.len(), 3);
    assert_eq!(base.get("Size").and_then(|v| v.as_integer()), Some(6));
    assert!(base.contains_key("Root"));
    assert!(base.contains_key("Info"));
}

#[test]
fn test_dictionary_preserves_insertion_order() {
    let mut dict = PdfDictionary::new();
    dict.insert("Size", PdfValue::Integer(4));
    dict.insert("Prev", PdfValue::Integer(100));
    dict.insert("Root", PdfValue::Reference(PdfReference::new(1, 0)));

    let keys: Vec<String> = dict.keys().map(|k| k.without_slash().to_string()).collect();
    assert_eq!(keys, vec!["Size", "Prev", "Root"]);
}

#[test]
fn test_value_accessors_reject_other_variants() {
    let value = PdfValue::Integer(700);
    assert_eq!(value.as_integer(), Some(700));
    assert!(value.as_name().is_none());
    assert!(value.as_dict().is_none());
    assert_eq!(value.as_real(), Some(700.0));
    assert_eq!(value.type_name(), "integer");

    let reference = PdfValue::Reference(PdfReference::new(3, 1));
    assert_eq!(reference.as_reference().map(|r| r.number()), Some(3));
    assert!(reference.as_integer().is_none());
}

#[test]
fn test_string_decodes_utf16_with_byte_order_mark() {
    let be = PdfString::new_literal(vec![0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69]);
    assert_eq!(be.decode_text(), "Hi");

    let le = PdfString::new_literal(vec![0xFF, 0xFE, 0x48, 0x00, 0x69, 0x00]);
    assert_eq!(le.decode_text(), "Hi");
}

#[test]
fn test_string_decodes_pdfdoc_bytes_without_mark() {
    let s = PdfString::new_literal(vec![b'c', b'a', b'f', 0xE9, b' ', 0x80]);
    assert_eq!(s.decode_text(), "café \u{2022}");
}

#[test]
fn test_from_text_prefers_pdfdoc_encoding() {
    let s = PdfString::from_text("caf\u{E9}");
    assert_eq!(s.as_bytes(), &[b'c', b'a', b'f', 0xE9]);
    assert_eq!(s.decode_text(), "caf\u{E9}");
}

#[test]
fn test_from_text_falls_back_to_utf16_for_unmappable_text() {
    let s = PdfString::from_text("\u{4E2D}\u{6587}");
    assert!(s.as_bytes().starts_with(&[0xFE, 0xFF]));
    assert_eq!(s.decode_text(), "\u{4E2D}\u{6587}");
}

#[test]
fn test_display_forms() {
    let mut dict = PdfDictionary::new();
    dict.insert("Size", PdfValue::Integer(4));
    dict.insert("Root", PdfValue::Reference(PdfReference::new(1, 0)));
    assert_eq!(dict.to_string(), "<</Size 4 /Root 1 0 R>>");

    let hex = PdfString::new_hex(vec![0xDE, 0xAD]);
    assert_eq!(hex.to_string(), "<DEAD>");
}
