use crate::encoding::{PdfDocEncoding, TextEncoding};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PdfName(String);

impl PdfName {
    pub fn new<S: Into<String>>(name: S) -> Self {
        let mut name = name.into();
        if !name.starts_with('/') {
            name = format!("/{}", name);
        }
        PdfName(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn without_slash(&self) -> &str {
        self.0.strip_prefix('/').unwrap_or(&self.0)
    }
}

impl fmt::Display for PdfName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PdfName {
    fn from(s: &str) -> Self {
        PdfName::new(s)
    }
}

impl From<String> for PdfName {
    fn from(s: String) -> Self {
        PdfName::new(s)
    }
}

impl PartialEq<str> for PdfName {
    fn eq(&self, other: &str) -> bool {
        self.without_slash() == other || self.as_str() == other
    }
}

impl PartialEq<&str> for PdfName {
    fn eq(&self, other: &&str) -> bool {
        self.without_slash() == *other || self.as_str() == *other
    }
}

impl AsRef<str> for PdfName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A text string as stored in a dictionary, either literal `(...)` or
/// hexadecimal `<...>` form. The bytes are kept raw; character decoding is
/// applied on demand because the stored encoding (UTF-16 with byte-order mark,
/// otherwise PDFDoc encoding) is only known at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PdfString {
    Literal(Vec<u8>),
    Hexadecimal(Vec<u8>),
}

impl PdfString {
    pub fn new_literal<B: Into<Vec<u8>>>(bytes: B) -> Self {
        PdfString::Literal(bytes.into())
    }

    pub fn new_hex<B: Into<Vec<u8>>>(bytes: B) -> Self {
        PdfString::Hexadecimal(bytes.into())
    }

    /// Builds a literal string from text, using PDFDoc encoding when every
    /// character maps, otherwise UTF-16BE with a leading byte-order mark.
    pub fn from_text(text: &str) -> Self {
        let encoding = PdfDocEncoding;
        if text.chars().all(|c| encoding.supports(c)) {
            PdfString::Literal(encoding.encode(text))
        } else {
            PdfString::Literal(utf16_be_bytes(text))
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PdfString::Literal(b) | PdfString::Hexadecimal(b) => b,
        }
    }

    /// Decodes the stored bytes to text: UTF-16 when a byte-order mark is
    /// present, PDFDoc encoding otherwise.
    pub fn decode_text(&self) -> String {
        let bytes = self.as_bytes();

        if bytes.starts_with(&[0xFE, 0xFF]) {
            utf16_be(&bytes[2..])
        } else if bytes.starts_with(&[0xFF, 0xFE]) {
            utf16_le(&bytes[2..])
        } else {
            PdfDocEncoding.decode(bytes)
        }
    }
}

impl fmt::Display for PdfString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfString::Literal(bytes) => {
                write!(f, "({})", String::from_utf8_lossy(bytes))
            }
            PdfString::Hexadecimal(bytes) => {
                write!(f, "<")?;
                for byte in bytes {
                    write!(f, "{:02X}", byte)?;
                }
                write!(f, ">")
            }
        }
    }
}

impl From<&str> for PdfString {
    fn from(s: &str) -> Self {
        PdfString::from_text(s)
    }
}

impl From<Vec<u8>> for PdfString {
    fn from(bytes: Vec<u8>) -> Self {
        PdfString::new_literal(bytes)
    }
}

fn utf16_be(v: &[u8]) -> String {
    let units: Vec<u16> = v
        .chunks_exact(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

fn utf16_le(v: &[u8]) -> String {
    let units: Vec<u16> = v
        .chunks_exact(2)
        .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

fn utf16_be_bytes(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}
