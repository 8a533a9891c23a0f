//! PDFDoc character encoding.
//!
//! Text strings without a UTF-16 byte-order mark use a fixed single-byte
//! encoding defined in Annex D of the PDF specification: ISO 8859-1 as the
//! baseline, with substitutions in the 0x18..=0x1F control range, at 0x7F and
//! 0x9F (unassigned), in the 0x80..=0x9F range (typographic punctuation and
//! ligatures) and at 0xA0 (euro sign).

use std::collections::HashMap;
use std::sync::OnceLock;

/// Byte encode/decode contract for a document text-string charset.
pub trait TextEncoding {
    /// Decodes raw string bytes to text.
    fn decode(&self, bytes: &[u8]) -> String;

    /// Encodes text back to string bytes, substituting `0x00` for characters
    /// the charset cannot represent.
    fn encode(&self, text: &str) -> Vec<u8>;

    /// Returns whether the charset can represent `c`.
    fn supports(&self, c: char) -> bool;
}

/// The PDFDoc single-byte encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfDocEncoding;

/// Code points that differ from the ISO 8859-1 baseline.
const DEVIATIONS: [(u8, char); 42] = [
    (0x18, '\u{02D8}'), // breve
    (0x19, '\u{02C7}'), // caron
    (0x1A, '\u{02C6}'), // modifier letter circumflex accent
    (0x1B, '\u{02D9}'), // dot above
    (0x1C, '\u{02DD}'), // double acute accent
    (0x1D, '\u{02DB}'), // ogonek
    (0x1E, '\u{02DA}'), // ring above
    (0x1F, '\u{02DC}'), // small tilde
    (0x7F, '\u{FFFD}'), // unassigned
    (0x80, '\u{2022}'), // bullet
    (0x81, '\u{2020}'), // dagger
    (0x82, '\u{2021}'), // double dagger
    (0x83, '\u{2026}'), // horizontal ellipsis
    (0x84, '\u{2014}'), // em dash
    (0x85, '\u{2013}'), // en dash
    (0x86, '\u{0192}'), // florin
    (0x87, '\u{2044}'), // fraction slash
    (0x88, '\u{2039}'), // single left-pointing angle quotation mark
    (0x89, '\u{203A}'), // single right-pointing angle quotation mark
    (0x8A, '\u{2212}'), // minus sign
    (0x8B, '\u{2030}'), // per mille sign
    (0x8C, '\u{201E}'), // double low-9 quotation mark
    (0x8D, '\u{201C}'), // left double quotation mark
    (0x8E, '\u{201D}'), // right double quotation mark
    (0x8F, '\u{2018}'), // left single quotation mark
    (0x90, '\u{2019}'), // right single quotation mark
    (0x91, '\u{201A}'), // single low-9 quotation mark
    (0x92, '\u{2122}'), // trade mark sign
    (0x93, '\u{FB01}'), // fi ligature
    (0x94, '\u{FB02}'), // fl ligature
    (0x95, '\u{0141}'), // capital L with stroke
    (0x96, '\u{0152}'), // capital ligature OE
    (0x97, '\u{0160}'), // capital S with caron
    (0x98, '\u{0178}'), // capital Y with diaeresis
    (0x99, '\u{017D}'), // capital Z with caron
    (0x9A, '\u{0131}'), // dotless i
    (0x9B, '\u{0142}'), // small l with stroke
    (0x9C, '\u{0153}'), // small ligature oe
    (0x9D, '\u{0161}'), // small s with caron
    (0x9E, '\u{017E}'), // small z with caron
    (0x9F, '\u{FFFD}'), // unassigned
    (0xA0, '\u{20AC}'), // euro sign
];

const fn build_code_to_char() -> [char; 256] {
    let mut table = ['\0'; 256];
    let mut code = 0;
    while code < 256 {
        table[code] = code as u8 as char;
        code += 1;
    }
    let mut i = 0;
    while i < DEVIATIONS.len() {
        let (code, ch) = DEVIATIONS[i];
        table[code as usize] = ch;
        i += 1;
    }
    table
}

static CODE_TO_CHAR: [char; 256] = build_code_to_char();

fn char_to_code() -> &'static HashMap<char, u8> {
    static MAP: OnceLock<HashMap<char, u8>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut map = HashMap::with_capacity(256);
        for (code, ch) in CODE_TO_CHAR.iter().enumerate() {
            // The two unassigned codes decode to U+FFFD but nothing encodes
            // back to them.
            if *ch != char::REPLACEMENT_CHARACTER {
                map.insert(*ch, code as u8);
            }
        }
        map
    })
}

impl TextEncoding for PdfDocEncoding {
    fn decode(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| CODE_TO_CHAR[b as usize]).collect()
    }

    fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .map(|c| char_to_code().get(&c).copied().unwrap_or(0))
            .collect()
    }

    fn supports(&self, c: char) -> bool {
        char_to_code().contains_key(&c)
    }
}
