// File:    classifier.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Classifies decoded bytes into the character classes that drive the fitness weights.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Character classification of decoded bytes.
//!
//! Every byte value maps to exactly one [`CharClass`]. The mapping is a
//! constant 256-entry table, so classification is a single index.

/// The class of a decoded byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// The ASCII space.
    Space,
    /// `a`..=`z`, carrying the alphabet index 0..=25.
    Lower(u8),
    /// `A`..=`Z`, carrying the case-folded alphabet index 0..=25.
    Upper(u8),
    /// `0`..=`9`.
    Digit,
    /// Typographic punctuation: `! " ' , . : ? - $ % ( )`.
    Typo,
    /// Other printable specials: ``# & * + ; < = > @ [ \ ] ^ _ { | } ~ ` ``.
    Other,
    /// Everything else, including control bytes and bytes above 0x7f.
    Invalid,
}

impl CharClass {
    /// Returns the case-folded alphabet index for letters.
    #[must_use]
    pub const fn letter(self) -> Option<u8> {
        match self {
            Self::Lower(index) | Self::Upper(index) => Some(index),
            _ => None,
        }
    }
}

const TYPOGRAPHIC: &[u8] = b"!\"',.:?-$%()";
const OTHER_SPECIAL: &[u8] = b"#&*+;<=>@[\\]^_{|}~`";

/// Marks that close a sentence or clause and take part in the context rules.
const SENTENCE_PUNCTUATION: &[u8] = b".,!";

const fn contains(set: &[u8], byte: u8) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] == byte {
            return true;
        }
        i += 1;
    }
    false
}

const fn class_of(byte: u8) -> CharClass {
    match byte {
        b' ' => CharClass::Space,
        b'a'..=b'z' => CharClass::Lower(byte - b'a'),
        b'A'..=b'Z' => CharClass::Upper(byte - b'A'),
        b'0'..=b'9' => CharClass::Digit,
        _ if contains(TYPOGRAPHIC, byte) => CharClass::Typo,
        _ if contains(OTHER_SPECIAL, byte) => CharClass::Other,
        _ => CharClass::Invalid,
    }
}

const fn build_table() -> [CharClass; 256] {
    let mut table = [CharClass::Invalid; 256];
    let mut byte: u8 = 0;
    loop {
        table[byte as usize] = class_of(byte);
        if byte == u8::MAX {
            break;
        }
        byte += 1;
    }
    table
}

static CLASS_TABLE: [CharClass; 256] = build_table();

/// Classifies a decoded byte.
#[must_use]
pub fn classify(byte: u8) -> CharClass {
    CLASS_TABLE[usize::from(byte)]
}

/// Whether `byte` is one of `.`, `,` or `!`.
#[must_use]
pub const fn is_sentence_punctuation(byte: u8) -> bool {
    contains(SENTENCE_PUNCTUATION, byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_carry_their_alphabet_index() {
        assert_eq!(classify(b'a'), CharClass::Lower(0));
        assert_eq!(classify(b'z'), CharClass::Lower(25));
        assert_eq!(classify(b'A'), CharClass::Upper(0));
        assert_eq!(classify(b'Q'), CharClass::Upper(16));
        assert_eq!(classify(b'q').letter(), classify(b'Q').letter());
    }

    #[test]
    fn every_listed_symbol_lands_in_its_class() {
        for &byte in TYPOGRAPHIC {
            assert_eq!(classify(byte), CharClass::Typo, "{:?}", byte as char);
        }
        for &byte in OTHER_SPECIAL {
            assert_eq!(classify(byte), CharClass::Other, "{:?}", byte as char);
        }
        for byte in b'0'..=b'9' {
            assert_eq!(classify(byte), CharClass::Digit);
        }
        assert_eq!(classify(b' '), CharClass::Space);
    }

    #[test]
    fn unlisted_bytes_are_invalid() {
        for byte in [b'/', b'\t', b'\n', b'\r', 0x00, 0x7f, 0x80, 0xe9, 0xff] {
            assert_eq!(classify(byte), CharClass::Invalid, "{byte:#04x}");
        }
    }

    #[test]
    fn printable_ascii_coverage_is_complete() {
        // Only '/' is printable and unclassified.
        let invalid: Vec<u8> = (0x20..0x7f)
            .filter(|&b| classify(b) == CharClass::Invalid)
            .collect();
        assert_eq!(invalid, vec![b'/']);
    }

    #[test]
    fn sentence_punctuation_is_a_subset_of_typographic() {
        for byte in 0..=u8::MAX {
            if is_sentence_punctuation(byte) {
                assert_eq!(classify(byte), CharClass::Typo);
            }
        }
        assert!(is_sentence_punctuation(b'!'));
        assert!(!is_sentence_punctuation(b'?'));
    }
}
