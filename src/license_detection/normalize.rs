//! Text normalization: turns raw bytes into a parallel `(words, byte_off)`
//! pair. Applied identically to license templates and to scanned input, so
//! that normalization noise never changes what can match.

use crate::license_detection::types::Document;

/// Filler words dropped after lowercasing. These show up in nearly every
/// copyright header (`Copyright (c) <YEAR> <HOLDER>`) and would otherwise
/// anchor spurious short runs or dilute coverage percentages without
/// telling us anything about which license is present.
const FILLER_WORDS: &[&str] = &["copyright", "c", "year", "holder", "holders"];

/// Normalize `input` into a [`Document`].
///
/// Runs of ASCII letters become words; everything else, including invalid
/// UTF-8, is a token separator and is dropped without being decoded. Only
/// the ASCII-letter runs themselves are ever turned into a `String`, so
/// non-UTF-8 bytes elsewhere in `input` are inert: they can't shift word
/// offsets or corrupt a word, and `byte_off` always indexes `input` itself.
/// Never fails: empty input yields an empty `Document`.
pub fn normalize(input: &[u8]) -> Document {
    let mut words = Vec::new();
    let mut byte_off = Vec::new();

    let mut i = 0;
    while i < input.len() {
        if input[i].is_ascii_alphabetic() {
            let start = i;
            while i < input.len() && input[i].is_ascii_alphabetic() {
                i += 1;
            }
            // Safe: the run is restricted to `is_ascii_alphabetic` bytes.
            let word = std::str::from_utf8(&input[start..i])
                .expect("ASCII-alphabetic byte run is valid UTF-8")
                .to_ascii_lowercase();
            if !FILLER_WORDS.contains(&word.as_str()) {
                words.push(word);
                byte_off.push(start);
            }
        } else {
            i += 1;
        }
    }

    Document {
        bytes: input.to_vec(),
        words,
        byte_off,
    }
}
