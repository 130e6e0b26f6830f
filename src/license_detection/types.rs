//! Core data structures for license coverage matching.
//!
//! These are the value types passed between the normalizer, the submatch
//! finder, the URL finder and the aggregator. None of them borrow from one
//! another: a `Match` carries only offsets, so it outlives the `Document`
//! that produced it.

use std::collections::HashMap;

/// The closed set of license families this crate recognizes by name prefix.
///
/// Membership is decided once, at [`CompiledLicense`] construction, by
/// testing each variant's string form as a prefix of the license's `name`
/// in the order declared here — the first match wins. A name that matches
/// no known prefix falls back to [`LicenseType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseType {
    Agpl,
    Apache,
    Bsd,
    Cc,
    Gpl,
    Json,
    Mit,
    Unlicense,
    Zlib,
    Other,
}

impl LicenseType {
    /// Prefixes in the order they are tried. `Other` is the catch-all and
    /// intentionally has no prefix of its own.
    const PREFIXES: &'static [(LicenseType, &'static str)] = &[
        (LicenseType::Agpl, "AGPL"),
        (LicenseType::Apache, "Apache"),
        (LicenseType::Bsd, "BSD"),
        (LicenseType::Cc, "CC"),
        (LicenseType::Gpl, "GPL"),
        (LicenseType::Json, "JSON"),
        (LicenseType::Mit, "MIT"),
        (LicenseType::Unlicense, "Unlicense"),
        (LicenseType::Zlib, "Zlib"),
    ];

    /// Classify a license `name` by the first recognized prefix it starts
    /// with, else [`LicenseType::Other`].
    pub fn from_name(name: &str) -> LicenseType {
        for (ty, prefix) in Self::PREFIXES {
            if name.starts_with(prefix) {
                return *ty;
            }
        }
        LicenseType::Other
    }
}

/// A license template supplied by the caller.
///
/// Either field may be empty, but at least one normally isn't: a record
/// with non-empty `text` contributes a [`CompiledLicense`]; a record with
/// non-empty `url` contributes an entry to the checker's URL table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    pub name: String,
    pub text: String,
    pub url: String,
}

/// The normalized view of an input: a word stream paired with the byte
/// offset each word started at in the original, possibly non-UTF-8, bytes.
///
/// Invariant: `words.len() == byte_off.len()`; `byte_off` is strictly
/// non-decreasing; for every `i`, the byte run of `bytes` starting at
/// `byte_off[i]` with length `words[i].len()` is an ASCII-letter run that
/// normalizes to `words[i]`. `bytes` is the caller's original buffer,
/// unmodified, so offsets into it always index that same buffer.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub bytes: Vec<u8>,
    pub words: Vec<String>,
    pub byte_off: Vec<usize>,
}

impl Document {
    /// The smallest word index `i` with `byte_off[i] >= b`, or `words.len()`
    /// if no such word exists. Used to translate a byte offset (e.g. from a
    /// regex match) into word space.
    pub fn word_offset(&self, b: usize) -> usize {
        for (i, &off) in self.byte_off.iter().enumerate() {
            if off >= b {
                return i;
            }
        }
        self.words.len()
    }
}

/// A license template after normalization and indexing.
#[derive(Debug, Clone)]
pub struct CompiledLicense {
    pub name: String,
    pub license_type: LicenseType,
    pub doc: Document,
    pub start_indexes: HashMap<String, Vec<usize>>,
}

/// An intermediate run (or slop-merged chain of runs) found while comparing
/// one input against one license's word stream. Word-space only; never
/// returned to callers directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submatch {
    pub start: usize,
    pub end: usize,
    pub license_end: usize,
    pub matched: usize,
}

/// A reported finding, after overlap arbitration and byte projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub name: String,
    pub license_type: LicenseType,
    pub percent: f64,
    pub start: usize,
    pub end: usize,
    pub is_url: bool,
}

/// The final result of a [`crate::license_detection::Checker::cover`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coverage {
    pub percent: f64,
    pub matches: Vec<Match>,
}

/// Tuning knobs for the submatch finder.
///
/// Non-positive `min_length`/`slop` are replaced by their defaults in
/// [`Options::resolved`]; `threshold` passes through untouched — it is
/// reserved for callers that want to filter low-quality matches themselves,
/// since [`Coverage::percent`] is reported raw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    pub min_length: i64,
    pub threshold: i64,
    pub slop: i64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            min_length: 20,
            threshold: 40,
            slop: 8,
        }
    }
}

impl Options {
    /// Options with non-positive `min_length`/`slop` replaced by defaults.
    pub fn resolved(self) -> ResolvedOptions {
        let default = Options::default();
        ResolvedOptions {
            min_length: if self.min_length > 0 {
                self.min_length as usize
            } else {
                default.min_length as usize
            },
            slop: if self.slop > 0 {
                self.slop as usize
            } else {
                default.slop as usize
            },
        }
    }
}

/// [`Options`] after defaulting, with fields narrowed to the `usize`
/// domain the matcher actually indexes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub min_length: usize,
    pub slop: usize,
}
