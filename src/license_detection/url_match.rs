//! URL-based license detection: finds HTTP(S) URLs in the gaps
//! between text matches and resolves them against a URL → license-name
//! table.

use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::collections::HashMap;
use std::ops::Range;

use crate::license_detection::types::{Document, LicenseType, Match};

/// Resolve a canonical URL to `(name, type)`, deriving `type` from `name`
/// the same way text matches do (renaming happens before this table is
/// built, so the name here is already the reported name).
fn resolve(name: &str) -> (String, LicenseType) {
    (name.to_string(), LicenseType::from_name(name))
}

/// `https?://<dot-separated labels ending in .org or com>/<path segments>/?`
///
/// Matched over raw bytes, not decoded text: this keeps URL detection
/// unaffected by invalid UTF-8 elsewhere in the input. Every character
/// class here is ASCII, so a match is always valid UTF-8 on its own.
///
/// Compiled once at startup; a failure here is a build-time configuration
/// bug (an invalid hand-written pattern), not a runtime error, so it is
/// `expect`-ed rather than surfaced as a `Result`.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://[-a-z0-9_.]+\.(?:org|com)(?:/[-a-z0-9_.#?=]+)+/?")
        .expect("static URL_PATTERN must compile")
});

/// Minimum gap width, in words, worth searching for a URL at all.
const MIN_GAP_WORDS: usize = 3;

/// Canonicalize a URL substring for lookup in the checker's URL table:
/// strip one leading scheme, one trailing slash, a trailing `/legalcode`,
/// then lowercase.
pub fn canonicalize_url(raw: &str) -> String {
    let without_scheme = raw
        .strip_prefix("http://")
        .or_else(|| raw.strip_prefix("https://"))
        .unwrap_or(raw);
    let without_trailing_slash = without_scheme
        .strip_suffix('/')
        .unwrap_or(without_scheme);
    let without_legalcode = without_trailing_slash
        .strip_suffix("/legalcode")
        .unwrap_or(without_trailing_slash);
    without_legalcode.to_ascii_lowercase()
}

/// Search the given `gaps` (byte ranges into `doc.bytes`) for URLs that
/// resolve against `urls`, emitting a URL-flagged [`Match`] per hit.
///
/// A gap narrower than [`MIN_GAP_WORDS`] words is skipped outright.
pub fn find_url_matches(
    doc: &Document,
    gaps: &[Range<usize>],
    urls: &HashMap<String, String>,
) -> Vec<Match> {
    let mut found = Vec::new();

    for gap in gaps {
        let start_word = doc.word_offset(gap.start);
        let end_word = doc.word_offset(gap.end);
        if end_word.saturating_sub(start_word) < MIN_GAP_WORDS {
            continue;
        }

        let Some(slice) = doc.bytes.get(gap.clone()) else {
            continue;
        };

        for m in URL_PATTERN.find_iter(slice) {
            let matched = std::str::from_utf8(m.as_bytes())
                .expect("URL_PATTERN only matches ASCII bytes");
            let canonical = canonicalize_url(matched);
            let Some(name) = urls.get(&canonical) else {
                continue;
            };
            let (name, license_type) = resolve(name);

            let url_start = gap.start + m.start();
            let url_end = gap.start + m.end();
            found.push(Match {
                name: name.clone(),
                license_type,
                percent: 100.0,
                start: doc.word_offset(url_start),
                end: doc.word_offset(url_end),
                is_url: true,
            });
            log::debug!("resolved URL {} to license {}", canonical, name);
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_detection::normalize::normalize;

    fn url_table() -> HashMap<String, String> {
        let mut m = HashMap::new();
        m.insert(
            "opensource.org/licenses/mit".to_string(),
            "MIT".to_string(),
        );
        m
    }

    #[test]
    fn canonicalizes_scheme_slash_and_case() {
        assert_eq!(
            canonicalize_url("HTTPS://Opensource.org/Licenses/MIT/"),
            "opensource.org/licenses/mit"
        );
        assert_eq!(
            canonicalize_url("http://opensource.org/licenses/mit"),
            "opensource.org/licenses/mit"
        );
    }

    #[test]
    fn canonicalizes_trailing_legalcode() {
        assert_eq!(
            canonicalize_url("https://creativecommons.org/licenses/by/4.0/legalcode"),
            "creativecommons.org/licenses/by/4.0"
        );
    }

    #[test]
    fn finds_and_resolves_url_in_whole_document() {
        let doc = normalize(b"See https://opensource.org/licenses/MIT for terms.");
        let gap = 0..doc.bytes.len();
        let matches = find_url_matches(&doc, &[gap], &url_table());

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "MIT");
        assert_eq!(matches[0].percent, 100.0);
        assert!(matches[0].is_url);
        assert!(matches[0].start < matches[0].end);
    }

    #[test]
    fn skips_gap_shorter_than_three_words() {
        // "MIT https://opensource.org/licenses/MIT" has a URL, but the
        // word count check applies to the *gap*, not the URL itself --
        // here the gap is the whole (short) document.
        let short_doc = normalize(b"aa");
        let short_gap = 0..short_doc.bytes.len();
        let matches = find_url_matches(&short_doc, &[short_gap], &url_table());
        assert!(matches.is_empty());
    }

    #[test]
    fn unresolvable_url_yields_no_match() {
        let doc = normalize(b"See https://example.com/licenses/unknown for terms here");
        let gap = 0..doc.bytes.len();
        let matches = find_url_matches(&doc, &[gap], &url_table());
        assert!(matches.is_empty());
    }

    #[test]
    fn invalid_utf8_in_gap_does_not_prevent_a_later_url_match() {
        let mut bytes = vec![0xff, 0xfe];
        bytes.extend_from_slice(b"See https://opensource.org/licenses/MIT for terms.");
        let doc = normalize(&bytes);
        let gap = 0..doc.bytes.len();
        let matches = find_url_matches(&doc, &[gap], &url_table());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "MIT");
    }
}
