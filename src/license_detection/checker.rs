//! The Checker façade: holds a compiled license set and a URL
//! table, and exposes the single public entry point, [`Checker::cover`].

use std::collections::HashMap;

use once_cell::sync::OnceCell;

use crate::license_detection::aggregate::{
    arbitrate_overlaps, coverage_percent, project_to_bytes, submatches_to_matches,
    word_space_gaps,
};
use crate::license_detection::license::compile_license;
use crate::license_detection::normalize::normalize;
use crate::license_detection::seq_match::find_submatches;
use crate::license_detection::types::{CompiledLicense, Coverage, License, Options};
use crate::license_detection::url_match::{canonicalize_url, find_url_matches};

/// A compiled matcher over a fixed set of license templates and a URL
/// table. Immutable after construction, so a single `Checker` can be
/// shared across concurrent [`Checker::cover`] calls without
/// synchronization.
#[derive(Debug, Clone, Default)]
pub struct Checker {
    licenses: Vec<CompiledLicense>,
    urls: HashMap<String, String>,
}

impl Checker {
    /// Compile `licenses` into a `Checker`.
    ///
    /// A record with non-empty `text` contributes a compiled license; a
    /// record with non-empty `url` contributes a URL-table entry (stored
    /// canonicalized). Both fields may be set on one record. Duplicate
    /// canonical URLs: last write wins.
    pub fn new(licenses: impl IntoIterator<Item = License>) -> Checker {
        let mut compiled = Vec::new();
        let mut urls = HashMap::new();

        for license in licenses {
            if let Some(c) = compile_license(&license) {
                compiled.push(c);
            }
            if !license.url.is_empty() {
                urls.insert(canonicalize_url(&license.url), license.name.clone());
            }
        }

        log::debug!(
            "compiled checker with {} license templates and {} URL entries",
            compiled.len(),
            urls.len()
        );

        Checker {
            licenses: compiled,
            urls,
        }
    }

    /// Classify `input` against every compiled license and the URL table.
    /// Returns `(Coverage, false)` iff nothing at all was found.
    pub fn cover(&self, input: &[u8], options: Options) -> (Coverage, bool) {
        let doc = normalize(input);
        let resolved = options.resolved();

        let mut matches = Vec::new();
        for license in &self.licenses {
            let submatches = find_submatches(license, &doc.words, &resolved);
            matches.extend(submatches_to_matches(license, &submatches));
        }

        if matches.is_empty() {
            let gaps = vec![0..doc.bytes.len()];
            let url_matches = find_url_matches(&doc, &gaps, &self.urls);
            if url_matches.is_empty() {
                return (Coverage::default(), false);
            }
            let mut url_matches = url_matches;
            url_matches.sort_by_key(|m| m.start);
            let percent = coverage_percent(&url_matches, doc.words.len());
            let projected = project_to_bytes(&doc, url_matches);
            return (
                Coverage {
                    percent,
                    matches: projected,
                },
                true,
            );
        }

        let mut matches = arbitrate_overlaps(matches);
        let gaps = word_space_gaps(&doc, &matches);
        let url_matches = find_url_matches(&doc, &gaps, &self.urls);
        matches.extend(url_matches);
        matches.sort_by_key(|m| m.start);

        let percent = coverage_percent(&matches, doc.words.len());
        let projected = project_to_bytes(&doc, matches);
        (
            Coverage {
                percent,
                matches: projected,
            },
            true,
        )
    }
}

/// Backing storage for [`install_global_checker`]/[`global_checker`]:
/// the mechanism for a package-scoped singleton `Checker`, without a
/// bundled corpus.
static GLOBAL_CHECKER: OnceCell<Checker> = OnceCell::new();

/// Install `checker` as the process-wide default, if one hasn't been
/// installed yet. Returns `Ok(())` on success, or `Err(checker)` handing
/// the rejected checker back to the caller if a global was already set.
/// Never panics.
pub fn install_global_checker(checker: Checker) -> Result<(), Checker> {
    GLOBAL_CHECKER.set(checker)
}

/// The process-wide default `Checker`, if one has been installed.
pub fn global_checker() -> Option<&'static Checker> {
    GLOBAL_CHECKER.get()
}
