//! Greedy longest-run submatch finder.
//!
//! This is the heart of the matching engine: a heuristic, noise-tolerant
//! approximate-substring search over normalized word streams. It does not
//! attempt to find an optimal alignment — it walks the input once, at each
//! position picking the longest run any candidate license anchor offers,
//! and stitches nearby runs together under a slop budget.

use crate::license_detection::types::{CompiledLicense, ResolvedOptions, Submatch};

/// Find every submatch of `words` against `license`, admitting runs longer
/// than `opts.min_length` and bridging gaps up to `opts.slop` input words.
pub fn find_submatches(
    license: &CompiledLicense,
    words: &[String],
    opts: &ResolvedOptions,
) -> Vec<Submatch> {
    let mut submatches: Vec<Submatch> = Vec::new();
    let mut k = 0usize;

    while k < words.len() {
        let (match_length, match_index) = longest_run(license, words, k);

        if match_length > opts.min_length {
            let end = k + match_length;
            let license_end = match_index + match_length;

            let merged = submatches.last_mut().is_some_and(|s| {
                s.end + opts.slop >= k && match_index >= s.license_end
            });

            if merged {
                let s = submatches.last_mut().expect("checked by `merged` above");
                log::trace!(
                    "{}: merging submatch across gap of {} words (k={}, license_end={})",
                    license.name,
                    k.saturating_sub(s.end),
                    k,
                    license_end
                );
                s.end = end;
                s.matched += match_length;
                s.license_end = license_end;
            } else {
                log::trace!(
                    "{}: admitting new submatch at {}, length {}",
                    license.name,
                    k,
                    match_length
                );
                submatches.push(Submatch {
                    start: k,
                    end,
                    license_end,
                    matched: match_length,
                });
            }

            k = end - 1;
        } else {
            k += 1;
        }
    }

    submatches
}

/// For input position `k`, find the longest run against any candidate
/// license anchor for `words[k]`. Returns `(length, license_start_index)`;
/// `(0, 0)` if there is no candidate at all. Ties keep the first candidate
/// encountered, i.e. the earliest position in the license's start-index
/// bucket.
fn longest_run(license: &CompiledLicense, words: &[String], k: usize) -> (usize, usize) {
    let Some(candidates) = license.start_indexes.get(&words[k]) else {
        return (0, 0);
    };

    let mut best_length = 0usize;
    let mut best_index = 0usize;

    for &p in candidates {
        let mut length = 0usize;
        while k + length < words.len()
            && p + length < license.doc.words.len()
            && words[k + length] == license.doc.words[p + length]
        {
            length += 1;
        }
        if length > best_length {
            best_length = length;
            best_index = p;
        }
    }

    (best_length, best_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_detection::index::build_start_indexes;
    use crate::license_detection::normalize::normalize;
    use crate::license_detection::types::{CompiledLicense, LicenseType};

    fn compiled(text: &str) -> CompiledLicense {
        let doc = normalize(text.as_bytes());
        let start_indexes = build_start_indexes(&doc.words);
        CompiledLicense {
            name: "Test".to_string(),
            license_type: LicenseType::Other,
            doc,
            start_indexes,
        }
    }

    fn words(text: &str) -> Vec<String> {
        normalize(text.as_bytes()).words
    }

    fn default_opts() -> ResolvedOptions {
        ResolvedOptions {
            min_length: 3,
            slop: 2,
        }
    }

    #[test]
    fn exact_match_is_one_submatch_spanning_everything() {
        let license_text =
            "permission is hereby granted free of charge to any person obtaining a copy";
        let license = compiled(license_text);
        let input = words(license_text);
        let submatches = find_submatches(&license, &input, &default_opts());

        assert_eq!(submatches.len(), 1);
        assert_eq!(submatches[0].start, 0);
        assert_eq!(submatches[0].end, input.len());
        assert_eq!(submatches[0].matched, input.len());
    }

    #[test]
    fn too_short_run_is_never_admitted() {
        let license = compiled("permission is hereby granted free of charge");
        let input = words("permission is hereby granted");
        let opts = ResolvedOptions {
            min_length: 20,
            slop: 8,
        };
        let submatches = find_submatches(&license, &input, &opts);
        assert!(submatches.is_empty());
    }

    #[test]
    fn slop_bridges_a_copyright_style_gap() {
        // "... granted [noise] free of charge ..." -- the bracketed noise
        // represents a variable region (a name, say) that isn't in the
        // license template at all.
        let license = compiled("permission is hereby granted free of charge to any person");
        let input = words("permission is hereby granted zzz zzz free of charge to any person");
        let opts = ResolvedOptions {
            min_length: 3,
            slop: 3,
        };
        let submatches = find_submatches(&license, &input, &opts);

        assert_eq!(submatches.len(), 1, "the two runs should merge into one");
        assert_eq!(submatches[0].start, 0);
        assert_eq!(submatches[0].end, input.len());
        // matched excludes the two noise words, even though they're inside
        // the merged [start, end) span.
        assert_eq!(submatches[0].matched, input.len() - 2);
    }

    #[test]
    fn license_end_monotonicity_blocks_backwards_merge() {
        // A submatch that would require the license cursor to go backwards
        // must start a new submatch instead of merging.
        let license = compiled("alpha beta gamma delta epsilon zeta eta theta iota kappa");
        // First run matches "delta epsilon zeta eta theta" (license_end ~9).
        // Second run repeats "alpha beta gamma" -- earlier in the license --
        // separated by one filler word, within slop.
        let input = words("delta epsilon zeta eta theta zzz alpha beta gamma");
        let opts = ResolvedOptions {
            min_length: 2,
            slop: 5,
        };
        let submatches = find_submatches(&license, &input, &opts);
        assert_eq!(
            submatches.len(),
            2,
            "backwards jump in the license must start a new submatch"
        );
    }

    #[test]
    fn same_input_can_match_same_license_twice() {
        let license = compiled("alpha beta gamma delta epsilon");
        let input = words("alpha beta gamma delta epsilon alpha beta gamma delta epsilon");
        let opts = ResolvedOptions {
            min_length: 2,
            slop: 0,
        };
        let submatches = find_submatches(&license, &input, &opts);
        assert_eq!(submatches.len(), 2);
        assert_eq!(submatches[0].start, 0);
        assert_eq!(submatches[1].start, 5);
    }

    #[test]
    fn no_candidate_word_advances_cursor_by_one() {
        let license = compiled("alpha beta gamma");
        let input = words("zzz yyy xxx");
        let submatches = find_submatches(&license, &input, &default_opts());
        assert!(submatches.is_empty());
    }
}
