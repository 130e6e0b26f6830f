//! Aggregation: turning per-license submatches into the final disjoint,
//! byte-projected [`Coverage`].

use std::ops::Range;

use crate::license_detection::types::{CompiledLicense, Document, Match, Submatch};

/// Fixed renaming applied at Match construction time, so that
/// multiple templates representing "the same" license report one name.
const RENAMES: &[(&str, &str)] = &[("Apache-2.0-User", "Apache-2.0")];

fn reported_name(name: &str) -> &str {
    RENAMES
        .iter()
        .find_map(|(from, to)| (*from == name).then_some(*to))
        .unwrap_or(name)
}

/// Convert one license's submatches into word-space Matches, applying the
/// renaming and the `percent = 100 * matched / len(license words)`
/// formula.
pub fn submatches_to_matches(license: &CompiledLicense, submatches: &[Submatch]) -> Vec<Match> {
    let license_len = license.doc.words.len();
    submatches
        .iter()
        .map(|s| Match {
            name: reported_name(&license.name).to_string(),
            license_type: license.license_type,
            percent: if license_len == 0 {
                0.0
            } else {
                100.0 * s.matched as f64 / license_len as f64
            },
            start: s.start,
            end: s.end,
            is_url: false,
        })
        .collect()
}

fn overlaps(a: &Match, b: &Match) -> bool {
    a.start < b.end && b.start < a.end
}

fn weighted_word_count(m: &Match) -> f64 {
    m.percent * (m.end - m.start) as f64
}

/// Resolve overlaps among word-space Matches: for every overlapping
/// pair, discard the one with the smaller weighted word count; ties keep
/// the earlier match in `matches`' current order. Returns the survivors,
/// sorted by `start` ascending.
pub fn arbitrate_overlaps(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by_key(|m| m.start);

    let mut alive = vec![true; matches.len()];
    for i in 0..matches.len() {
        if !alive[i] {
            continue;
        }
        for j in (i + 1)..matches.len() {
            if !alive[j] {
                continue;
            }
            if !overlaps(&matches[i], &matches[j]) {
                continue;
            }
            let wi = weighted_word_count(&matches[i]);
            let wj = weighted_word_count(&matches[j]);
            if wj > wi {
                log::debug!(
                    "arbitration: dropping {} [{}, {}) in favor of {} [{}, {})",
                    matches[i].name, matches[i].start, matches[i].end,
                    matches[j].name, matches[j].start, matches[j].end,
                );
                alive[i] = false;
                break;
            } else {
                log::debug!(
                    "arbitration: dropping {} [{}, {}) in favor of {} [{}, {})",
                    matches[j].name, matches[j].start, matches[j].end,
                    matches[i].name, matches[i].start, matches[i].end,
                );
                alive[j] = false;
            }
        }
    }

    matches
        .into_iter()
        .zip(alive)
        .filter_map(|(m, keep)| keep.then_some(m))
        .collect()
}

/// Word-space gaps between consecutive matches in an already-sorted,
/// disjoint `matches` slice, plus the gaps before the first and after the
/// last. Each gap is expressed as a byte range into `doc.bytes` so the URL
/// finder can search it directly.
pub fn word_space_gaps(doc: &Document, matches: &[Match]) -> Vec<Range<usize>> {
    let byte_at = |word_idx: usize| -> usize {
        if word_idx == 0 {
            0
        } else if word_idx >= doc.words.len() {
            doc.bytes.len()
        } else {
            doc.byte_off[word_idx]
        }
    };

    if matches.is_empty() {
        return vec![0..doc.bytes.len()];
    }

    let mut gaps = Vec::with_capacity(matches.len() + 1);
    gaps.push(0..byte_at(matches[0].start));
    for w in matches.windows(2) {
        gaps.push(byte_at(w[0].end)..byte_at(w[1].start));
    }
    gaps.push(byte_at(matches[matches.len() - 1].end)..doc.bytes.len());
    gaps.retain(|g| g.start < g.end);
    gaps
}

/// Overall coverage percent and per-match start/end positions used
/// for crediting. Assumes `matches` is already sorted and disjoint.
fn credited_words(matches: &[Match], total_words: usize) -> usize {
    let mut credited = 0usize;
    for (i, m) in matches.iter().enumerate() {
        if !m.is_url {
            credited += m.end - m.start;
            continue;
        }

        let start_pos = if i == 0 {
            0
        } else {
            let prev = &matches[i - 1];
            if !prev.is_url {
                prev.end
            } else {
                (m.start + prev.end) / 2
            }
        };
        let end_pos = if i + 1 == matches.len() {
            total_words
        } else {
            let next = &matches[i + 1];
            if !next.is_url {
                next.start
            } else {
                (m.end + next.start) / 2
            }
        };
        credited += end_pos.saturating_sub(start_pos);
    }
    credited
}

/// Compute `Coverage.percent` for the final, disjoint, sorted `matches`
/// against an input of `total_words` words.
pub fn coverage_percent(matches: &[Match], total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    100.0 * credited_words(matches, total_words) as f64 / total_words as f64
}

/// Project every Match's word-space `start`/`end` to byte offsets into
/// `doc.bytes`. Both text matches and URL matches use the same
/// formula; URL matches already carry the word offsets bracketing the URL
/// substring itself.
pub fn project_to_bytes(doc: &Document, matches: Vec<Match>) -> Vec<Match> {
    matches
        .into_iter()
        .map(|m| {
            if m.start >= m.end || m.end > doc.words.len() {
                return m;
            }
            let start = doc.byte_off[m.start];
            let end = doc.byte_off[m.end - 1] + doc.words[m.end - 1].len();
            Match { start, end, ..m }
        })
        .collect()
}
