//! Start-index construction: for a license template, map each word
//! to the ascending list of positions it occurs at in the template's word
//! stream. The submatch finder uses this to enumerate candidate anchors in
//! O(1) per word class instead of rescanning the whole template.

use std::collections::HashMap;

/// Build `word -> ascending positions` over `words`, in a single
/// left-to-right pass.
pub fn build_start_indexes(words: &[String]) -> HashMap<String, Vec<usize>> {
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (pos, word) in words.iter().enumerate() {
        index.entry(word.clone()).or_default().push(pos);
    }
    index
}
