//! Character trigram sets and Jaccard similarity over them.

use std::collections::BTreeSet;

/// The set of 3-character substrings of `text`, computed over lowercase
/// alphanumerics only (all other characters removed first, no token
/// splitting). Strings with fewer than 3 usable characters yield the
/// empty set.
pub fn trigrams(text: &str) -> BTreeSet<String> {
    let cleaned: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();

    cleaned
        .windows(3)
        .map(|w| w.iter().collect::<String>())
        .collect()
}

/// Jaccard similarity of the two trigram sets. Returns 0.0 when either
/// set is empty.
pub fn trigram_similarity(a: &str, b: &str) -> f64 {
    let ta = trigrams(a);
    let tb = trigrams(b);

    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }

    let intersection = ta.intersection(&tb).count();
    let union = ta.union(&tb).count();

    intersection as f64 / union as f64
}
