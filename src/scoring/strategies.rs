//! The individual match strategies. Each is a pure function of
//! `(entry, query)` returning the best `(score, match_type)` it can
//! justify, or `None` when it does not apply.

use crate::scoring::PreparedQuery;
use crate::text::{normalize, tokenize, trigram_similarity};
use crate::types::{CatalogEntry, MatchType};

/// Exact normalized equality against the canonical name.
pub(crate) fn exact_name(entry: &CatalogEntry, query: &PreparedQuery) -> bool {
    !query.normalized.is_empty() && normalize(&entry.name) == query.normalized
}

/// Exact normalized equality against any alias.
pub(crate) fn exact_alias(entry: &CatalogEntry, query: &PreparedQuery) -> bool {
    !query.normalized.is_empty()
        && entry
            .aliases
            .iter()
            .any(|alias| normalize(alias) == query.normalized)
}

/// Containment either way between the normalized query and any
/// name/alias. Longer shared spans score higher:
/// `0.70 + lengthRatio * 0.20` with `lengthRatio = min(len) / max(len)`.
pub(crate) fn partial_containment(
    entry: &CatalogEntry,
    query: &PreparedQuery,
) -> Option<(f64, MatchType)> {
    if query.normalized.is_empty() {
        return None;
    }

    let mut best: Option<f64> = None;
    for name in entry.names() {
        let normalized = normalize(name);
        if normalized.is_empty() {
            continue;
        }
        if query.normalized.contains(&normalized) || normalized.contains(&query.normalized) {
            let query_len = query.normalized.chars().count();
            let name_len = normalized.chars().count();
            let ratio = query_len.min(name_len) as f64 / query_len.max(name_len) as f64;
            let score = 0.70 + ratio * 0.20;
            if best.map_or(true, |b| score > b) {
                best = Some(score);
            }
        }
    }
    best.map(|score| (score, MatchType::Partial))
}

/// Two tokens match when equal, or when both are at least 3 characters
/// and one contains the other.
fn tokens_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    a.chars().count() >= 3 && b.chars().count() >= 3 && (a.contains(b) || b.contains(a))
}

/// Token overlap between the query and each name/alias:
/// `matched / max(queryTokens, nameTokens) * 0.85`.
pub(crate) fn token_overlap(
    entry: &CatalogEntry,
    query: &PreparedQuery,
) -> Option<(f64, MatchType)> {
    if query.tokens.is_empty() {
        return None;
    }

    let mut best: Option<f64> = None;
    for name in entry.names() {
        let name_tokens = tokenize(name);
        if name_tokens.is_empty() {
            continue;
        }
        let matched = query
            .tokens
            .iter()
            .filter(|qt| name_tokens.iter().any(|nt| tokens_match(qt, nt)))
            .count();
        let overlap = matched as f64 / query.tokens.len().max(name_tokens.len()) as f64;
        let score = overlap * 0.85;
        if best.map_or(true, |b| score > b) {
            best = Some(score);
        }
    }
    best.filter(|s| *s > 0.0).map(|score| (score, MatchType::Token))
}

/// Flat 0.50 when an attribute tag of 3+ characters appears in the
/// query, or a 4+ character tag contains the whole query.
pub(crate) fn attribute_tags(
    entry: &CatalogEntry,
    query: &PreparedQuery,
) -> Option<(f64, MatchType)> {
    if query.normalized.is_empty() {
        return None;
    }

    for tag in &entry.attribute_tags {
        let tag = tag.to_lowercase().replace('-', " ");
        let tag_len = tag.chars().count();
        if tag_len < 3 {
            continue;
        }
        if query.normalized.contains(&tag) {
            return Some((0.50, MatchType::Attribute));
        }
        if tag_len >= 4 && tag.contains(&query.normalized) {
            return Some((0.50, MatchType::Attribute));
        }
    }
    None
}

/// Exact normalized equality with an example string scores 0.90; a fuzzy
/// example match scores its trigram similarity times 0.75.
pub(crate) fn example_match(
    entry: &CatalogEntry,
    query: &PreparedQuery,
) -> Option<(f64, MatchType)> {
    if query.normalized.is_empty() {
        return None;
    }

    let mut best: Option<(f64, MatchType)> = None;
    for example in &entry.examples {
        let outcome = if normalize(example) == query.normalized {
            (0.90, MatchType::ExactExample)
        } else {
            (
                trigram_similarity(example, &query.normalized) * 0.75,
                MatchType::Trigram,
            )
        };
        if best.map_or(true, |(b, _)| outcome.0 > b) {
            best = Some(outcome);
        }
    }
    best.filter(|(s, _)| *s > 0.0)
}

/// Trigram similarity against every name/alias, scaled by 0.70.
pub(crate) fn trigram_fallback(
    entry: &CatalogEntry,
    query: &PreparedQuery,
) -> Option<(f64, MatchType)> {
    let mut best: Option<f64> = None;
    for name in entry.names() {
        let score = trigram_similarity(name, &query.normalized) * 0.70;
        if best.map_or(true, |b| score > b) {
            best = Some(score);
        }
    }
    best.filter(|s| *s > 0.0).map(|score| (score, MatchType::Trigram))
}
