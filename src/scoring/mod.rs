pub mod confidence;
pub mod strategies;

use crate::text::{normalize, tokenize};
use crate::types::{CatalogEntry, MatchType, ScoredCandidate};

pub use confidence::{estimate_confidence, rank_candidates, sort_descending, MIN_RELEVANCE};

/// A query pre-processed once so every entry can be scored against the
/// same normalized text and token list.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    pub raw: String,
    pub normalized: String,
    pub tokens: Vec<String>,
}

impl PreparedQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        let tokens = tokenize(&raw);
        PreparedQuery {
            raw,
            normalized,
            tokens,
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub trait Scorer {
    /// Best score for `entry` against `query`, with the strategy that
    /// produced it. Always in [0.0, 1.0].
    fn score<'a>(&self, entry: &'a CatalogEntry, query: &PreparedQuery) -> ScoredCandidate<'a>;
}

/// The default multi-strategy scorer.
///
/// The final score is the maximum across strategies, never a sum — several
/// weak partial signals must not compound into false confidence. Exact
/// name and alias matches short-circuit; the remaining strategies are
/// folded with max, keeping the earlier strategy on exact ties.
#[derive(Debug, Default)]
pub struct StrategyScorer;

impl Scorer for StrategyScorer {
    fn score<'a>(&self, entry: &'a CatalogEntry, query: &PreparedQuery) -> ScoredCandidate<'a> {
        if strategies::exact_name(entry, query) {
            return ScoredCandidate {
                entry,
                score: 1.0,
                match_type: MatchType::ExactName,
            };
        }
        if strategies::exact_alias(entry, query) {
            return ScoredCandidate {
                entry,
                score: 0.95,
                match_type: MatchType::ExactAlias,
            };
        }

        let outcomes = [
            strategies::partial_containment(entry, query),
            strategies::token_overlap(entry, query),
            strategies::attribute_tags(entry, query),
            strategies::example_match(entry, query),
            strategies::trigram_fallback(entry, query),
        ];

        // Strict greater-than keeps the first strategy on exact ties;
        // evaluation order is fixed, so the result is deterministic.
        let mut best = (0.0_f64, MatchType::Trigram);
        for outcome in outcomes.into_iter().flatten() {
            if outcome.0 > best.0 {
                best = outcome;
            }
        }

        debug_assert!(
            (0.0..=1.0).contains(&best.0),
            "score {} out of range [0.0, 1.0]",
            best.0
        );

        ScoredCandidate {
            entry,
            score: round2(best.0),
            match_type: best.1,
        }
    }
}
