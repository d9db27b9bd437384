//! Ranking and confidence estimation: filter, stable sort, and a
//! gap-aware adjustment of the winning score.

use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::scoring::{round2, PreparedQuery, Scorer};
use crate::types::{MatchType, ScoredCandidate};

/// Candidates scoring below this are never shown.
pub const MIN_RELEVANCE: f64 = 0.15;

/// Gap above which the winner earns a confidence bonus.
const CLEAR_WINNER_GAP: f64 = 0.30;
const CLEAR_WINNER_BONUS: f64 = 0.10;

/// Gap below which a weak winner loses confidence.
const TIGHT_RACE_GAP: f64 = 0.05;
const TIGHT_RACE_PENALTY: f64 = 0.15;
const TIGHT_RACE_CEILING: f64 = 0.80;

/// Score every entry, drop those below [`MIN_RELEVANCE`], and sort
/// descending by score. The sort is stable, so ties preserve catalog
/// order.
pub fn rank_candidates<'a, S: Scorer>(
    scorer: &S,
    catalog: &'a Catalog,
    query: &PreparedQuery,
) -> Vec<ScoredCandidate<'a>> {
    let mut candidates: Vec<ScoredCandidate<'a>> = catalog
        .entries()
        .iter()
        .map(|entry| scorer.score(entry, query))
        .filter(|candidate| candidate.score >= MIN_RELEVANCE)
        .collect();

    sort_descending(&mut candidates);
    candidates
}

/// Stable descending sort by score.
pub fn sort_descending(candidates: &mut [ScoredCandidate<'_>]) {
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

/// Derive confidence from the winning score and the gap to the
/// runner-up. Expects `candidates` sorted descending; returns 0.0 when
/// empty.
pub fn estimate_confidence(candidates: &[ScoredCandidate<'_>]) -> f64 {
    let best = match candidates.first() {
        Some(best) => best,
        None => return 0.0,
    };

    let mut confidence = best.score;

    if let Some(second) = candidates.get(1) {
        let gap = best.score - second.score;
        if gap > CLEAR_WINNER_GAP {
            confidence = (confidence + CLEAR_WINNER_BONUS).min(1.0);
        } else if gap < TIGHT_RACE_GAP && best.score < TIGHT_RACE_CEILING {
            confidence = (confidence - TIGHT_RACE_PENALTY).max(0.0);
        }
    }

    match best.match_type {
        MatchType::ExactName => confidence = 1.0,
        // An exact example match counts as exact-alias-equivalent.
        MatchType::ExactAlias | MatchType::ExactExample => confidence = confidence.max(0.95),
        _ => {}
    }

    round2(confidence)
}
