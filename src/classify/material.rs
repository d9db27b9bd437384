//! Material-oriented matching: the simpler single-jurisdiction sibling of
//! the concept pipeline. Trim-only normalization, no packaging stripping,
//! no boosts, no follow-up logic.

use crate::catalog::Catalog;
use crate::scoring::{estimate_confidence, rank_candidates, PreparedQuery, Scorer};
use crate::types::{MatchResult, MaterialMatch};

/// Matches reported in a [`MatchResult`].
pub const MATERIAL_TOP_MATCHES: usize = 5;

/// Match a query directly against one jurisdiction's material list.
///
/// Shares the scorer, relevance threshold, and confidence formula with
/// the concept pipeline. Never fails; empty input or an empty catalog
/// yields a zero-confidence result.
pub fn match_material<S: Scorer>(scorer: &S, catalog: &Catalog, query: &str) -> MatchResult {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return MatchResult {
            best: None,
            matches: Vec::new(),
            confidence: 0.0,
            rationale: vec!["The query was empty".to_string()],
        };
    }
    if catalog.is_empty() {
        return MatchResult {
            best: None,
            matches: Vec::new(),
            confidence: 0.0,
            rationale: vec![format!("Catalog '{}' contains no entries", catalog.id)],
        };
    }

    let prepared = PreparedQuery::new(trimmed);
    let candidates = rank_candidates(scorer, catalog, &prepared);

    if candidates.is_empty() {
        return MatchResult {
            best: None,
            matches: Vec::new(),
            confidence: 0.0,
            rationale: vec![format!("No material matched '{trimmed}'")],
        };
    }

    let confidence = estimate_confidence(&candidates);
    let winner = &candidates[0];

    let rationale = vec![
        format!(
            "Best match: '{}' via {} match (score {:.2})",
            winner.entry.name, winner.match_type, winner.score
        ),
        format!(
            "{} material(s) matched '{trimmed}' above the relevance threshold",
            candidates.len()
        ),
    ];

    MatchResult {
        best: Some(winner.entry.clone()),
        matches: candidates
            .iter()
            .take(MATERIAL_TOP_MATCHES)
            .map(|candidate| MaterialMatch {
                entry: candidate.entry.clone(),
                score: candidate.score,
                match_type: candidate.match_type,
            })
            .collect(),
        confidence,
        rationale,
    }
}
