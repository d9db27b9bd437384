//! Post-ranking score adjustments: follow-up answer re-scoring and
//! vision-label boosting.
//!
//! These run as two separate phases, each followed by its own re-sort in
//! the pipeline. They must not be fused: with both adjustments landing on
//! different candidates, the relative ordering of the re-sorts decides
//! which candidate ends up on top.

use std::collections::BTreeSet;

use crate::scoring::round2;
use crate::text::tokenize;
use crate::types::ScoredCandidate;

/// Added to every candidate whose name or alias contains the follow-up
/// answer.
pub const FOLLOWUP_BOOST: f64 = 0.20;

/// Added once per overlapping vision-label token.
pub const VISION_BOOST: f64 = 0.05;

/// If the answer text appears in a candidate's name or any alias
/// (case-insensitive), lift that candidate's score. Caller re-sorts.
pub(crate) fn apply_followup_answer(candidates: &mut [ScoredCandidate<'_>], answer: &str) {
    let needle = answer.trim().to_lowercase();
    if needle.is_empty() {
        return;
    }

    for candidate in candidates.iter_mut() {
        let hit = candidate
            .entry
            .names()
            .any(|name| name.to_lowercase().contains(&needle));
        if hit {
            candidate.score = round2((candidate.score + FOLLOWUP_BOOST).min(1.0));
        }
    }
}

/// For each label token that equals, or substring-overlaps (either
/// direction) with, any token of a candidate's name/aliases/examples, add
/// a small fixed boost to that candidate. A no-op for an empty label
/// list. Caller re-sorts.
pub(crate) fn apply_vision_labels(candidates: &mut [ScoredCandidate<'_>], labels: &[String]) {
    let label_tokens: BTreeSet<String> = labels.iter().flat_map(|label| tokenize(label)).collect();
    if label_tokens.is_empty() {
        return;
    }

    for candidate in candidates.iter_mut() {
        let mut entry_tokens: BTreeSet<String> = BTreeSet::new();
        for name in candidate.entry.names() {
            entry_tokens.extend(tokenize(name));
        }
        for example in &candidate.entry.examples {
            entry_tokens.extend(tokenize(example));
        }

        let mut boosted = candidate.score;
        for label_token in &label_tokens {
            let hit = entry_tokens.iter().any(|entry_token| {
                label_token == entry_token
                    || label_token.contains(entry_token.as_str())
                    || entry_token.contains(label_token.as_str())
            });
            if hit {
                boosted = (boosted + VISION_BOOST).min(1.0);
            }
        }
        candidate.score = round2(boosted);
    }
}
