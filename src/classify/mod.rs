//! The concept-oriented classification pipeline: normalization, packaging
//! phrase stripping, scoring, follow-up and vision-label adjustments, and
//! result assembly.

pub mod boost;
pub mod material;

use log::debug;

use crate::catalog::{Catalog, CatalogError, CatalogSource, CatalogStore};
use crate::scoring::{
    estimate_confidence, rank_candidates, sort_descending, PreparedQuery, Scorer, StrategyScorer,
};
use crate::types::{
    CatalogId, Category, ClassificationResult, ClassifyRequest, ScoredCandidate, TopMatch,
};

pub use boost::{FOLLOWUP_BOOST, VISION_BOOST};
pub use material::{match_material, MATERIAL_TOP_MATCHES};

/// Candidates kept for the boosting phases.
const MAX_CANDIDATES: usize = 100;

/// Candidates reported in `top_matches`.
const TOP_MATCHES_LIMIT: usize = 10;

/// Below this confidence the result suggests refining the query.
const REFINE_THRESHOLD: f64 = 0.50;

/// Below this confidence the result attaches a follow-up question and a
/// low-confidence warning.
const FOLLOWUP_THRESHOLD: f64 = 0.60;

/// Leading packaging phrases stripped from queries, expanded from the
/// optional-word patterns into explicit literals. Ordered; first match
/// wins, applied once.
const PACKAGING_PREFIXES: &[&str] = &[
    "a plastic bag of ",
    "plastic bag of ",
    "a bag of ",
    "bag of ",
    "a piece of ",
    "piece of ",
    "a bit of ",
    "bit of ",
    "some ",
];

/// Strip one leading packaging phrase. If stripping would leave nothing,
/// keep the original text.
fn strip_packaging_phrase(query: &str) -> &str {
    for prefix in PACKAGING_PREFIXES {
        if let Some(rest) = query.strip_prefix(prefix) {
            let rest = rest.trim();
            return if rest.is_empty() { query } else { rest };
        }
    }
    query
}

/// Classifies free-text item descriptions against a concept catalog.
pub struct Classifier<S = StrategyScorer> {
    scorer: S,
}

impl Default for Classifier<StrategyScorer> {
    fn default() -> Self {
        Classifier {
            scorer: StrategyScorer,
        }
    }
}

impl<S: Scorer> Classifier<S> {
    pub fn new(scorer: S) -> Self {
        Classifier { scorer }
    }

    /// Run the full pipeline against one catalog snapshot.
    ///
    /// Never fails: empty queries, empty catalogs, and no-match outcomes
    /// are all zero-confidence results with a populated `why`.
    pub fn classify(&self, catalog: &Catalog, request: &ClassifyRequest) -> ClassificationResult {
        // 1. Normalize: trim, lowercase, collapse internal whitespace.
        let normalized = request
            .query
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        // 2. Strip a leading packaging phrase.
        let stripped = strip_packaging_phrase(&normalized);

        // 3. Nothing left to classify.
        if stripped.is_empty() {
            return empty_query_result();
        }

        if catalog.is_empty() {
            return empty_catalog_result(catalog);
        }

        // 4. Score, filter, sort, truncate.
        let prepared = PreparedQuery::new(stripped);
        let mut candidates = rank_candidates(&self.scorer, catalog, &prepared);
        candidates.truncate(MAX_CANDIDATES);

        // 5. Follow-up answer adjustment, then its own re-sort.
        if let Some(answer) = request.followup_answer.as_deref() {
            boost::apply_followup_answer(&mut candidates, answer);
            sort_descending(&mut candidates);
        }

        // 6. Vision-label boost, then its own re-sort. Runs even for an
        //    empty label list (a no-op).
        boost::apply_vision_labels(&mut candidates, &request.labels);
        sort_descending(&mut candidates);

        // 7. Nothing survived the relevance threshold.
        if candidates.is_empty() {
            return no_match_result(stripped);
        }

        // 8. Shape the winner into a result.
        let confidence = estimate_confidence(&candidates);
        debug!(
            "classified '{}' as '{}' (confidence {confidence:.2}, {} candidates)",
            stripped,
            candidates[0].entry.id,
            candidates.len()
        );
        assemble_result(stripped, &candidates, confidence)
    }

    /// Like [`classify`](Classifier::classify), but resolves the catalog
    /// through a store. An unavailable catalog becomes a zero-confidence
    /// result with a warning, never an error.
    pub fn classify_with_store<Src: CatalogSource>(
        &self,
        store: &CatalogStore<Src>,
        catalog_id: &CatalogId,
        request: &ClassifyRequest,
    ) -> ClassificationResult {
        match store.load_or_cache(catalog_id) {
            Ok(catalog) => self.classify(&catalog, request),
            Err(err) => unavailable_catalog_result(catalog_id, &err),
        }
    }
}

fn assemble_result(
    query: &str,
    candidates: &[ScoredCandidate<'_>],
    confidence: f64,
) -> ClassificationResult {
    let winner = &candidates[0];
    let others = candidates.len() - 1;

    let mut why = vec![format!(
        "Best match: '{}' via {} match (score {:.2})",
        winner.entry.name, winner.match_type, winner.score
    )];
    why.push(match others {
        0 => format!("No other entry matched '{query}'"),
        1 => format!("1 other entry also matched '{query}'"),
        n => format!("{n} other entries also matched '{query}'"),
    });

    let mut do_next = Vec::new();
    if confidence < REFINE_THRESHOLD {
        do_next.push(
            "Try a more specific description, such as the item's material or size".to_string(),
        );
    }
    do_next.push(format!("dispose in: {}", winner.entry.category));

    let followup_question = if confidence < FOLLOWUP_THRESHOLD {
        // Single question at a time; callers resubmit with the answer.
        winner.entry.followup_questions.first().cloned()
    } else {
        None
    };

    let warnings = if confidence < FOLLOWUP_THRESHOLD {
        Some(vec![format!(
            "Low confidence ({confidence:.2}); the suggested category may be wrong"
        )])
    } else {
        None
    };

    ClassificationResult {
        category: winner.entry.category,
        confidence,
        concept_id: Some(winner.entry.id.clone()),
        concept_name: Some(winner.entry.name.clone()),
        top_matches: candidates
            .iter()
            .take(TOP_MATCHES_LIMIT)
            .map(|candidate| TopMatch {
                concept_id: candidate.entry.id.clone(),
                score: candidate.score,
                match_type: Some(candidate.match_type),
            })
            .collect(),
        why,
        do_next,
        followup_question,
        warnings,
    }
}

fn zero_confidence_result(why: Vec<String>, do_next: Vec<String>) -> ClassificationResult {
    ClassificationResult {
        category: Category::Unsure,
        confidence: 0.0,
        concept_id: None,
        concept_name: None,
        top_matches: Vec::new(),
        why,
        do_next,
        followup_question: None,
        warnings: None,
    }
}

fn empty_query_result() -> ClassificationResult {
    zero_confidence_result(
        vec!["The query was empty after normalization".to_string()],
        vec!["Describe the item you want to dispose of".to_string()],
    )
}

fn empty_catalog_result(catalog: &Catalog) -> ClassificationResult {
    zero_confidence_result(
        vec![format!("Catalog '{}' contains no entries", catalog.id)],
        vec!["Try again once the catalog is available".to_string()],
    )
}

fn no_match_result(query: &str) -> ClassificationResult {
    zero_confidence_result(
        vec![format!("No catalog entry matched '{query}'")],
        vec![
            "Try a more specific description, such as the item's material or size".to_string(),
        ],
    )
}

fn unavailable_catalog_result(
    catalog_id: &CatalogId,
    err: &CatalogError,
) -> ClassificationResult {
    let mut result = zero_confidence_result(
        vec![format!("Catalog '{catalog_id}' is unavailable")],
        vec!["Try again once the catalog is available".to_string()],
    );
    result.warnings = Some(vec![format!("Catalog load failed: {err}")]);
    result
}
