use curbside_core::scoring::estimate_confidence;
use curbside_core::types::{CatalogEntry, Category, EntryId, MatchType, ScoredCandidate};

fn entry(id: &str, name: &str) -> CatalogEntry {
    CatalogEntry {
        id: EntryId::new(id),
        name: name.to_string(),
        aliases: vec![name.to_string()],
        examples: Vec::new(),
        category: Category::Recycle,
        attribute_tags: Vec::new(),
        followup_questions: Vec::new(),
        guidance: None,
    }
}

fn candidate<'a>(entry: &'a CatalogEntry, score: f64, match_type: MatchType) -> ScoredCandidate<'a> {
    ScoredCandidate {
        entry,
        score,
        match_type,
    }
}

#[test]
fn empty_candidate_list_yields_zero() {
    assert_eq!(estimate_confidence(&[]), 0.0);
}

#[test]
fn single_candidate_keeps_its_score() {
    let e = entry("plastic-bags", "plastic bags");
    let candidates = vec![candidate(&e, 0.72, MatchType::Partial)];
    assert_eq!(estimate_confidence(&candidates), 0.72);
}

#[test]
fn wide_gap_earns_a_bonus() {
    let e1 = entry("plastic-bags", "plastic bags");
    let e2 = entry("trash-bags", "trash bags");
    let candidates = vec![
        candidate(&e1, 0.70, MatchType::Partial),
        candidate(&e2, 0.35, MatchType::Token),
    ];
    assert_eq!(estimate_confidence(&candidates), 0.80);
}

#[test]
fn bonus_never_exceeds_one() {
    let e1 = entry("plastic-bags", "plastic bags");
    let e2 = entry("trash-bags", "trash bags");
    let candidates = vec![
        candidate(&e1, 0.98, MatchType::Partial),
        candidate(&e2, 0.20, MatchType::Token),
    ];
    assert_eq!(estimate_confidence(&candidates), 1.0);
}

#[test]
fn tight_race_with_weak_winner_is_penalized() {
    let e1 = entry("plastic-bags", "plastic bags");
    let e2 = entry("trash-bags", "trash bags");
    let candidates = vec![
        candidate(&e1, 0.60, MatchType::Token),
        candidate(&e2, 0.58, MatchType::Token),
    ];
    // gap 0.02 < 0.05 and best 0.60 < 0.80: 0.60 - 0.15 = 0.45.
    assert!(estimate_confidence(&candidates) <= 0.45);
    assert_eq!(estimate_confidence(&candidates), 0.45);
}

#[test]
fn tight_race_with_strong_winner_is_not_penalized() {
    let e1 = entry("plastic-bags", "plastic bags");
    let e2 = entry("trash-bags", "trash bags");
    let candidates = vec![
        candidate(&e1, 0.85, MatchType::Partial),
        candidate(&e2, 0.84, MatchType::Partial),
    ];
    assert_eq!(estimate_confidence(&candidates), 0.85);
}

#[test]
fn penalty_never_goes_below_zero() {
    let e1 = entry("plastic-bags", "plastic bags");
    let e2 = entry("trash-bags", "trash bags");
    let candidates = vec![
        candidate(&e1, 0.16, MatchType::Trigram),
        candidate(&e2, 0.15, MatchType::Trigram),
    ];
    assert_eq!(estimate_confidence(&candidates), 0.01);
}

#[test]
fn exact_name_forces_full_confidence() {
    let e1 = entry("plastic-bags", "plastic bags");
    let e2 = entry("trash-bags", "trash bags");
    let candidates = vec![
        candidate(&e1, 1.0, MatchType::ExactName),
        candidate(&e2, 0.98, MatchType::Partial),
    ];
    assert_eq!(estimate_confidence(&candidates), 1.0);
}

#[test]
fn exact_alias_floors_confidence_at_095() {
    let e1 = entry("plastic-bags", "plastic bags");
    let e2 = entry("trash-bags", "trash bags");
    let candidates = vec![
        candidate(&e1, 0.95, MatchType::ExactAlias),
        candidate(&e2, 0.94, MatchType::Partial),
    ];
    assert_eq!(estimate_confidence(&candidates), 0.95);
}

#[test]
fn exact_example_counts_as_exact_alias() {
    let e1 = entry("plastic-bags", "plastic bags");
    let e2 = entry("trash-bags", "trash bags");
    let candidates = vec![
        candidate(&e1, 0.90, MatchType::ExactExample),
        candidate(&e2, 0.88, MatchType::Partial),
    ];
    assert_eq!(estimate_confidence(&candidates), 0.95);
}

#[test]
fn confidence_always_in_unit_interval() {
    let e1 = entry("plastic-bags", "plastic bags");
    let e2 = entry("trash-bags", "trash bags");
    for best in [0.0, 0.15, 0.3, 0.5, 0.79, 0.8, 0.95, 1.0] {
        for second in [0.0, 0.1, 0.4, 0.78, 1.0] {
            if second > best {
                continue;
            }
            let candidates = vec![
                candidate(&e1, best, MatchType::Token),
                candidate(&e2, second, MatchType::Token),
            ];
            let confidence = estimate_confidence(&candidates);
            assert!(
                (0.0..=1.0).contains(&confidence),
                "confidence {confidence} out of range for best {best}, second {second}"
            );
        }
    }
}
