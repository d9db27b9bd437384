use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::entry::{CatalogEntry, Category, EntryId, FollowupQuestion};

/// The scoring strategy that produced a candidate's winning score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchType {
    ExactName,
    ExactAlias,
    ExactExample,
    Partial,
    Token,
    Attribute,
    Trigram,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::ExactName => "exact-name",
            MatchType::ExactAlias => "exact-alias",
            MatchType::ExactExample => "exact-example",
            MatchType::Partial => "partial",
            MatchType::Token => "token",
            MatchType::Attribute => "attribute",
            MatchType::Trigram => "trigram",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Internal: a catalog entry with the best score one query earned against
/// it. Borrows the catalog snapshot to avoid cloning entries prematurely.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub entry: &'a CatalogEntry,
    /// In [0.0, 1.0], rounded to two decimals.
    pub score: f64,
    pub match_type: MatchType,
}

/// Serializable summary of one ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMatch {
    pub concept_id: EntryId,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<MatchType>,
}

/// Input to the concept classification pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followup_answer: Option<String>,
}

impl ClassifyRequest {
    pub fn new(query: impl Into<String>) -> Self {
        ClassifyRequest {
            query: query.into(),
            labels: Vec::new(),
            followup_answer: None,
        }
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_followup_answer(mut self, answer: impl Into<String>) -> Self {
        self.followup_answer = Some(answer.into());
        self
    }
}

/// The final result of a classification. Fully self-contained and
/// serializable; field names follow the external interface contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: Category,
    /// In [0.0, 1.0], rounded to two decimals.
    pub confidence: f64,
    pub concept_id: Option<EntryId>,
    pub concept_name: Option<String>,
    pub top_matches: Vec<TopMatch>,
    /// Human-readable explanation of how the category was chosen.
    pub why: Vec<String>,
    pub do_next: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followup_question: Option<FollowupQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// One ranked material with the score it earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialMatch {
    pub entry: CatalogEntry,
    pub score: f64,
    pub match_type: MatchType,
}

/// Result of matching a query directly against one jurisdiction's
/// material list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub best: Option<CatalogEntry>,
    pub matches: Vec<MaterialMatch>,
    pub confidence: f64,
    pub rationale: Vec<String>,
}
