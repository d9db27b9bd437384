pub mod entry;
pub mod outcome;

pub use entry::{CatalogEntry, CatalogId, Category, EntryId, FollowupQuestion, Guidance};
pub use outcome::{
    ClassificationResult, ClassifyRequest, MatchResult, MatchType, MaterialMatch,
    ScoredCandidate, TopMatch,
};
