pub mod tokenize;
pub mod trigram;

pub use tokenize::{normalize, tokenize};
pub use trigram::{trigram_similarity, trigrams};
