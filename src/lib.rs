//! Deterministic disposal-category classification engine.
//!
//! `curbside-core` provides text tokenization, trigram similarity,
//! multi-strategy fuzzy scoring, gap-aware confidence estimation, and a
//! classification pipeline over read-only item catalogs. All operations are
//! deterministic — identical `(catalog, query)` inputs always produce
//! identical outputs, byte-for-byte.
//!
//! The crate answers one question: given a free-text description of a
//! physical item (and optionally a set of image-recognition labels), which
//! disposal category does it belong to, and how sure are we?

pub mod bridge;
pub mod catalog;
pub mod classify;
pub mod scoring;
pub mod text;
pub mod types;
