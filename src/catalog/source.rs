//! Catalog sources: where entry definitions come from before they are
//! snapshotted into a [`Catalog`](crate::catalog::Catalog).

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{CatalogEntry, CatalogId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("Unknown catalog: {0}")]
    UnknownCatalog(String),
    #[error("Duplicate entry ID: {0}")]
    DuplicateEntryId(String),
    #[error("Entry {0} has no aliases")]
    MissingAliases(String),
}

/// Supplies the full ordered entry list for a catalog id.
///
/// Implementations perform schema validation; entries handed to the store
/// are assumed well-formed.
pub trait CatalogSource {
    fn load(&self, id: &CatalogId) -> Result<Vec<CatalogEntry>, CatalogError>;
}

/// Schema checks shared by every source: each entry must carry at least
/// one alias.
pub fn validate_entries(entries: &[CatalogEntry]) -> Result<(), CatalogError> {
    for entry in entries {
        if entry.aliases.is_empty() {
            return Err(CatalogError::MissingAliases(entry.id.as_str().to_string()));
        }
    }
    Ok(())
}

/// Reads `<root>/<catalog-id>.json`, a JSON array of entries.
#[derive(Debug)]
pub struct JsonCatalogSource {
    root: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        JsonCatalogSource { root: root.into() }
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self, id: &CatalogId) -> Result<Vec<CatalogEntry>, CatalogError> {
        let path = self.root.join(format!("{}.json", id.as_str()));
        if !path.is_file() {
            return Err(CatalogError::UnknownCatalog(id.as_str().to_string()));
        }

        let f = fs::File::open(&path)?;
        let entries: Vec<CatalogEntry> = serde_json::from_reader(f)?;
        validate_entries(&entries)?;
        Ok(entries)
    }
}

/// In-memory source holding pre-built entry lists. Primarily for tests
/// and embedded default catalogs.
#[derive(Debug, Default)]
pub struct StaticCatalogSource {
    catalogs: BTreeMap<CatalogId, Vec<CatalogEntry>>,
}

impl StaticCatalogSource {
    pub fn new() -> Self {
        StaticCatalogSource::default()
    }

    pub fn insert(&mut self, id: CatalogId, entries: Vec<CatalogEntry>) {
        self.catalogs.insert(id, entries);
    }
}

impl CatalogSource for StaticCatalogSource {
    fn load(&self, id: &CatalogId) -> Result<Vec<CatalogEntry>, CatalogError> {
        let entries = self
            .catalogs
            .get(id)
            .ok_or_else(|| CatalogError::UnknownCatalog(id.as_str().to_string()))?;
        validate_entries(entries)?;
        Ok(entries.clone())
    }
}
