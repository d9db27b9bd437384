//! Immutable catalog snapshots and the lazily-populated,
//! explicitly-clearable store that caches them per catalog id.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use log::debug;
use sha2::{Digest, Sha256};

use crate::catalog::source::{CatalogError, CatalogSource};
use crate::types::{CatalogEntry, CatalogId, EntryId};

/// A read-only snapshot of one catalog: the ordered entry list plus an
/// id index. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub id: CatalogId,
    /// `sha256:<hex>` over the serialized entries; deterministic for a
    /// given entry list.
    pub version: String,
    /// Informational only.
    pub loaded_at: DateTime<Utc>,
    entries: Vec<CatalogEntry>,
    index: BTreeMap<EntryId, usize>,
}

impl Catalog {
    pub fn new(id: CatalogId, entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut index = BTreeMap::new();
        let mut hasher = Sha256::new();

        for (pos, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateEntryId(entry.id.as_str().to_string()));
            }
            let bytes = serde_json::to_vec(entry)?;
            hasher.update(&bytes);
        }

        let version = format!("sha256:{}", hex::encode(hasher.finalize()));

        Ok(Catalog {
            id,
            version,
            loaded_at: Utc::now(),
            entries,
            index,
        })
    }

    /// Full entry list in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.index.get(id).map(|pos| &self.entries[*pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Caches catalog snapshots per id. The first access for an id loads from
/// the source; subsequent accesses return the cached snapshot until
/// [`clear`](CatalogStore::clear) or [`evict`](CatalogStore::evict).
///
/// Loads are idempotent: the source is deterministic for a given id, so a
/// racing second load would write an equivalent snapshot.
#[derive(Debug)]
pub struct CatalogStore<S: CatalogSource> {
    source: S,
    cache: Mutex<BTreeMap<CatalogId, Arc<Catalog>>>,
}

impl<S: CatalogSource> CatalogStore<S> {
    pub fn new(source: S) -> Self {
        CatalogStore {
            source,
            cache: Mutex::new(BTreeMap::new()),
        }
    }

    /// Return the cached snapshot for `id`, loading it on first access.
    pub fn load_or_cache(&self, id: &CatalogId) -> Result<Arc<Catalog>, CatalogError> {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(catalog) = cache.get(id) {
            debug!("catalog cache hit: {id}");
            return Ok(Arc::clone(catalog));
        }

        debug!("catalog cache miss: {id}, loading from source");
        let entries = self.source.load(id)?;
        let catalog = Arc::new(Catalog::new(id.clone(), entries)?);
        debug!(
            "catalog loaded: {id} ({} entries, version {})",
            catalog.len(),
            catalog.version
        );
        cache.insert(id.clone(), Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Drop every cached snapshot. Primarily for test isolation.
    pub fn clear(&self) {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.clear();
    }

    /// Drop one cached snapshot; returns whether it was present.
    pub fn evict(&self, id: &CatalogId) -> bool {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.remove(id).is_some()
    }
}
