//! Namespace-aware in-memory card cache with per-key change notification
//!
//! Holds one [`CacheSlice`] per [`QueryKey`] and applies partial updates
//! without touching unrelated entries. Observers subscribe per key and are
//! woken on every slice replacement; a patch that matches nothing is a
//! silent no-op and wakes nobody.

use crate::cache::keys::{Namespace, QueryKey};
use crate::models::CardEntity;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::watch;

/// The value stored under one cache key: card id -> entity
pub type CacheSlice = HashMap<String, CardEntity>;

/// Shared in-memory store for card entities.
///
/// An owned object, never a process-wide singleton: callers share a handle
/// (typically `Arc<CardCacheStore>`) and tests instantiate isolated
/// instances. Every operation is total; the store never fails.
pub struct CardCacheStore {
    inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    slices: HashMap<QueryKey, CacheSlice>,
    watchers: HashMap<QueryKey, watch::Sender<CacheSlice>>,
}

impl StoreInner {
    /// Store a new slice value and notify that key's subscribers only.
    fn replace_slice(&mut self, key: QueryKey, slice: CacheSlice) {
        if let Some(tx) = self.watchers.get(&key) {
            tx.send_replace(slice.clone());
        }
        self.slices.insert(key, slice);
    }
}

impl CardCacheStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
        }
    }

    /// Snapshot of the slice at `key`
    pub fn get(&self, key: &QueryKey) -> Option<CacheSlice> {
        self.inner.lock().unwrap().slices.get(key).cloned()
    }

    /// Snapshot of one entity within the slice at `key`
    pub fn get_card(&self, key: &QueryKey, id: &str) -> Option<CardEntity> {
        self.inner
            .lock()
            .unwrap()
            .slices
            .get(key)
            .and_then(|slice| slice.get(id))
            .cloned()
    }

    /// Place or replace one entity in the slice at `key`, creating the
    /// slice if it does not exist yet. This is the ingestion path for
    /// query results; [`patch`](Self::patch) never creates entities.
    pub fn insert(&self, key: QueryKey, entity: CardEntity) {
        let mut inner = self.inner.lock().unwrap();
        let mut slice = inner.slices.get(&key).cloned().unwrap_or_default();
        slice.insert(entity.id.clone(), entity);
        inner.replace_slice(key, slice);
    }

    /// Replace the whole slice at `key` with the given entities, keyed by
    /// id. Used when a listing query lands.
    pub fn populate(&self, key: QueryKey, entities: Vec<CardEntity>) {
        let slice: CacheSlice = entities
            .into_iter()
            .map(|entity| (entity.id.clone(), entity))
            .collect();
        log::debug!("Populating {:?} with {} entries", key, slice.len());
        self.inner.lock().unwrap().replace_slice(key, slice);
    }

    /// Shallow-merge `fields` into the cached copy of `id` in `namespace`.
    ///
    /// Patching an id (or a slice) that is not cached is a silent no-op: a
    /// patch never creates an entity, and no subscriber is woken. A match
    /// replaces the stored entity with the merge (patch fields win) and
    /// notifies exactly the addressed key's subscribers. The other
    /// namespace's cached copy of the same id is untouched; callers that
    /// need both views updated issue two patches.
    pub fn patch(&self, namespace: Namespace, id: &str, fields: &Map<String, Value>) {
        let key = namespace.slice_key(id);
        let mut inner = self.inner.lock().unwrap();

        let merged = match inner.slices.get(&key).and_then(|slice| slice.get(id)) {
            Some(existing) => existing.merged(fields),
            None => {
                log::debug!("Discarding patch for uncached {:?}/{}", namespace, id);
                return;
            }
        };

        // Build a fresh slice value; the previous one is never mutated
        let mut next = inner.slices.get(&key).cloned().unwrap_or_default();
        next.insert(id.to_string(), merged);
        inner.replace_slice(key, next);
    }

    /// Observe the slice at `key`.
    ///
    /// The receiver is woken on every slice replacement at that key and
    /// never for other keys or for no-op patches. Subscribing to a key
    /// with no slice yet yields an empty slice until one lands.
    pub fn subscribe(&self, key: &QueryKey) -> watch::Receiver<CacheSlice> {
        let mut inner = self.inner.lock().unwrap();
        let current = inner.slices.get(key).cloned().unwrap_or_default();
        inner
            .watchers
            .entry(key.clone())
            .or_insert_with(|| watch::channel(current).0)
            .subscribe()
    }
}

impl Default for CardCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
