// parley-core-client/parley-store
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::debug;

use crate::time_provider::TimeProvider;

const CHANGE_CHANNEL_CAPACITY: usize = 128;

/// A structural cache key. Prefix invalidation matches on the key's
/// namespace value.
pub trait CacheKey: Clone + Eq + Hash + Send + Sync + 'static {
    type Namespace: PartialEq;

    fn namespace(&self) -> Self::Namespace;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    pub value: V,
    pub fetched_at: DateTime<Utc>,
    pub is_stale: bool,
}

/// Published for every mutation so that owning views can re-read the affected
/// entry.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheChange<K> {
    Changed { key: K },
    Invalidated { key: K },
    Removed { key: K },
    Cleared,
}

/// Process-wide mapping from structural keys to cached query results plus
/// staleness metadata.
///
/// All writes happen under a single lock and replace the entry wholesale, so
/// readers only ever observe complete values. Invalidation marks entries
/// stale without deleting them; the owning view refetches on its next read.
pub struct QueryCache<K: CacheKey, V: Clone> {
    time_provider: Arc<dyn TimeProvider>,
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
    changes: broadcast::Sender<CacheChange<K>>,
}

impl<K: CacheKey, V: Clone> QueryCache<K, V> {
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        QueryCache {
            time_provider,
            entries: RwLock::new(HashMap::new()),
            changes,
        }
    }

    /// Returns a snapshot of the cached value. No side effects.
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.read().get(key).map(|entry| entry.value.clone())
    }

    pub fn get_entry(&self, key: &K) -> Option<CacheEntry<V>> {
        self.entries.read().get(key).cloned()
    }

    pub fn is_stale(&self, key: &K) -> bool {
        self.entries
            .read()
            .get(key)
            .map(|entry| entry.is_stale)
            .unwrap_or_default()
    }

    /// Unconditional overwrite, used after a fresh fetch. Stamps `fetched_at`
    /// and clears staleness.
    pub fn set(&self, key: K, value: V) {
        let entry = CacheEntry {
            value,
            fetched_at: self.time_provider.now(),
            is_stale: false,
        };
        self.entries.write().insert(key.clone(), entry);
        self.publish(CacheChange::Changed { key });
    }

    /// Read-modify-write under the write lock. Updating a key with no
    /// existing entry is a no-op, not an error; returns whether an entry was
    /// found.
    pub fn update(&self, key: &K, f: impl FnOnce(&mut V)) -> bool {
        {
            let mut entries = self.entries.write();
            let Some(entry) = entries.get_mut(key) else {
                return false;
            };
            f(&mut entry.value);
        }
        self.publish(CacheChange::Changed { key: key.clone() });
        true
    }

    /// Functional update that may create the entry. `f` receives the current
    /// value or `None` and returns the value to store. A created entry is
    /// stamped with the current time.
    pub fn upsert(&self, key: K, f: impl FnOnce(Option<V>) -> V) {
        {
            let mut entries = self.entries.write();
            let (old_value, fetched_at, is_stale) = match entries.remove(&key) {
                Some(entry) => (Some(entry.value), entry.fetched_at, entry.is_stale),
                None => (None, self.time_provider.now(), false),
            };
            let entry = CacheEntry {
                value: f(old_value),
                fetched_at,
                is_stale,
            };
            entries.insert(key.clone(), entry);
        }
        self.publish(CacheChange::Changed { key });
    }

    /// Marks the entry stale without deleting it, so the owning view can keep
    /// rendering the old data until its refetch completes.
    pub fn invalidate(&self, key: &K) {
        {
            let mut entries = self.entries.write();
            if let Some(entry) = entries.get_mut(key) {
                entry.is_stale = true;
            }
        }
        self.publish(CacheChange::Invalidated { key: key.clone() });
    }

    /// Marks every entry in the given namespace stale.
    pub fn invalidate_namespace(&self, namespace: &K::Namespace) {
        let touched = {
            let mut entries = self.entries.write();
            let mut touched = Vec::new();
            for (key, entry) in entries.iter_mut() {
                if &key.namespace() == namespace {
                    entry.is_stale = true;
                    touched.push(key.clone());
                }
            }
            touched
        };
        for key in touched {
            self.publish(CacheChange::Invalidated { key });
        }
    }

    pub fn invalidate_all(&self, keys: impl IntoIterator<Item = K>) {
        for key in keys {
            self.invalidate(&key);
        }
    }

    pub fn keys_in_namespace(&self, namespace: &K::Namespace) -> Vec<K> {
        self.entries
            .read()
            .keys()
            .filter(|key| &key.namespace() == namespace)
            .cloned()
            .collect()
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        let removed = self.entries.write().remove(key);
        if removed.is_some() {
            self.publish(CacheChange::Removed { key: key.clone() });
        }
        removed.map(|entry| entry.value)
    }

    /// Discards every entry. The session is over; nothing in the cache is
    /// meaningful anymore.
    pub fn clear(&self) {
        let count = {
            let mut entries = self.entries.write();
            let count = entries.len();
            entries.clear();
            count
        };
        debug!("Cleared {count} cache entries");
        self.publish(CacheChange::Cleared);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CacheChange<K>> {
        self.changes.subscribe()
    }

    fn publish(&self, change: CacheChange<K>) {
        // Nobody listening is fine.
        _ = self.changes.send(change);
    }
}
