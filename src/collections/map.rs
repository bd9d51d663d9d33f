/*!
 * Synchronized Map
 * Ordered key-value map with first-writer-wins inserts
 */

use crate::core::{ContainerConfig, Guarded, Synchronized};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::btree_map::{BTreeMap, Entry};
use tracing::trace;

/// Ordered map shared between threads
///
/// Inserting an existing key keeps the value already stored. Lookups return
/// copies or run a closure under the lock; no handle into the map outlives
/// the call.
///
/// # Example
///
/// ```
/// use sync_containers::prelude::*;
///
/// let map = SyncMap::new();
/// assert!(map.insert("k", 1));
/// assert!(!map.insert("k", 2));
/// assert_eq!(map.find(&"k"), Some(1));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyncMap<K: Ord, V> {
    inner: Guarded<BTreeMap<K, V>>,
}

impl<K: Ord, V> SyncMap<K, V> {
    pub fn new() -> Self {
        Self::with_config(ContainerConfig::named("map"))
    }

    /// Create a map; the capacity hint is ignored by tree storage
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            inner: Guarded::with_config(BTreeMap::new(), &config),
        }
    }

    /// Store `value` under `key` unless the key is already present
    ///
    /// Returns `true` if the value was stored, `false` if an earlier value
    /// was kept.
    pub fn insert(&self, key: K, value: V) -> bool {
        let inserted = self.inner.with_mut(|map| match map.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            Entry::Occupied(_) => false,
        });
        trace!(container = self.inner.label(), inserted, "insert");
        inserted
    }

    /// Remove `key`, returning its value; absent keys are a no-op
    pub fn erase<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.with_mut(|map| map.remove(key))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.with(|map| map.contains_key(key))
    }

    /// Run `f` against the value for `key` while the lock is held
    ///
    /// `None` means the key is absent.
    pub fn find_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        F: FnOnce(&V) -> R,
    {
        self.inner.with(|map| map.get(key).map(f))
    }

    /// Run `f` against the value for `key` mutably while the lock is held
    pub fn update<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        F: FnOnce(&mut V) -> R,
    {
        self.inner.with_mut(|map| map.get_mut(key).map(f))
    }

    /// Visit every entry in key order while the lock is held
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V),
    {
        self.inner.with(|map| map.iter().for_each(|(k, v)| f(k, v)));
    }
}

impl<K: Ord, V: Clone> SyncMap<K, V> {
    /// Copy of the value stored under `key`, `None` when absent
    pub fn find<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_with(key, V::clone)
    }
}

impl<K: Ord + Clone, V> SyncMap<K, V> {
    /// Keys in ascending order
    pub fn keys(&self) -> Vec<K> {
        self.inner.with(|map| map.keys().cloned().collect())
    }
}

impl<K: Ord + Clone, V: Clone> SyncMap<K, V> {
    /// Entries in key order, copied under the lock
    pub fn to_vec(&self) -> Vec<(K, V)> {
        self.inner.with(|map| {
            map.iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
    }
}

impl<K: Ord, V> Synchronized for SyncMap<K, V> {
    type Backing = BTreeMap<K, V>;

    fn guarded(&self) -> &Guarded<BTreeMap<K, V>> {
        &self.inner
    }
}

impl<K: Ord, V> Default for SyncMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for SyncMap<K, V> {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self {
            inner: Guarded::labeled(map, "map"),
        }
    }
}

/// Collecting keeps the first value seen for each key
impl<K: Ord, V> FromIterator<(K, V)> for SyncMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BTreeMap::new();
        for (key, value) in iter {
            map.entry(key).or_insert(value);
        }
        Self::from(map)
    }
}
