//! Lock-guarded entity map.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Entity map owned by one service.
///
/// Values leave the table as clones; writers get the map only for the
/// duration of a closure.
#[derive(Debug)]
pub(crate) struct EntityTable<K, V> {
    rows: RwLock<HashMap<K, V>>,
}

impl<K, V> Default for EntityTable<K, V> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> EntityTable<K, V>
where
    K: Eq + Hash + Copy,
    V: Clone,
{
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self, key: K) -> Option<V> {
        self.read().get(&key).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.read().len()
    }

    /// Clones every value accepted by `keep`.
    pub(crate) fn collect_where(&self, mut keep: impl FnMut(&V) -> bool) -> Vec<V> {
        self.read()
            .values()
            .filter(|value| keep(value))
            .cloned()
            .collect()
    }

    /// Runs one serialized mutation against the map.
    pub(crate) fn write_with<T>(&self, mutate: impl FnOnce(&mut HashMap<K, V>) -> T) -> T {
        let mut guard = self.write();
        mutate(&mut guard)
    }

    pub(crate) fn remove(&self, key: K) -> Option<V> {
        self.write().remove(&key)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, V>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, V>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }
}
