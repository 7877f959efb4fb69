//! Insertion-ordered, id-keyed store backing each screen's local state.

use std::collections::HashMap;
use std::hash::Hash;

/// Client-held mapping from entity id to full record.
///
/// Rebuilt wholesale on every fetch and patched in place from mutation
/// responses; mutating calls never refetch the collection. Stale state
/// risk: local and server state diverge until the next full fetch when
/// a write has side effects on entities other than the one returned.
#[derive(Debug, Clone)]
pub struct EntityMap<K, V> {
    order: Vec<K>,
    entries: HashMap<K, V>,
}

impl<K, V> Default for EntityMap<K, V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }
}

impl<K, V> EntityMap<K, V>
where
    K: Copy + Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection from a fetched sequence. Duplicate
    /// ids collapse to the last record seen, keeping the first-seen
    /// position, so the rendered count equals the de-duplicated length.
    pub fn rebuild(&mut self, records: impl IntoIterator<Item = (K, V)>) {
        self.order.clear();
        self.entries.clear();
        for (id, record) in records {
            if self.entries.insert(id, record).is_none() {
                self.order.push(id);
            }
        }
    }

    pub fn get(&self, id: &K) -> Option<&V> {
        self.entries.get(id)
    }

    /// Patch the record at `id`, appending it when it is new
    pub fn upsert(&mut self, id: K, record: V) {
        if self.entries.insert(id, record).is_none() {
            self.order.push(id);
        }
    }

    /// Drop exactly the entry at `id`; other entries keep their order
    pub fn remove(&mut self, id: &K) {
        if self.entries.remove(id).is_some() {
            self.order.retain(|k| k != id);
        }
    }

    /// Records in display order (insertion order of the last rebuild,
    /// with patched-in records appended)
    pub fn values(&self) -> Vec<V> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> EntityMap<i64, &'static str> {
        let mut map = EntityMap::new();
        map.rebuild(vec![(1, "a"), (2, "b"), (3, "c")]);
        map
    }

    #[test]
    fn rebuild_collapses_duplicate_ids_to_the_last_record() {
        let mut map = EntityMap::new();
        map.rebuild(vec![(1, "first"), (2, "b"), (1, "second")]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.values(), vec!["second", "b"]);
    }

    #[test]
    fn upsert_patches_in_place_without_moving_the_row() {
        let mut map = seeded();
        map.upsert(2, "patched");
        assert_eq!(map.values(), vec!["a", "patched", "c"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn upsert_appends_new_entries() {
        let mut map = seeded();
        map.upsert(4, "d");
        assert_eq!(map.values(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn remove_drops_exactly_one_id() {
        let mut map = seeded();
        map.remove(&2);
        assert_eq!(map.values(), vec!["a", "c"]);
        map.remove(&99);
        assert_eq!(map.len(), 2);
    }
}
