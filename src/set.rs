// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! An ordered set on top of the skip list map.

use std::fmt;

use rand::rngs::StdRng;
use rand_core::RngCore;

use crate::compare::Comparator;
use crate::compare::Natural;
use crate::skiplist::Cursor;
use crate::skiplist::RangeCursor;
use crate::skiplist::SkipList;

/// An ordered set of keys, stored as a skip list map with unit values.
pub struct SkipSet<K, C = Natural, R = StdRng> {
    map: SkipList<K, (), C, R>,
}

impl<K: Ord> SkipSet<K> {
    pub fn new() -> Self {
        return SkipSet {
            map: SkipList::new(),
        };
    }
}

impl<K, C: Comparator<K>> SkipSet<K, C> {
    pub fn with_comparator(cmp: C) -> Self {
        return SkipSet {
            map: SkipList::with_comparator(cmp),
        };
    }
}

impl<K, C: Comparator<K>, R: RngCore> SkipSet<K, C, R> {
    pub fn with_rng(cmp: C, rng: R) -> Self {
        return SkipSet {
            map: SkipList::with_rng(cmp, rng),
        };
    }

    /// Add a key. Returns true if it was not already present.
    pub fn insert(&mut self, key: K) -> bool {
        return self.map.set(key, ()).is_none();
    }

    /// Remove a key. Returns true if it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        return self.map.delete(key).is_some();
    }
}

impl<K, C: Comparator<K>, R> SkipSet<K, C, R> {
    pub fn contains(&self, key: &K) -> bool {
        return self.map.contains_key(key);
    }

    /// Cursor positioned before the smallest key.
    pub fn cursor(&self) -> Cursor<'_, K, (), C, R> {
        return self.map.iterator();
    }

    /// Cursor over the keys `k` with `from <= k < to`.
    pub fn range(&self, from: K, to: K) -> RangeCursor<'_, K, (), C, R> {
        return self.map.range(from, to);
    }
}

impl<K, C, R> SkipSet<K, C, R> {
    pub fn len(&self) -> usize {
        return self.map.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.map.is_empty();
    }

    pub fn first(&self) -> Option<&K> {
        return self.map.first().map(|(key, _)| key);
    }

    pub fn last(&self) -> Option<&K> {
        return self.map.last().map(|(key, _)| key);
    }

    pub fn max_level(&self) -> usize {
        return self.map.max_level();
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        return self.map.keys();
    }
}

impl<K: Ord> Default for SkipSet<K> {
    fn default() -> Self {
        return SkipSet::new();
    }
}

impl<K: Ord> FromIterator<K> for SkipSet<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut set = SkipSet::new();
        set.extend(iter);
        return set;
    }
}

impl<K, C: Comparator<K>, R: RngCore> Extend<K> for SkipSet<K, C, R> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: fmt::Debug, C, R> fmt::Debug for SkipSet<K, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_set().entries(self.iter()).finish();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::compare::Reverse;

    #[test]
    fn insert_and_remove() {
        let mut set = SkipSet::new();
        assert!(set.insert(3));
        assert!(set.insert(1));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&1));
        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert!(!set.contains(&1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ordered_iteration() {
        let set: SkipSet<&str> = ["pear", "apple", "fig"].into_iter().collect();
        let keys: Vec<&str> = set.iter().copied().collect();
        assert_eq!(keys, vec!["apple", "fig", "pear"]);
        assert_eq!(set.first(), Some(&"apple"));
        assert_eq!(set.last(), Some(&"pear"));
        assert_eq!(format!("{:?}", set), r#"{"apple", "fig", "pear"}"#);
    }

    #[test]
    fn cursor_and_range() {
        let set: SkipSet<i32> = (0..10).collect();
        let mut cursor = set.cursor();
        assert!(cursor.seek(&4));
        assert_eq!(cursor.key(), Some(&4));

        let mut range = set.range(7, 20);
        let mut keys = Vec::new();
        while range.next() {
            keys.push(*range.key().unwrap());
        }
        assert_eq!(keys, vec![7, 8, 9]);
    }

    #[test]
    fn reversed_set() {
        let mut set = SkipSet::with_rng(Reverse(Natural), StdRng::seed_from_u64(3));
        set.extend([1, 3, 2]);
        let keys: Vec<i32> = set.iter().copied().collect();
        assert_eq!(keys, vec![3, 2, 1]);
        assert_eq!(set.max_level(), 32);
    }
}
