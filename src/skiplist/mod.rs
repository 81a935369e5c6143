// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Skip List
//!
//! An ordered map with O(log n) expected lookup, insertion and deletion.
//! Skip lists use probabilistic balancing rather than strictly enforced
//! balancing, so insertion and deletion are much simpler than in balanced
//! trees (Pugh, "Skip lists: a probabilistic alternative to balanced trees",
//! CACM 33(6), 1990).
//!
//! # Structure
//!
//! ```text
//! Level 2: HEAD ------------------> 4 --------------------------> NIL
//! Level 1: HEAD --------> 3 ------> 4 ----------------> 9 ------> NIL
//! Level 0: HEAD -> 1 ---> 3 ------> 4 ------> 5 ------> 9 ------> NIL
//!                  1 <--- 3 <------ 4 <------ 5 <------ 9 = footer
//! ```
//!
//! - Nodes live in an arena and link to each other by index.
//! - `forward[i]` of a node is the next node that also has level `i`.
//! - Level 0 is doubly linked: every node knows its predecessor.
//! - The header has no entry. The number of header links is the number of
//!   levels in use; it grows when a taller node arrives and shrinks when the
//!   top levels empty out.
//! - The footer caches the node with the largest key.
//!
//! # Operations
//!
//! Every operation goes through [`SkipList::path`], which walks from the top
//! level down and optionally records the predecessor at each level.
//!
//! - `get(key)`, `get_greater_or_equal(key)`: O(log n)
//! - `set(key, value)`: O(log n), overwrites in place if the key exists
//! - `delete(key)`: O(log n)
//! - `iterator()`, `seek(key)`, `seek_to_first()`, `seek_to_last()`,
//!   `range(from, to)`: bidirectional cursors, see [`cursor`]
//! - `iter()`: a plain Rust iterator over entries in key order

pub mod cursor;
pub mod iter;
mod level;
mod node;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_core::RngCore;

use crate::compare::Comparator;
use crate::compare::Natural;
use crate::config::Config;
use crate::config::ConfigError;

pub use cursor::Cursor;
pub use cursor::RangeCursor;
pub use iter::Iter;

use level::LevelPolicy;
use node::Arena;
use node::HEAD;
use node::Idx;
use node::NIL;
use node::Node;

/// An ordered map backed by a skip list.
///
/// `C` orders the keys (see [`Comparator`]) and `R` supplies randomness for
/// node heights. Cursors borrow the list, so it cannot be modified while a
/// cursor is alive.
///
/// ```
/// use skipmap::SkipList;
///
/// let mut map = SkipList::new();
/// map.set(3, "three");
/// map.set(1, "one");
///
/// let mut cursor = map.iterator();
/// while cursor.next() {
///     println!("{:?} => {:?}", cursor.key(), cursor.value());
/// }
/// ```
pub struct SkipList<K, V, C = Natural, R = StdRng> {
    /// Ordering function over keys.
    cmp: C,
    /// Arena of nodes.
    nodes: Arena<K, V>,
    /// Header forward links. `head.len() - 1` is the current level.
    head: Vec<Idx>,
    /// Node with the largest key, NIL when empty.
    footer: Idx,
    /// Number of live entries.
    len: usize,
    /// Scratch predecessor path, sized to the tallest level ever reached.
    update: Vec<Idx>,
    /// Height generator.
    levels: LevelPolicy<R>,
}

/// Map with `i64` keys in natural order.
pub type IntMap<V> = SkipList<i64, V>;

/// Map with `i32` keys in natural order.
pub type Int32Map<V> = SkipList<i32, V>;

/// Map with `String` keys in lexicographic order.
pub type StringMap<V> = SkipList<String, V>;

impl<K: Ord, V> SkipList<K, V> {
    /// Create an empty map ordered by `K`'s `Ord` implementation.
    pub fn new() -> Self {
        return SkipList::with_comparator(Natural);
    }
}

impl<K, V, C: Comparator<K>> SkipList<K, V, C> {
    /// Create an empty map ordered by `cmp`, with an entropy-seeded generator.
    pub fn with_comparator(cmp: C) -> Self {
        return SkipList::with_rng(cmp, StdRng::from_entropy());
    }
}

impl<K, V, C: Comparator<K>, R: RngCore> SkipList<K, V, C, R> {
    /// Create an empty map with an explicit random source.
    ///
    /// Seed the generator to make node heights, and so the shape of the list,
    /// reproducible.
    pub fn with_rng(cmp: C, rng: R) -> Self {
        return SkipList::build(cmp, rng, Config::default());
    }

    /// Create an empty map with a custom level ceiling and probability.
    pub fn with_config(cmp: C, rng: R, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            max_level = config.max_level,
            probability = config.probability,
            "building skip list"
        );
        return Ok(SkipList::build(cmp, rng, config));
    }

    fn build(cmp: C, rng: R, config: Config) -> Self {
        return SkipList {
            cmp,
            nodes: Arena::new(),
            head: vec![NIL],
            footer: NIL,
            len: 0,
            update: vec![HEAD; config.max_level + 1],
            levels: LevelPolicy::new(rng, &config),
        };
    }

    /// Insert a key, or overwrite the value of an equal key.
    ///
    /// Returns the previous value if the key was already present. Overwriting
    /// does not change the structure of the list.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let level = self.level();
        let mut update = std::mem::take(&mut self.update);
        let candidate = self.path(HEAD, Some(&mut update[..=level]), &key);

        if candidate != NIL && self.cmp.equal(&self.nodes.get(candidate).key, &key) {
            self.update = update;
            let node = self.nodes.get_mut(candidate);
            return Some(std::mem::replace(&mut node.value, value));
        }

        let new_level = self.levels.random_level(level);
        if new_level > level {
            // Nothing reaches this high yet, so the header is the predecessor.
            if update.len() <= new_level {
                update.resize(new_level + 1, HEAD);
            }
            for i in (level + 1)..=new_level {
                update[i] = HEAD;
                self.head.push(NIL);
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(from = level, to = new_level, "skip list level raised");
        }

        let is_max = self.footer == NIL || self.cmp.less(&self.nodes.get(self.footer).key, &key);

        let mut node = Node::new(key, value, new_level + 1);
        if update[0] != HEAD {
            node.backward = update[0];
        }
        for i in 0..=new_level {
            node.forward[i] = self.forward(update[i], i);
        }
        let successor = node.forward[0];

        let idx = self.nodes.alloc(node);
        for i in 0..=new_level {
            self.set_forward(update[i], i, idx);
        }
        if successor != NIL {
            self.nodes.get_mut(successor).backward = idx;
        }

        self.len += 1;
        if is_max {
            self.footer = idx;
        }
        self.update = update;
        self.check_invariants();
        return None;
    }

    /// Remove a key, returning its value if it was present.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let level = self.level();
        let mut update = std::mem::take(&mut self.update);
        let candidate = self.path(HEAD, Some(&mut update[..=level]), key);

        if candidate == NIL || !self.cmp.equal(&self.nodes.get(candidate).key, key) {
            self.update = update;
            return None;
        }

        let (previous, next, height) = {
            let node = self.nodes.get(candidate);
            (node.backward, node.forward[0], node.height())
        };

        if self.footer == candidate {
            self.footer = previous;
        }
        if next != NIL {
            self.nodes.get_mut(next).backward = previous;
        }

        // The levels a node is linked at are contiguous from 0.
        for i in 0..height.min(level + 1) {
            if self.forward(update[i], i) != candidate {
                break;
            }
            let after = self.nodes.get(candidate).forward[i];
            self.set_forward(update[i], i, after);
        }

        while self.level() > 0 && self.head[self.level()] == NIL {
            self.head.pop();
            #[cfg(feature = "tracing")]
            tracing::trace!(to = self.level(), "skip list level lowered");
        }

        self.len -= 1;
        self.update = update;
        let node = self.nodes.release(candidate);
        self.check_invariants();
        return Some(node.value);
    }
}

impl<K, V, C, R> SkipList<K, V, C, R> {
    /// Number of entries.
    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Current top level. Level 0 is the base list.
    pub fn level(&self) -> usize {
        return self.head.len() - 1;
    }

    /// Configured level ceiling.
    pub fn max_level(&self) -> usize {
        return self.levels.ceiling();
    }

    /// Entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        return self.entry(self.head[0]);
    }

    /// Entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        return self.entry(self.footer);
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        return Iter::new(&self.nodes, self.head[0], self.footer, self.len);
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        return self.iter().map(|(key, _)| key);
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        return self.iter().map(|(_, value)| value);
    }

    // --- Node access helpers ---

    fn entry(&self, idx: Idx) -> Option<(&K, &V)> {
        if idx == NIL {
            return None;
        }
        let node = self.nodes.get(idx);
        return Some((&node.key, &node.value));
    }

    pub(crate) fn node(&self, idx: Idx) -> &Node<K, V> {
        return self.nodes.get(idx);
    }

    /// Number of levels at a position.
    pub(crate) fn height(&self, at: Idx) -> usize {
        if at == HEAD {
            return self.head.len();
        }
        return self.nodes.get(at).height();
    }

    /// Next node after a position at the given level.
    pub(crate) fn forward(&self, at: Idx, level: usize) -> Idx {
        if at == HEAD {
            return self.head[level];
        }
        return self.nodes.get(at).forward[level];
    }

    fn set_forward(&mut self, at: Idx, level: usize, to: Idx) {
        if at == HEAD {
            self.head[level] = to;
        } else {
            self.nodes.get_mut(at).forward[level] = to;
        }
    }
}

impl<K, V, C: Comparator<K>, R> SkipList<K, V, C, R> {
    /// Find the first node whose key is not less than `key`.
    ///
    /// Walks from the top level of `start` down to level 0, advancing while
    /// the next key is less than `key`. If `update` is given, the last node
    /// visited at each level is recorded there; it must have a slot for every
    /// level of `start`. Returns NIL if every key is less than `key`.
    pub(crate) fn path(&self, start: Idx, mut update: Option<&mut [Idx]>, key: &K) -> Idx {
        let mut current = start;
        for level in (0..self.height(start)).rev() {
            loop {
                let next = self.forward(current, level);
                if next == NIL || !self.cmp.less(&self.nodes.get(next).key, key) {
                    break;
                }
                current = next;
            }
            if let Some(update) = update.as_deref_mut() {
                update[level] = current;
            }
        }
        return self.forward(current, 0);
    }

    pub(crate) fn comparator(&self) -> &C {
        return &self.cmp;
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        let candidate = self.find(key);
        if candidate == NIL {
            return None;
        }
        return Some(&self.nodes.get(candidate).value);
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let candidate = self.find(key);
        if candidate == NIL {
            return None;
        }
        return Some(&mut self.nodes.get_mut(candidate).value);
    }

    pub fn contains_key(&self, key: &K) -> bool {
        return self.find(key) != NIL;
    }

    /// First entry whose key is greater than or equal to `min`.
    pub fn get_greater_or_equal(&self, min: &K) -> Option<(&K, &V)> {
        return self.entry(self.path(HEAD, None, min));
    }

    /// Cursor positioned before the first entry.
    pub fn iterator(&self) -> Cursor<'_, K, V, C, R> {
        return Cursor::new(self, HEAD);
    }

    /// Cursor at the first entry whose key is at least `key`, if any.
    pub fn seek(&self, key: &K) -> Option<Cursor<'_, K, V, C, R>> {
        let current = self.path(HEAD, None, key);
        if current == NIL {
            return None;
        }
        return Some(Cursor::new(self, current));
    }

    /// Cursor at the smallest key, if the map is not empty.
    pub fn seek_to_first(&self) -> Option<Cursor<'_, K, V, C, R>> {
        let first = self.head[0];
        if first == NIL {
            return None;
        }
        return Some(Cursor::new(self, first));
    }

    /// Cursor at the largest key, if the map is not empty.
    pub fn seek_to_last(&self) -> Option<Cursor<'_, K, V, C, R>> {
        if self.footer == NIL {
            return None;
        }
        return Some(Cursor::new(self, self.footer));
    }

    /// Cursor over the keys `k` with `from <= k < to`.
    pub fn range(&self, from: K, to: K) -> RangeCursor<'_, K, V, C, R> {
        return RangeCursor::new(self, from, to);
    }

    /// Index of the node whose key equals `key`, or NIL.
    fn find(&self, key: &K) -> Idx {
        let candidate = self.path(HEAD, None, key);
        if candidate == NIL || !self.cmp.equal(&self.nodes.get(candidate).key, key) {
            return NIL;
        }
        return candidate;
    }

    // --- Invariant checking ---

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        // Invariant 1: level 0 visits len nodes in strictly increasing order,
        // and each backward link names the node before it.
        let mut count = 0usize;
        let mut previous = NIL;
        let mut idx = self.head[0];
        while idx != NIL {
            let node = self.nodes.get(idx);
            assert_eq!(
                node.backward, previous,
                "INVARIANT VIOLATED: backward link of node {} is {}, expected {}",
                idx, node.backward, previous
            );
            if previous != NIL {
                assert!(
                    self.cmp.less(&self.nodes.get(previous).key, &node.key),
                    "INVARIANT VIOLATED: keys out of order at node {}",
                    idx
                );
            }
            count += 1;
            previous = idx;
            idx = node.forward[0];
        }
        assert_eq!(
            count, self.len,
            "INVARIANT VIOLATED: level 0 count={} != len={}",
            count, self.len
        );

        // Invariant 2: the footer is the last node.
        assert_eq!(
            self.footer, previous,
            "INVARIANT VIOLATED: footer={} but last node={}",
            self.footer, previous
        );

        // Invariant 3: the top header level is in use unless it is level 0.
        assert!(
            self.level() == 0 || self.head[self.level()] != NIL,
            "INVARIANT VIOLATED: empty top level {}",
            self.level()
        );
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Reverse;

    fn seeded<V>(seed: u64) -> SkipList<i32, V, Natural, StdRng> {
        return SkipList::with_rng(Natural, StdRng::seed_from_u64(seed));
    }

    fn keys_of<V>(list: &SkipList<i32, V, Natural, StdRng>) -> Vec<i32> {
        return list.keys().copied().collect();
    }

    #[test]
    fn empty_list() {
        let list: SkipList<i32, i32> = SkipList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.level(), 0);
        assert_eq!(list.max_level(), 32);
        assert_eq!(list.get(&1), None);
        assert_eq!(list.get_greater_or_equal(&1), None);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
    }

    #[test]
    fn set_and_get() {
        let mut list = seeded(1);
        for key in [3, 1, 4, 1, 5, 9] {
            list.set(key, key);
        }
        assert_eq!(list.len(), 5);
        assert_eq!(keys_of(&list), vec![1, 3, 4, 5, 9]);
        for key in [1, 3, 4, 5, 9] {
            assert_eq!(list.get(&key), Some(&key));
        }
        assert_eq!(list.get(&2), None);
        assert_eq!(list.get(&10), None);
    }

    #[test]
    fn overwrite_keeps_structure() {
        let mut list = seeded(2);
        assert_eq!(list.set(1, "a"), None);
        let level = list.level();
        assert_eq!(list.set(1, "b"), Some("a"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.level(), level);
        assert_eq!(list.get(&1), Some(&"b"));
    }

    #[test]
    fn get_greater_or_equal() {
        let mut list = seeded(3);
        for key in [10, 20, 30] {
            list.set(key, key * 100);
        }
        assert_eq!(list.get_greater_or_equal(&5), Some((&10, &1000)));
        assert_eq!(list.get_greater_or_equal(&20), Some((&20, &2000)));
        assert_eq!(list.get_greater_or_equal(&21), Some((&30, &3000)));
        assert_eq!(list.get_greater_or_equal(&31), None);
    }

    #[test]
    fn delete_relinks_neighbours() {
        let mut list = seeded(4);
        for key in [3, 1, 4, 5, 9] {
            list.set(key, key);
        }
        assert_eq!(list.delete(&4), Some(4));
        assert_eq!(list.delete(&4), None);
        assert_eq!(list.len(), 4);
        assert_eq!(keys_of(&list), vec![1, 3, 5, 9]);
        let backward: Vec<i32> = list.keys().rev().copied().collect();
        assert_eq!(backward, vec![9, 5, 3, 1]);
        assert_eq!(list.last(), Some((&9, &9)));
    }

    #[test]
    fn delete_footer_rolls_back() {
        let mut list = seeded(5);
        for key in 1..=3 {
            list.set(key, ());
        }
        assert_eq!(list.delete(&3), Some(()));
        assert_eq!(list.last().map(|(k, _)| *k), Some(2));
        assert_eq!(list.delete(&1), Some(()));
        assert_eq!(list.delete(&2), Some(()));
        assert_eq!(list.last(), None);
        assert_eq!(list.first(), None);
    }

    #[test]
    fn header_shrinks_when_emptied() {
        let mut list = seeded(6);
        for key in 0..500 {
            list.set(key, key);
        }
        assert!(list.level() > 0);
        for key in 0..500 {
            assert_eq!(list.delete(&key), Some(key));
        }
        assert_eq!(list.len(), 0);
        assert_eq!(list.level(), 0);
    }

    #[test]
    fn slots_are_recycled() {
        let mut list = seeded(7);
        for key in 0..10 {
            list.set(key, key);
        }
        for key in 0..5 {
            list.delete(&key);
        }
        assert_eq!(list.nodes.vacant(), 5);
        for key in 100..105 {
            list.set(key, key);
        }
        assert_eq!(list.nodes.vacant(), 0);
        assert_eq!(keys_of(&list), vec![5, 6, 7, 8, 9, 100, 101, 102, 103, 104]);
    }

    #[test]
    fn path_records_predecessors() {
        let mut list = seeded(8);
        for key in [10, 20, 30, 40] {
            list.set(key, ());
        }
        let level = list.level();
        let mut update = vec![NIL; level + 1];
        let found = list.path(HEAD, Some(&mut update[..]), &25);
        assert_eq!(list.node(found).key, 30);
        // Level 0 predecessor is the node just before the insertion point.
        assert_eq!(list.node(update[0]).key, 20);
        for i in 0..=level {
            assert_ne!(update[i], NIL);
            let next = list.forward(update[i], i);
            assert!(next == NIL || list.node(next).key >= 25);
        }
    }

    #[test]
    fn seeded_lists_have_same_shape() {
        let mut a = seeded(9);
        let mut b = seeded(9);
        for key in 0..200 {
            a.set(key, ());
            b.set(key, ());
        }
        assert_eq!(a.level(), b.level());
        for key in 0..200 {
            let ia = a.find(&key);
            let ib = b.find(&key);
            assert_eq!(a.node(ia).height(), b.node(ib).height());
        }
    }

    #[test]
    fn custom_comparator() {
        let mut list = SkipList::with_rng(Reverse(Natural), StdRng::seed_from_u64(10));
        for key in [1, 5, 3] {
            list.set(key, ());
        }
        let keys: Vec<i32> = list.keys().copied().collect();
        assert_eq!(keys, vec![5, 3, 1]);
        assert_eq!(list.last().map(|(k, _)| *k), Some(1));
    }

    #[test]
    fn with_config_validates() {
        let rng = StdRng::seed_from_u64(11);
        let bad = Config::default().with_probability(2.0);
        let result: Result<SkipList<i32, (), _, _>, _> = SkipList::with_config(Natural, rng, bad);
        assert_eq!(result.err(), Some(ConfigError::InvalidProbability(2.0)));

        let rng = StdRng::seed_from_u64(11);
        let config = Config::default().with_max_level(4).with_probability(0.5);
        let mut list = SkipList::with_config(Natural, rng, config).unwrap();
        for key in 0..1000 {
            list.set(key, ());
        }
        assert_eq!(list.max_level(), 4);
        assert!(list.level() <= 4);
    }

    #[test]
    fn get_mut_updates_value() {
        let mut list = seeded(12);
        list.set(1, 10);
        if let Some(value) = list.get_mut(&1) {
            *value += 5;
        }
        assert_eq!(list.get(&1), Some(&15));
        assert!(list.get_mut(&2).is_none());
        assert!(list.contains_key(&1));
        assert!(!list.contains_key(&2));
    }

    #[test]
    fn stress_test() {
        let mut list = seeded(13);
        for i in 0..1000 {
            list.set(i, i);
        }
        assert_eq!(list.len(), 1000);

        // Remove every even key.
        for i in (0..1000).step_by(2) {
            assert_eq!(list.delete(&i), Some(i));
        }
        assert_eq!(list.len(), 500);
        for i in 0..1000 {
            let expected = if i % 2 == 1 { Some(&i) } else { None };
            assert_eq!(list.get(&i), expected, "failed at {}", i);
        }
    }
}
