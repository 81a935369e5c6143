// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Bidirectional cursors over a skip list.
//!
//! A cursor remembers a position in the list and the entry found there.
//! It moves one node at a time with `next()` and `previous()`, and can jump
//! forward with `seek()`.
//!
//! # Usage Patterns
//!
//! ## Full scan
//! ```
//! use skipmap::SkipList;
//!
//! let mut map = SkipList::new();
//! map.set(2, "b");
//! map.set(1, "a");
//!
//! let mut cursor = map.iterator();
//! let mut keys = Vec::new();
//! while cursor.next() {
//!     keys.push(*cursor.key().unwrap());
//! }
//! assert_eq!(keys, vec![1, 2]);
//! ```
//!
//! ## Increasing seeks
//! Seeking to a key at or after the current one resumes the search from the
//! cursor's neighbourhood instead of the header, so a run of increasing
//! seeks costs less than the same number of fresh lookups.
//!
//! ## Bounded scan
//! `range(from, to)` yields the keys in `[from, to)` and refuses to step or
//! seek outside of them.
//!
//! Cursors borrow the list. The list cannot be modified while one is alive.

use rand::rngs::StdRng;

use super::SkipList;
use super::node::HEAD;
use super::node::Idx;
use super::node::NIL;
use crate::compare::Comparator;
use crate::compare::Natural;

/// A cursor over every entry of a skip list.
///
/// Created by [`SkipList::iterator`] (before the first entry),
/// [`SkipList::seek`], [`SkipList::seek_to_first`] and
/// [`SkipList::seek_to_last`].
pub struct Cursor<'a, K, V, C = Natural, R = StdRng> {
    /// The list, cleared by `close`.
    list: Option<&'a SkipList<K, V, C, R>>,
    /// Current node, or HEAD before the first entry.
    current: Idx,
    /// Entry at `current`.
    entry: Option<(&'a K, &'a V)>,
}

impl<'a, K, V, C: Comparator<K>, R> Cursor<'a, K, V, C, R> {
    pub(crate) fn new(list: &'a SkipList<K, V, C, R>, current: Idx) -> Self {
        let mut cursor = Cursor {
            list: Some(list),
            current: HEAD,
            entry: None,
        };
        if current != HEAD {
            cursor.move_to(list, current);
        }
        return cursor;
    }

    /// Current key. `None` before the first move or after `close`.
    pub fn key(&self) -> Option<&'a K> {
        return self.entry.map(|(key, _)| key);
    }

    /// Current value. `None` before the first move or after `close`.
    pub fn value(&self) -> Option<&'a V> {
        return self.entry.map(|(_, value)| value);
    }

    /// Advance to the next entry. Returns false, without moving, at the end.
    pub fn next(&mut self) -> bool {
        let Some(list) = self.list else {
            return false;
        };
        let next = list.forward(self.current, 0);
        if next == NIL {
            return false;
        }
        self.move_to(list, next);
        return true;
    }

    /// Step back to the previous entry. Returns false, without moving, at the
    /// first entry or before it.
    pub fn previous(&mut self) -> bool {
        let Some(list) = self.list else {
            return false;
        };
        let previous = backward_of(list, self.current);
        if previous == NIL {
            return false;
        }
        self.move_to(list, previous);
        return true;
    }

    /// Move to the first entry whose key is at least `key`.
    ///
    /// If the target is not behind the current key, the search starts one
    /// node back from the cursor instead of at the header. Returns false and
    /// stays put if no such entry exists.
    pub fn seek(&mut self, key: &K) -> bool {
        let Some(list) = self.list else {
            return false;
        };
        let found = self.locate(list, key);
        if found == NIL {
            return false;
        }
        self.move_to(list, found);
        return true;
    }

    /// Drop every reference held by the cursor.
    ///
    /// Afterwards every move fails and `key`/`value` return `None`.
    pub fn close(&mut self) {
        self.list = None;
        self.current = NIL;
        self.entry = None;
    }

    // --- Positioning helpers shared with RangeCursor ---

    fn move_to(&mut self, list: &'a SkipList<K, V, C, R>, idx: Idx) {
        let node = list.node(idx);
        self.current = idx;
        self.entry = Some((&node.key, &node.value));
    }

    /// Lower bound of `key`, searched from the cursor's neighbourhood when
    /// the target is ahead of it.
    fn locate(&self, list: &SkipList<K, V, C, R>, key: &K) -> Idx {
        let mut current = self.current;

        // A target behind the cursor cannot reuse the traversal so far.
        if current != HEAD && list.comparator().less(key, &list.node(current).key) {
            current = HEAD;
        }

        // Back up one node so that seeking the current key finds it again.
        let start = match backward_of(list, current) {
            NIL => HEAD,
            previous => previous,
        };
        return list.path(start, None, key);
    }
}

/// Level 0 predecessor of a position. NIL before the first entry.
fn backward_of<K, V, C, R>(list: &SkipList<K, V, C, R>, idx: Idx) -> Idx {
    if idx == HEAD {
        return NIL;
    }
    return list.node(idx).backward;
}

/// A cursor restricted to the keys `k` with `from <= k < to`.
///
/// Created by [`SkipList::range`]. It starts unpositioned; the first call to
/// `next()` or `previous()` lands on the smallest key in range.
pub struct RangeCursor<'a, K, V, C = Natural, R = StdRng> {
    cursor: Cursor<'a, K, V, C, R>,
    /// Lower bound of `from`, until the cursor first moves.
    pending: Option<Idx>,
    lower: Option<K>,
    upper: Option<K>,
}

impl<'a, K, V, C: Comparator<K>, R> RangeCursor<'a, K, V, C, R> {
    pub(crate) fn new(list: &'a SkipList<K, V, C, R>, from: K, to: K) -> Self {
        let start = list.path(HEAD, None, &from);
        return RangeCursor {
            cursor: Cursor::new(list, HEAD),
            pending: Some(start),
            lower: Some(from),
            upper: Some(to),
        };
    }

    pub fn key(&self) -> Option<&'a K> {
        return self.cursor.key();
    }

    pub fn value(&self) -> Option<&'a V> {
        return self.cursor.value();
    }

    /// Advance to the next entry, unless its key is not less than `to`.
    pub fn next(&mut self) -> bool {
        let Some(list) = self.cursor.list else {
            return false;
        };
        let candidate = match self.pending {
            Some(start) => start,
            None => list.forward(self.cursor.current, 0),
        };
        return self.land(list, candidate);
    }

    /// Step back to the previous entry, unless its key is less than `from`.
    pub fn previous(&mut self) -> bool {
        let Some(list) = self.cursor.list else {
            return false;
        };
        let candidate = match self.pending {
            Some(start) => start,
            None => backward_of(list, self.cursor.current),
        };
        return self.land(list, candidate);
    }

    /// Seek within the range. Targets outside `[from, to)` are rejected, as
    /// is a landing entry at or beyond `to`.
    pub fn seek(&mut self, key: &K) -> bool {
        let Some(list) = self.cursor.list else {
            return false;
        };
        if !self.contains(list, key) {
            return false;
        }
        let found = self.cursor.locate(list, key);
        return self.land(list, found);
    }

    /// Drop every reference held by the cursor, bounds included.
    pub fn close(&mut self) {
        self.cursor.close();
        self.pending = None;
        self.lower = None;
        self.upper = None;
    }

    fn contains(&self, list: &SkipList<K, V, C, R>, key: &K) -> bool {
        let (Some(lower), Some(upper)) = (&self.lower, &self.upper) else {
            return false;
        };
        let cmp = list.comparator();
        return !cmp.less(key, lower) && cmp.less(key, upper);
    }

    fn land(&mut self, list: &'a SkipList<K, V, C, R>, idx: Idx) -> bool {
        if idx == NIL || !self.contains(list, &list.node(idx).key) {
            return false;
        }
        self.pending = None;
        self.cursor.move_to(list, idx);
        return true;
    }
}
