// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

use smallvec::SmallVec;
use smallvec::smallvec;

/// Node index type. u32 saves space vs usize on 64-bit.
pub(crate) type Idx = u32;

/// Null index marker.
pub(crate) const NIL: Idx = Idx::MAX;

/// Index of the header sentinel. Its links live in the list, not the arena.
pub(crate) const HEAD: Idx = Idx::MAX - 1;

/// Forward links. With p = 1/4 almost every node fits inline.
pub(crate) type Links = SmallVec<[Idx; 4]>;

/// A node in the skip list. Each node stores exactly one entry.
pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
    /// Forward pointers, one per level this node participates in.
    pub forward: Links,
    /// Level 0 predecessor, NIL for the first node.
    pub backward: Idx,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V, height: usize) -> Self {
        Node {
            key,
            value,
            forward: smallvec![NIL; height],
            backward: NIL,
        }
    }

    pub fn height(&self) -> usize {
        self.forward.len()
    }
}

/// Slots for nodes, addressed by stable indices.
///
/// Removed nodes leave a vacant slot that the free list hands out again, so
/// indices held by other nodes never shift.
pub(crate) struct Arena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free_list: Vec<Idx>,
}

impl<K, V> Arena<K, V> {
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    pub fn get(&self, idx: Idx) -> &Node<K, V> {
        match &self.slots[idx as usize] {
            Some(node) => node,
            None => unreachable!("link to vacant slot {}", idx),
        }
    }

    pub fn get_mut(&mut self, idx: Idx) -> &mut Node<K, V> {
        match &mut self.slots[idx as usize] {
            Some(node) => node,
            None => unreachable!("link to vacant slot {}", idx),
        }
    }

    pub fn alloc(&mut self, node: Node<K, V>) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            self.slots[idx as usize] = Some(node);
            return idx;
        }
        let idx = self.slots.len();
        assert!(idx < HEAD as usize, "skip list is full");
        self.slots.push(Some(node));
        idx as Idx
    }

    pub fn release(&mut self, idx: Idx) -> Node<K, V> {
        match self.slots[idx as usize].take() {
            Some(node) => {
                self.free_list.push(idx);
                node
            }
            None => unreachable!("double release of slot {}", idx),
        }
    }

    /// Number of vacant slots waiting for reuse.
    #[cfg(test)]
    pub fn vacant(&self) -> usize {
        self.free_list.len()
    }
}
