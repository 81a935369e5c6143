// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Ordering functions for skip list keys.
//!
//! A comparator is a strict "less than" over keys. It must define a strict
//! total order over every key ever inserted; two keys are considered equal
//! when neither is less than the other.

/// A strict total order over keys of type `K`.
pub trait Comparator<K: ?Sized> {
    /// Returns true if `a` sorts strictly before `b`.
    fn less(&self, a: &K, b: &K) -> bool;

    /// Equality implied by the order: neither key sorts before the other.
    #[inline]
    fn equal(&self, a: &K, b: &K) -> bool {
        return !self.less(a, b) && !self.less(b, a);
    }
}

/// Any `Fn(&K, &K) -> bool` closure is a comparator.
impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        return self(a, b);
    }
}

/// The key type's own `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        return a < b;
    }
}

/// Inverts another comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for Reverse<C> {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        return self.0.less(b, a);
    }
}
