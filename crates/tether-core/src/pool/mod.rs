//! Free pool management.
//!
//! The pool holds every child id that is currently not owned by a parent.
//! Two allocation strategies are available:
//!
//! 1. **Unordered** - arbitrary id per allocation, O(1) everything
//! 2. **Ordered** - always the smallest free id, O(log N)
//!
//! # Example
//!
//! ```rust
//! use tether_core::pool::{ChildId, FreePool, Universe};
//!
//! let mut pool = FreePool::new(&Universe::range(4), true);
//! assert_eq!(pool.pop(), Some(ChildId(0)));
//! assert_eq!(pool.pop(), Some(ChildId(1)));
//!
//! pool.insert(ChildId(0));
//! assert_eq!(pool.pop(), Some(ChildId(0)));
//! assert_eq!(pool.len(), 2);
//! ```

mod id;
mod swap_set;
mod universe;

pub use id::{ChildId, IntoChildIds};
pub use swap_set::SwapSet;
pub use universe::Universe;

use std::collections::BTreeSet;

/// Pool of free child ids.
#[derive(Debug, Clone)]
pub enum FreePool {
    /// Arbitrary pop order.
    Unordered(SwapSet),
    /// Smallest id first.
    Ordered(BTreeSet<ChildId>),
}

impl FreePool {
    /// Create a pool seeded with every id of `universe`.
    pub fn new(universe: &Universe, ordered: bool) -> Self {
        let ids = universe.ids();
        if ordered {
            return FreePool::Ordered(ids.into_iter().collect());
        }

        // Seeded in descending order so a fresh pool pops low ids first.
        let mut set = SwapSet::with_capacity(ids.len());
        for id in ids.into_iter().rev() {
            set.insert(id);
        }
        FreePool::Unordered(set)
    }

    /// Take one free id out of the pool.
    pub fn pop(&mut self) -> Option<ChildId> {
        match self {
            FreePool::Unordered(set) => set.pop(),
            FreePool::Ordered(set) => set.pop_first(),
        }
    }

    /// Return an id to the pool.
    pub fn insert(&mut self, id: ChildId) -> bool {
        match self {
            FreePool::Unordered(set) => set.insert(id),
            FreePool::Ordered(set) => set.insert(id),
        }
    }

    /// Take a specific id out of the pool.
    pub fn remove(&mut self, id: ChildId) -> bool {
        match self {
            FreePool::Unordered(set) => set.remove(id),
            FreePool::Ordered(set) => set.remove(&id),
        }
    }

    /// Check whether an id is free.
    pub fn contains(&self, id: ChildId) -> bool {
        match self {
            FreePool::Unordered(set) => set.contains(id),
            FreePool::Ordered(set) => set.contains(&id),
        }
    }

    /// Number of free ids.
    pub fn len(&self) -> usize {
        match self {
            FreePool::Unordered(set) => set.len(),
            FreePool::Ordered(set) => set.len(),
        }
    }

    /// True if nothing is left to allocate.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this pool hands out the smallest id first.
    pub fn is_ordered(&self) -> bool {
        matches!(self, FreePool::Ordered(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pool_has_all_ids_free() {
        let pool = FreePool::new(&Universe::range(10), false);
        assert_eq!(pool.len(), 10);
        assert!(pool.contains(ChildId(9)));
        assert!(!pool.contains(ChildId(10)));
    }

    #[test]
    fn ordered_pool_pops_smallest() {
        let mut pool = FreePool::new(&Universe::from_ids([7u32, 3, 11]), true);
        assert!(pool.is_ordered());
        assert_eq!(pool.pop(), Some(ChildId(3)));

        pool.remove(ChildId(7));
        assert_eq!(pool.pop(), Some(ChildId(11)));
        assert_eq!(pool.pop(), None);
    }

    #[test]
    fn unordered_pool_pops_low_ids_when_fresh() {
        let mut pool = FreePool::new(&Universe::range(3), false);
        assert_eq!(pool.pop(), Some(ChildId(0)));
        assert_eq!(pool.pop(), Some(ChildId(1)));
        assert_eq!(pool.pop(), Some(ChildId(2)));
        assert!(pool.is_empty());
    }

    #[test]
    fn insert_and_remove_round_trip() {
        let mut pool = FreePool::new(&Universe::range(2), false);
        assert!(pool.remove(ChildId(0)));
        assert!(!pool.remove(ChildId(0)));
        assert_eq!(pool.len(), 1);

        assert!(pool.insert(ChildId(0)));
        assert!(!pool.insert(ChildId(0)));
        assert_eq!(pool.len(), 2);
    }
}
