//! Unordered id set with O(1) insert, remove and pop.

use super::ChildId;
use std::collections::HashMap;

/// Dense vector of ids plus a position index.
///
/// Removal swaps the last element into the hole, so every operation is
/// constant time. Pop order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct SwapSet {
    items: Vec<ChildId>,
    positions: HashMap<ChildId, usize>,
}

impl SwapSet {
    /// Create an empty set with room for `capacity` ids.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Insert an id. Returns false if it was already present.
    pub fn insert(&mut self, id: ChildId) -> bool {
        if self.positions.contains_key(&id) {
            return false;
        }
        self.positions.insert(id, self.items.len());
        self.items.push(id);
        true
    }

    /// Remove a specific id. Returns false if it was absent.
    pub fn remove(&mut self, id: ChildId) -> bool {
        let Some(pos) = self.positions.remove(&id) else {
            return false;
        };
        self.items.swap_remove(pos);
        if let Some(&moved) = self.items.get(pos) {
            self.positions.insert(moved, pos);
        }
        true
    }

    /// Remove and return some id.
    pub fn pop(&mut self) -> Option<ChildId> {
        let id = self.items.pop()?;
        self.positions.remove(&id);
        Some(id)
    }

    /// Check membership.
    pub fn contains(&self, id: ChildId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Number of ids held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if no ids are held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
