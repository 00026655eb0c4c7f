//! Association engine state.

use super::AssociationStats;
use crate::config::AssociationConfig;
use crate::error::{Result, TetherError};
use crate::pool::{ChildId, FreePool, IntoChildIds, Universe};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use tracing::{debug, trace, warn};

/// Bidirectional parent/child association over a bounded id pool.
///
/// Every child id in the universe is either free (held by the pool) or
/// owned by exactly one parent. The forward index maps each active parent
/// to its non-empty set of children; the reverse index maps each owned
/// child back to its parent. All mutators keep both indices and the pool
/// consistent before returning, and validate their input before touching
/// any state.
#[derive(Debug, Clone)]
pub struct Associations<A> {
    /// Construction-time configuration.
    config: AssociationConfig,
    /// Ids this engine may hand out.
    universe: Universe,
    /// Ids owned by nobody.
    free: FreePool,
    /// Parent -> owned children. Never holds an empty set.
    forward: HashMap<A, HashSet<ChildId>>,
    /// Child -> owning parent.
    reverse: HashMap<ChildId, A>,
}

impl<A: Eq + Hash + Clone> Associations<A> {
    /// Create an engine from a configuration.
    pub fn new(config: AssociationConfig) -> Self {
        let universe = config.universe.to_universe();
        let free = FreePool::new(&universe, config.ordered);

        debug!(
            capacity = universe.len(),
            ordered = config.ordered,
            single_mode = config.single_mode,
            "created association engine"
        );

        Self {
            config,
            universe,
            free,
            forward: HashMap::new(),
            reverse: HashMap::new(),
        }
    }

    /// Unordered, multi-child engine over ids `0..size`.
    pub fn with_pool_size(size: u32) -> Self {
        Self::new(AssociationConfig::with_pool_size(size))
    }

    /// Unordered, multi-child engine over an explicit id list.
    pub fn with_ids<I: IntoIterator<Item = u32>>(ids: I) -> Self {
        Self::new(AssociationConfig::with_ids(ids))
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &AssociationConfig {
        &self.config
    }

    /// Get the child id universe.
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Link one or more child ids to `parent`.
    ///
    /// A child owned by another parent is moved over; a free child leaves
    /// the pool; a child already owned by `parent` is left alone. In
    /// single-owner mode the ids are applied in order and each one replaces
    /// the previous, so `parent` ends up owning only the last id and every
    /// other id it held goes back to the pool.
    ///
    /// Fails with [`TetherError::InvalidId`] if any id is outside the
    /// universe, in which case nothing is changed.
    pub fn associate(&mut self, parent: A, children: impl IntoChildIds) -> Result<()> {
        let ids = children.into_child_ids();
        for &id in &ids {
            self.validate(id)?;
        }

        for id in ids {
            if self.config.single_mode {
                self.link_exclusive(&parent, id);
            } else {
                self.link(&parent, id);
            }
        }

        Ok(())
    }

    /// Draw a free child id and link it to `parent`.
    ///
    /// Ordered engines hand out the smallest free id. In single-owner mode
    /// the id `parent` held before is returned to the pool once the new one
    /// has been drawn; if the pool is empty, `parent` keeps its current id
    /// and gets it back.
    pub fn allocate(&mut self, parent: A) -> Result<ChildId> {
        let Some(id) = self.free.pop() else {
            if self.config.single_mode {
                let current = self.forward.get(&parent).and_then(|set| set.iter().next());
                if let Some(&current) = current {
                    trace!(child = %current, "pool empty, parent keeps its child");
                    return Ok(current);
                }
            }
            warn!(capacity = self.universe.len(), "allocation failed: pool exhausted");
            return Err(TetherError::PoolExhausted);
        };

        if self.config.single_mode {
            if let Some(previous) = self.forward.remove(&parent) {
                for old in previous {
                    self.reverse.remove(&old);
                    self.free.insert(old);
                    trace!(child = %old, "released previous child");
                }
            }
        }

        self.reverse.insert(id, parent.clone());
        self.forward.entry(parent).or_default().insert(id);
        trace!(child = %id, free = self.free.len(), "allocated child");

        Ok(id)
    }

    /// Snapshot of the children owned by `parent`. Empty if inactive.
    pub fn get_bs(&self, parent: &A) -> HashSet<ChildId> {
        self.forward.get(parent).cloned().unwrap_or_default()
    }

    /// Borrow the children owned by `parent`.
    pub fn children(&self, parent: &A) -> Option<&HashSet<ChildId>> {
        self.forward.get(parent)
    }

    /// Owner of `child`, or `None` if it is free or outside the universe.
    pub fn get_a(&self, child: impl Into<ChildId>) -> Option<&A> {
        self.reverse.get(&child.into())
    }

    /// Every parent currently owning at least one child.
    pub fn get_all_active_a(&self) -> HashSet<A> {
        self.forward.keys().cloned().collect()
    }

    /// Release every child of `parent`. Returns how many were released.
    pub fn remove_a(&mut self, parent: &A) -> usize {
        let Some(children) = self.forward.remove(parent) else {
            return 0;
        };

        let released = children.len();
        for id in children {
            self.reverse.remove(&id);
            self.free.insert(id);
        }
        debug!(released, free = self.free.len(), "removed parent");

        released
    }

    /// Release a single child back to the pool.
    ///
    /// No-op if the child is already free. Fails with
    /// [`TetherError::InvalidId`] if it is outside the universe.
    pub fn remove_b(&mut self, child: impl Into<ChildId>) -> Result<()> {
        let id = child.into();
        self.validate(id)?;
        self.release(id);
        Ok(())
    }

    /// Number of free child ids.
    pub fn count_free(&self) -> usize {
        self.free.len()
    }

    /// Number of owned child ids.
    pub fn count_used(&self) -> usize {
        self.reverse.len()
    }

    /// Size of the universe.
    pub fn capacity(&self) -> usize {
        self.universe.len()
    }

    /// Number of active parents.
    pub fn num_active(&self) -> usize {
        self.forward.len()
    }

    /// Check if `child` is in the pool.
    pub fn is_free(&self, child: impl Into<ChildId>) -> bool {
        self.free.contains(child.into())
    }

    /// Check if `parent` owns at least one child.
    pub fn contains_a(&self, parent: &A) -> bool {
        self.forward.contains_key(parent)
    }

    /// Iterate over active parents and their children.
    pub fn iter(&self) -> impl Iterator<Item = (&A, &HashSet<ChildId>)> {
        self.forward.iter()
    }

    /// Release every owned child and forget all parents.
    pub fn clear(&mut self) {
        for id in self.reverse.keys() {
            self.free.insert(*id);
        }
        self.reverse.clear();
        self.forward.clear();
        debug!(free = self.free.len(), "cleared all associations");
    }

    /// Get allocation statistics.
    pub fn stats(&self) -> AssociationStats {
        let capacity = self.capacity();
        let used = self.count_used();

        AssociationStats {
            free: self.count_free(),
            used,
            active_parents: self.num_active(),
            capacity,
            utilization: if capacity == 0 {
                0.0
            } else {
                used as f64 / capacity as f64
            },
        }
    }

    fn validate(&self, id: ChildId) -> Result<()> {
        if self.universe.contains(id) {
            Ok(())
        } else {
            Err(TetherError::InvalidId(id.0))
        }
    }

    /// Attach `id` to `parent`, taking it from the pool or its old owner.
    fn link(&mut self, parent: &A, id: ChildId) {
        if let Some(owner) = self.reverse.get(&id) {
            if owner == parent {
                return;
            }
            let owner = owner.clone();
            self.detach(&owner, id);
            trace!(child = %id, "moved child to new parent");
        } else {
            self.free.remove(id);
            trace!(child = %id, "took child from pool");
        }

        self.reverse.insert(id, parent.clone());
        self.forward.entry(parent.clone()).or_default().insert(id);
    }

    /// Attach `id` to `parent` and release whatever else `parent` held.
    fn link_exclusive(&mut self, parent: &A, id: ChildId) {
        self.link(parent, id);

        let previous: Vec<ChildId> = self
            .forward
            .get(parent)
            .map(|set| set.iter().copied().filter(|&b| b != id).collect())
            .unwrap_or_default();

        for old in previous {
            self.release(old);
        }
    }

    /// Return an owned child to the pool. False if it was already free.
    fn release(&mut self, id: ChildId) -> bool {
        let Some(owner) = self.reverse.remove(&id) else {
            return false;
        };
        self.detach(&owner, id);
        self.free.insert(id);
        trace!(child = %id, "released child");
        true
    }

    /// Drop `id` from `owner`'s set, pruning the entry if it empties.
    /// Leaves the reverse index alone.
    fn detach(&mut self, owner: &A, id: ChildId) {
        if let Some(set) = self.forward.get_mut(owner) {
            set.remove(&id);
            if set.is_empty() {
                self.forward.remove(owner);
            }
        }
    }

    /// Panic if the forward index, reverse index and pool disagree.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        for id in self.universe.ids() {
            assert_ne!(
                self.free.contains(id),
                self.reverse.contains_key(&id),
                "child {id} must be exactly one of free or owned"
            );
        }

        let mut seen = 0;
        for (parent, set) in &self.forward {
            assert!(!set.is_empty(), "empty child set left in forward index");
            if self.config.single_mode {
                assert!(set.len() <= 1, "single-owner parent holds {} children", set.len());
            }
            for id in set {
                assert!(self.reverse.get(id) == Some(parent), "reverse index mismatch for {id}");
                assert!(self.universe.contains(*id));
            }
            seen += set.len();
        }

        assert_eq!(seen, self.reverse.len());
        assert_eq!(self.free.len() + self.reverse.len(), self.universe.len());
    }
}
