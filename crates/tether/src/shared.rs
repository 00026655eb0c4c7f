//! Thread-safe handle around an association engine.

use parking_lot::Mutex;
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;
use tether_core::{
    assoc::{AssociationStats, Associations},
    config::AssociationConfig,
    error::Result,
    pool::{ChildId, IntoChildIds},
};

/// Cloneable, lock-guarded association engine.
///
/// Each call holds the lock for the whole operation, so a detach/attach
/// sequence is never visible half-done to another thread. Clones share the
/// same engine.
#[derive(Debug)]
pub struct SharedAssociations<A> {
    inner: Arc<Mutex<Associations<A>>>,
}

impl<A> Clone for SharedAssociations<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Eq + Hash + Clone> SharedAssociations<A> {
    /// Wrap an engine.
    pub fn new(assoc: Associations<A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(assoc)),
        }
    }

    /// Create from a configuration.
    pub fn from_config(config: AssociationConfig) -> Self {
        Self::new(Associations::new(config))
    }

    /// Link one or more child ids to `parent`.
    pub fn associate(&self, parent: A, children: impl IntoChildIds) -> Result<()> {
        self.inner.lock().associate(parent, children)
    }

    /// Draw a free child id for `parent`.
    pub fn allocate(&self, parent: A) -> Result<ChildId> {
        self.inner.lock().allocate(parent)
    }

    /// Snapshot of the children owned by `parent`.
    pub fn get_bs(&self, parent: &A) -> HashSet<ChildId> {
        self.inner.lock().get_bs(parent)
    }

    /// Owner of `child`, cloned out of the lock.
    pub fn get_a(&self, child: impl Into<ChildId>) -> Option<A> {
        self.inner.lock().get_a(child).cloned()
    }

    /// Every active parent.
    pub fn get_all_active_a(&self) -> HashSet<A> {
        self.inner.lock().get_all_active_a()
    }

    /// Release every child of `parent`.
    pub fn remove_a(&self, parent: &A) -> usize {
        self.inner.lock().remove_a(parent)
    }

    /// Release a single child.
    pub fn remove_b(&self, child: impl Into<ChildId>) -> Result<()> {
        self.inner.lock().remove_b(child)
    }

    /// Number of free child ids.
    pub fn count_free(&self) -> usize {
        self.inner.lock().count_free()
    }

    /// Number of owned child ids.
    pub fn count_used(&self) -> usize {
        self.inner.lock().count_used()
    }

    /// Size of the universe.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Number of active parents.
    pub fn num_active(&self) -> usize {
        self.inner.lock().num_active()
    }

    /// Check if `child` is in the pool.
    pub fn is_free(&self, child: impl Into<ChildId>) -> bool {
        self.inner.lock().is_free(child)
    }

    /// Check if `parent` owns at least one child.
    pub fn contains_a(&self, parent: &A) -> bool {
        self.inner.lock().contains_a(parent)
    }

    /// Copy of the engine configuration.
    pub fn config(&self) -> AssociationConfig {
        self.inner.lock().config().clone()
    }

    /// Get allocation statistics.
    pub fn stats(&self) -> AssociationStats {
        self.inner.lock().stats()
    }

    /// Release everything.
    pub fn clear(&self) {
        self.inner.lock().clear()
    }

    /// Run several operations under one lock acquisition.
    pub fn with<R>(&self, f: impl FnOnce(&mut Associations<A>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
