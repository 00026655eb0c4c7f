//! Parent/child association engine.
//!
//! This module links parents (any hashable key, typically an integer or a
//! tuple of integers) to child ids drawn from a [`FreePool`](crate::pool::FreePool).
//!
//! # Architecture
//!
//! The engine keeps three structures in lockstep:
//!
//! 1. **Forward index** - parent to its set of children
//! 2. **Reverse index** - child to its single owner
//! 3. **Free pool** - children with no owner
//!
//! Associating a child that already belongs to another parent moves it
//! over ("stealing"). Parents exist only while they own a child.
//!
//! # Example
//!
//! ```rust
//! use tether_core::assoc::Associations;
//! use tether_core::pool::ChildId;
//!
//! let mut assoc: Associations<u64> = Associations::with_ids([10, 20, 30]);
//!
//! assoc.associate(1, [10u32, 20]).unwrap();
//! assoc.associate(2, 10u32).unwrap();
//!
//! assert_eq!(assoc.get_a(10u32), Some(&2));
//! assert!(assoc.get_bs(&1).contains(&ChildId(20)));
//! assert_eq!(assoc.count_free(), 1);
//!
//! assoc.remove_a(&1);
//! assert_eq!(assoc.count_free(), 2);
//! ```

mod engine;

pub use engine::Associations;

use serde::Serialize;

/// Allocation statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationStats {
    /// Free child ids.
    pub free: usize,
    /// Owned child ids.
    pub used: usize,
    /// Parents owning at least one child.
    pub active_parents: usize,
    /// Universe size.
    pub capacity: usize,
    /// `used / capacity`, zero for an empty universe.
    pub utilization: f64,
}
