//! # Tether
//!
//! Exclusive parent/child id association over a bounded pool.
//!
//! Tether links parents (integers, tuples, any hashable key) to child ids
//! drawn from a fixed universe:
//! - **Allocation**: arbitrary O(1) or deterministic smallest-first
//! - **Stealing**: associating an owned child moves it to the new parent
//! - **Single-owner mode**: a parent holds at most one child at a time
//! - **Shared handle**: lock-guarded engine for multi-threaded callers
//!
//! ## Quick Start
//!
//! ```rust
//! use tether::prelude::*;
//!
//! let mut seats: Associations<(u32, u32)> = AssociationsBuilder::new()
//!     .pool_size(4)
//!     .ordered(true)
//!     .build();
//!
//! let seat = seats.allocate((1, 7))?;
//! assert_eq!(seat, ChildId(0));
//!
//! seats.associate((2, 3), seat)?;
//! assert!(seats.get_bs(&(1, 7)).is_empty());
//! assert_eq!(seats.get_a(seat), Some(&(2, 3)));
//! # Ok::<(), TetherError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Re-export core crate
pub use tether_core::*;

mod builder;
mod shared;

pub use builder::AssociationsBuilder;
pub use shared::SharedAssociations;

/// Commonly used types.
pub mod prelude {
    pub use crate::builder::AssociationsBuilder;
    pub use crate::shared::SharedAssociations;
    pub use crate::{
        assoc::{AssociationStats, Associations},
        config::{AssociationConfig, UniverseConfig},
        error::{Result, TetherError},
        pool::{ChildId, IntoChildIds, Universe},
    };

    // Re-export useful external types
    pub use tracing;
}
