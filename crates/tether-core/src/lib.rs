//! # Tether Core
//!
//! Core engine for exclusive parent/child id association over a bounded pool.
//!
//! This crate provides:
//! - **Free pool** with arbitrary O(1) or smallest-first allocation
//! - **Association engine** with forward and reverse indices kept in lockstep
//! - **Stealing**: re-associating a child moves it to its new parent
//! - **Single-owner mode**: at most one child per parent

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assoc;
pub mod config;
pub mod error;
pub mod pool;

pub use error::{Result, TetherError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::assoc::{AssociationStats, Associations};
    pub use crate::config::{AssociationConfig, UniverseConfig};
    pub use crate::error::{Result, TetherError};
    pub use crate::pool::{ChildId, FreePool, IntoChildIds, Universe};
}
