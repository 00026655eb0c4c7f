//! Child identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a child drawn from the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildId(pub u32);

impl From<u32> for ChildId {
    fn from(id: u32) -> Self {
        ChildId(id)
    }
}

impl From<ChildId> for u32 {
    fn from(id: ChildId) -> Self {
        id.0
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Argument shape accepted by `associate`: one id or a sequence of ids.
///
/// Implemented for single ids (`ChildId`, `u32`) and for slices, arrays and
/// vectors of either, so callers can write `associate(p, 3)` as well as
/// `associate(p, [3, 4])`.
pub trait IntoChildIds {
    /// Collect the ids in request order.
    fn into_child_ids(self) -> Vec<ChildId>;
}

impl IntoChildIds for ChildId {
    fn into_child_ids(self) -> Vec<ChildId> {
        vec![self]
    }
}

impl IntoChildIds for u32 {
    fn into_child_ids(self) -> Vec<ChildId> {
        vec![ChildId(self)]
    }
}

impl<T: Copy + Into<ChildId>> IntoChildIds for &[T] {
    fn into_child_ids(self) -> Vec<ChildId> {
        self.iter().map(|&id| id.into()).collect()
    }
}

impl<T: Copy + Into<ChildId>, const N: usize> IntoChildIds for [T; N] {
    fn into_child_ids(self) -> Vec<ChildId> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Copy + Into<ChildId>, const N: usize> IntoChildIds for &[T; N] {
    fn into_child_ids(self) -> Vec<ChildId> {
        self.iter().map(|&id| id.into()).collect()
    }
}

impl<T: Into<ChildId>> IntoChildIds for Vec<T> {
    fn into_child_ids(self) -> Vec<ChildId> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Copy + Into<ChildId>> IntoChildIds for &Vec<T> {
    fn into_child_ids(self) -> Vec<ChildId> {
        self.iter().map(|&id| id.into()).collect()
    }
}
