//! The fixed set of child ids a pool is allowed to hand out.

use super::ChildId;
use std::collections::HashSet;

/// Universe of child ids, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Universe {
    /// Ids `0..n`.
    Range(u32),
    /// An explicit collection of ids.
    Explicit(HashSet<ChildId>),
}

impl Universe {
    /// Universe made of ids `0..size`.
    pub fn range(size: u32) -> Self {
        Universe::Range(size)
    }

    /// Universe made of the given ids. Duplicates collapse.
    pub fn from_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ChildId>,
    {
        Universe::Explicit(ids.into_iter().map(Into::into).collect())
    }

    /// Check whether an id belongs to this universe.
    pub fn contains(&self, id: ChildId) -> bool {
        match self {
            Universe::Range(size) => id.0 < *size,
            Universe::Explicit(ids) => ids.contains(&id),
        }
    }

    /// Number of ids in the universe.
    pub fn len(&self) -> usize {
        match self {
            Universe::Range(size) => *size as usize,
            Universe::Explicit(ids) => ids.len(),
        }
    }

    /// True if the universe holds no ids at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> Vec<ChildId> {
        match self {
            Universe::Range(size) => (0..*size).map(ChildId).collect(),
            Universe::Explicit(ids) => {
                let mut sorted: Vec<ChildId> = ids.iter().copied().collect();
                sorted.sort_unstable();
                sorted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_contains_only_below_size() {
        let universe = Universe::range(4);
        assert!(universe.contains(ChildId(0)));
        assert!(universe.contains(ChildId(3)));
        assert!(!universe.contains(ChildId(4)));
        assert_eq!(universe.len(), 4);
    }

    #[test]
    fn explicit_universe_dedupes() {
        let universe = Universe::from_ids([10u32, 20, 10, 5]);
        assert_eq!(universe.len(), 3);
        assert!(universe.contains(ChildId(20)));
        assert!(!universe.contains(ChildId(0)));
        assert_eq!(universe.ids(), vec![ChildId(5), ChildId(10), ChildId(20)]);
    }

    #[test]
    fn empty_universe() {
        assert!(Universe::range(0).is_empty());
        assert!(Universe::from_ids(Vec::<u32>::new()).is_empty());
    }
}
