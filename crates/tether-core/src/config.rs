//! Association engine configuration.

use crate::error::Result;
use crate::pool::{ChildId, Universe};
use serde::{Deserialize, Serialize};

/// How the universe of child ids is declared.
///
/// Deserializes from either a number (`16`, meaning ids `0..16`) or a list
/// of ids (`[3, 7, 9]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UniverseConfig {
    /// Pool size; ids `0..n`.
    Size(u32),
    /// Explicit id list.
    Ids(Vec<u32>),
}

impl UniverseConfig {
    /// Build the universe this config describes.
    pub fn to_universe(&self) -> Universe {
        match self {
            UniverseConfig::Size(size) => Universe::range(*size),
            UniverseConfig::Ids(ids) => Universe::from_ids(ids.iter().copied().map(ChildId)),
        }
    }
}

impl Default for UniverseConfig {
    fn default() -> Self {
        UniverseConfig::Size(0)
    }
}

/// Configuration for an [`Associations`](crate::assoc::Associations) engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssociationConfig {
    /// Declared child id universe.
    pub universe: UniverseConfig,
    /// Always allocate the smallest free id.
    #[serde(default)]
    pub ordered: bool,
    /// At most one child per parent.
    #[serde(default)]
    pub single_mode: bool,
}

impl AssociationConfig {
    /// Config for ids `0..size` with both flags off.
    pub fn with_pool_size(size: u32) -> Self {
        Self {
            universe: UniverseConfig::Size(size),
            ..Default::default()
        }
    }

    /// Config for an explicit id list with both flags off.
    pub fn with_ids<I: IntoIterator<Item = u32>>(ids: I) -> Self {
        Self {
            universe: UniverseConfig::Ids(ids.into_iter().collect()),
            ..Default::default()
        }
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load from JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
