//! Fluent construction of association engines.

use crate::shared::SharedAssociations;
use std::hash::Hash;
use tether_core::{
    assoc::Associations,
    config::{AssociationConfig, UniverseConfig},
};

/// Builder for creating an [`Associations`] engine.
#[derive(Debug, Clone, Default)]
pub struct AssociationsBuilder {
    config: AssociationConfig,
}

impl AssociationsBuilder {
    /// Create a new builder with an empty universe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: AssociationConfig) -> Self {
        Self { config }
    }

    /// Use ids `0..size`.
    pub fn pool_size(mut self, size: u32) -> Self {
        self.config.universe = UniverseConfig::Size(size);
        self
    }

    /// Use an explicit id list.
    pub fn ids<I: IntoIterator<Item = u32>>(mut self, ids: I) -> Self {
        self.config.universe = UniverseConfig::Ids(ids.into_iter().collect());
        self
    }

    /// Allocate the smallest free id first.
    pub fn ordered(mut self, ordered: bool) -> Self {
        self.config.ordered = ordered;
        self
    }

    /// Allow at most one child per parent.
    pub fn single_mode(mut self, single_mode: bool) -> Self {
        self.config.single_mode = single_mode;
        self
    }

    /// Get the configuration built so far.
    pub fn config(&self) -> &AssociationConfig {
        &self.config
    }

    /// Build a single-threaded engine.
    pub fn build<A: Eq + Hash + Clone>(self) -> Associations<A> {
        Associations::new(self.config)
    }

    /// Build an engine behind a shared lock.
    pub fn build_shared<A: Eq + Hash + Clone>(self) -> SharedAssociations<A> {
        SharedAssociations::new(self.build())
    }
}
