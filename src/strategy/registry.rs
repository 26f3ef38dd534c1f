//! Strategy registry mapping identifiers to bot factories.
//!
//! Strategies are registered up front, then each configured name is resolved
//! exactly once when a simulation is built. Resolution never loads code at
//! runtime; an unknown name is a startup error.

use ahash::AHashMap;
use std::sync::Arc;

use super::bots;
use super::{Bot, BotSeed};
use crate::core::error::{ArenaError, Result};

/// Shared constructor for a strategy's bot
pub type BotFactory = Arc<dyn Fn(&BotSeed) -> Box<dyn Bot> + Send + Sync>;

/// A strategy name paired with the factory it resolved to
#[derive(Clone)]
pub struct ResolvedStrategy {
    name: String,
    factory: BotFactory,
}

impl ResolvedStrategy {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a fresh bot instance
    pub fn instantiate(&self, seed: &BotSeed) -> Box<dyn Bot> {
        (self.factory)(seed)
    }
}

impl std::fmt::Debug for ResolvedStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedStrategy")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Registry for strategy implementations
#[derive(Default)]
pub struct StrategyRegistry {
    factories: AHashMap<String, BotFactory>,
}

impl StrategyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in strategies
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        bots::register_builtins(&mut registry);
        registry
    }

    /// Register a factory under `name`, returning any factory it replaced
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Option<BotFactory>
    where
        F: Fn(&BotSeed) -> Box<dyn Bot> + Send + Sync + 'static,
    {
        let name = name.into();
        let replaced = self.factories.insert(name.clone(), Arc::new(factory));
        if replaced.is_some() {
            tracing::warn!("Strategy '{}' registered twice, keeping the latest", name);
        }
        replaced
    }

    /// Look up the factory registered under `name`
    pub fn resolve(&self, name: &str) -> Result<ResolvedStrategy> {
        let factory = self
            .factories
            .get(name)
            .cloned()
            .ok_or_else(|| ArenaError::UnknownStrategy(name.to_string()))?;
        tracing::debug!("Resolved strategy '{}'", name);
        Ok(ResolvedStrategy {
            name: name.to_string(),
            factory,
        })
    }

    /// Resolve every name, failing on the first unknown one
    pub fn resolve_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<ResolvedStrategy>> {
        names.iter().map(|name| self.resolve(name.as_ref())).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered identifiers in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
