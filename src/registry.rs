//! Topic registry for discovering and running demonstrations.
//!
//! Each topic (a status catalog, an arithmetic dispatcher, an error taxonomy)
//! registers a [`TopicRunner`] so the CLI can list, demonstrate, verify and
//! benchmark it without knowing its concrete types.

use crate::error::VerifyResult;
pub use crate::utils::bench::{BenchmarkClosure, BenchmarkResult};

/// Trait that every topic must implement
pub trait TopicRunner: Send + Sync {
    /// Name of the topic (e.g., "operation")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "enums", "exceptions")
    fn category(&self) -> &'static str;

    /// Names of the interchangeable strategies implementing this topic
    fn available_variants(&self) -> Vec<&'static str>;

    /// Lines printed by `variants demo`
    fn demonstrate(&self) -> Vec<String>;

    /// Check every strategy against the reference and the documented invariants
    fn verify(&self) -> VerifyResult;

    /// Closures for each strategy over `size` seeded inputs.
    /// Topics without alternative strategies return an empty list.
    fn benchmark_closures(&self, size: usize, seed: u64) -> Vec<BenchmarkClosure<'static>>;
}

/// Registry of all topics
pub struct TopicRegistry {
    topics: Vec<Box<dyn TopicRunner>>,
}

impl TopicRegistry {
    pub fn new() -> Self {
        Self { topics: Vec::new() }
    }

    pub fn register<T: TopicRunner + 'static>(&mut self, topic: T) {
        self.topics.push(Box::new(topic));
    }

    /// All registered topics, in registration order
    pub fn all(&self) -> &[Box<dyn TopicRunner>] {
        &self.topics
    }

    pub fn find(&self, name: &str) -> Option<&dyn TopicRunner> {
        self.topics
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.topics.iter().map(|t| t.name()).collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&dyn TopicRunner> {
        self.topics
            .iter()
            .filter(|t| t.category() == category)
            .map(|t| t.as_ref())
            .collect()
    }

    /// Resolve an optional name filter to the matching topics.
    /// `None` selects every topic; an unknown name selects nothing.
    pub fn select(&self, name: Option<&str>) -> Vec<&dyn TopicRunner> {
        match name {
            Some(name) => self.find(name).into_iter().collect(),
            None => self.topics.iter().map(|t| t.as_ref()).collect(),
        }
    }
}

impl Default for TopicRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all topics
pub fn build_registry() -> TopicRegistry {
    let mut registry = TopicRegistry::new();

    registry.register(crate::enums::status::StatusRunner);
    registry.register(crate::enums::operation::OperationRunner);
    registry.register(crate::exceptions::taxonomy::TaxonomyRunner);

    tracing::debug!(topics = ?registry.list_names(), "registry built");
    registry
}
