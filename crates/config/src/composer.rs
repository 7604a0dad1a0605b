//! Configuration composer.
//!
//! Responsibilities:
//! - Own the ordered list of registered configuration sources.
//! - Merge them into a `CompositeView` with deterministic override rules.
//! - Report diagnostics about the registered sources (duplicate names, counts).
//!
//! Does NOT handle:
//! - Acquiring sources from the environment, files or keyrings (see `providers`).
//! - Coercing values to other types.
//!
//! Invariants:
//! - Highest priority wins; on equal priority the most recently registered wins.
//! - `resolve()` merges a point-in-time copy of the list, so a concurrent
//!   `register()` is either fully visible or not visible at all.
//! - `resolve()` and `get()` never fail; an undefined key is `None`.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::source::ConfigurationSource;
use crate::view::{CompositeView, ResolvedEntry};

/// Summary of one registered source, for diagnostics output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    pub name: String,
    pub priority: i32,
    pub entries: usize,
    pub sensitive: bool,
}

/// Accumulates configuration sources and resolves them into one view.
#[derive(Debug, Default)]
pub struct ConfigurationComposer {
    sources: Mutex<Vec<Arc<ConfigurationSource>>>,
}

impl ConfigurationComposer {
    /// Create an empty composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the source list, recovering from poisoning.
    ///
    /// The list is append-only and each push is a single operation, so a
    /// poisoned guard still holds a consistent list.
    fn lock_sources(&self) -> MutexGuard<'_, Vec<Arc<ConfigurationSource>>> {
        self.sources
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append a source. Duplicate names are accepted and both participate.
    pub fn register(&self, source: ConfigurationSource) {
        let mut sources = self.lock_sources();
        if sources.iter().any(|s| s.name() == source.name()) {
            tracing::warn!(
                source = source.name(),
                "Configuration source registered more than once; both will be merged"
            );
        }
        tracing::debug!(
            source = source.name(),
            priority = source.priority(),
            entries = source.len(),
            "Registered configuration source"
        );
        sources.push(Arc::new(source));
    }

    /// Point-in-time copy of the registered sources, in registration order.
    fn snapshot(&self) -> Vec<Arc<ConfigurationSource>> {
        self.lock_sources().clone()
    }

    /// Merge all registered sources into an immutable view.
    pub fn resolve(&self) -> CompositeView {
        let mut ordered = self.snapshot();
        // Stable sort keeps registration order within equal priority.
        ordered.sort_by_key(|source| source.priority());

        let mut resolved = BTreeMap::new();
        for source in &ordered {
            for (key, value) in source.entries() {
                resolved.insert(
                    key.clone(),
                    ResolvedEntry {
                        value: value.clone(),
                        source: source.name().to_string(),
                        priority: source.priority(),
                        sensitive: source.is_sensitive(),
                    },
                );
            }
        }
        CompositeView::from_resolved(resolved)
    }

    /// Resolve and look up a single key.
    pub fn get(&self, key: &str) -> Option<String> {
        self.resolve().get(key).map(str::to_string)
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.lock_sources().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_sources().is_empty()
    }

    /// Source names in registration order.
    pub fn source_names(&self) -> Vec<String> {
        self.lock_sources()
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }

    /// Names registered more than once, in ascending order.
    pub fn duplicate_source_names(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for source in self.lock_sources().iter() {
            if !seen.insert(source.name()) {
                duplicates.insert(source.name().to_string());
            }
        }
        duplicates.into_iter().collect()
    }

    /// One summary per registered source, in registration order.
    pub fn describe_sources(&self) -> Vec<SourceSummary> {
        self.lock_sources()
            .iter()
            .map(|s| SourceSummary {
                name: s.name().to_string(),
                priority: s.priority(),
                entries: s.len(),
                sensitive: s.is_sensitive(),
            })
            .collect()
    }
}
