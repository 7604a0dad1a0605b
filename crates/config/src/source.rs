//! Configuration source type.
//!
//! Responsibilities:
//! - Hold one named, prioritized snapshot of key/value entries.
//!
//! Does NOT handle:
//! - Acquiring entries from the outside world (see `providers`).
//! - Merging sources (see `composer.rs`).
//!
//! Invariants:
//! - A source is immutable once built; the composer only ever reads it.
//! - Keys are stored exactly as given; no case folding or trimming.

use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{DEFAULT_PRIORITY, REDACTED};

/// A named provider snapshot of key/value string pairs.
#[derive(Clone, PartialEq, Eq)]
pub struct ConfigurationSource {
    name: String,
    priority: i32,
    entries: BTreeMap<String, String>,
    sensitive: bool,
}

impl ConfigurationSource {
    /// Create an empty source with the given name and priority.
    pub fn new(name: impl Into<String>, priority: i32) -> Self {
        Self {
            name: name.into(),
            priority,
            entries: BTreeMap::new(),
            sensitive: false,
        }
    }

    /// Create a source at [`DEFAULT_PRIORITY`] from any iterator of pairs.
    ///
    /// Later pairs with a repeated key replace earlier ones.
    pub fn from_entries<I, K, V>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(name, DEFAULT_PRIORITY).with_entries(entries)
    }

    /// Set the priority. Higher priorities override lower ones.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Add a single entry, replacing any previous value for the key.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Add every pair from an iterator.
    pub fn with_entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.entries
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Mark the values of this source as secret.
    pub fn with_sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ConfigurationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("ConfigurationSource");
        debug
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("sensitive", &self.sensitive);
        if self.sensitive {
            let keys: BTreeMap<&str, &str> =
                self.entries.keys().map(|k| (k.as_str(), REDACTED)).collect();
            debug.field("entries", &keys);
        } else {
            debug.field("entries", &self.entries);
        }
        debug.finish()
    }
}
