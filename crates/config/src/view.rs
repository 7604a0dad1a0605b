//! Merged, read-only configuration view.
//!
//! Responsibilities:
//! - Hold the result of one `resolve()` call with per-key provenance.
//! - Provide lookups, iteration and prefix sections over that result.
//!
//! Does NOT handle:
//! - Merge order (see `composer.rs`).
//! - Type coercion; every value is a plain string.
//!
//! Invariants:
//! - A view owns all its data and never observes later registrations.
//! - Each key maps to exactly one `ResolvedEntry`.
//! - `Debug` never prints values that came from a sensitive source.

use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{KEY_DELIMITER, REDACTED};

/// A resolved value plus the source that supplied it.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub value: String,
    /// Name of the winning source.
    pub source: String,
    /// Priority of the winning source.
    pub priority: i32,
    pub sensitive: bool,
}

impl ResolvedEntry {
    /// The value, or a redaction marker when it came from a sensitive source.
    pub fn display_value(&self) -> &str {
        if self.sensitive {
            REDACTED
        } else {
            &self.value
        }
    }
}

impl fmt::Debug for ResolvedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedEntry")
            .field("value", &self.display_value())
            .field("source", &self.source)
            .field("priority", &self.priority)
            .field("sensitive", &self.sensitive)
            .finish()
    }
}

/// Flat merged configuration produced by `ConfigurationComposer::resolve`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CompositeView {
    resolved: BTreeMap<String, ResolvedEntry>,
}

impl CompositeView {
    pub(crate) fn from_resolved(resolved: BTreeMap<String, ResolvedEntry>) -> Self {
        Self { resolved }
    }

    /// Look up a value by exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.resolved.get(key).map(|entry| entry.value.as_str())
    }

    /// Look up the full resolved entry for a key.
    pub fn entry(&self, key: &str) -> Option<&ResolvedEntry> {
        self.resolved.get(key)
    }

    /// Name of the source whose value won for `key`.
    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.resolved.get(key).map(|entry| entry.source.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.resolved.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.resolved.keys().map(String::as_str)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedEntry)> {
        self.resolved.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The subtree below `prefix`, with `prefix.` stripped from every key.
    ///
    /// `section("db")` turns `db.host` into `host` and drops `dbx.host`.
    /// A key equal to the prefix itself has no child path and is not included.
    pub fn section(&self, prefix: &str) -> CompositeView {
        if prefix.is_empty() {
            return self.clone();
        }
        let lead = format!("{prefix}{KEY_DELIMITER}");
        let resolved = self
            .resolved
            .range(lead.clone()..)
            .take_while(|(key, _)| key.starts_with(&lead))
            .map(|(key, entry)| (key[lead.len()..].to_string(), entry.clone()))
            .collect();
        CompositeView { resolved }
    }

    /// Plain key/value map without provenance.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.resolved
            .iter()
            .map(|(k, v)| (k.clone(), v.value.clone()))
            .collect()
    }
}

impl fmt::Debug for CompositeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.resolved.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a CompositeView {
    type Item = (&'a String, &'a ResolvedEntry);
    type IntoIter = std::collections::btree_map::Iter<'a, String, ResolvedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.resolved.iter()
    }
}
