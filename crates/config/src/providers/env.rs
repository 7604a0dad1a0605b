//! Environment variable provider.
//!
//! Responsibilities:
//! - Read process environment variables (or an injected set) into a source.
//! - Filter and strip an optional name prefix.
//! - Translate `__` in variable names into the `.` key delimiter.
//!
//! Does NOT handle:
//! - `.env` files (see `dotenv.rs`).
//!
//! Invariants:
//! - Variables whose name or value is not valid UTF-8 are skipped.
//! - Empty values are kept; an empty string is a defined value.
//! - Case is preserved unless `lowercase_keys` is enabled for this provider.

use std::ffi::OsString;

use super::SourceProvider;
use crate::constants::{ENV_HIERARCHY_SEPARATOR, ENVIRONMENT_PRIORITY, KEY_DELIMITER};
use crate::error::SourceError;
use crate::source::ConfigurationSource;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Translate an environment variable name into a dotted key path.
///
/// `DB__HOST` becomes `DB.HOST`; single underscores are left alone.
pub fn env_key_to_path(name: &str) -> String {
    name.replace(ENV_HIERARCHY_SEPARATOR, KEY_DELIMITER)
}

/// Reads environment variables into a configuration source.
#[derive(Debug, Clone)]
pub struct EnvironmentProvider {
    name: String,
    priority: i32,
    prefix: Option<String>,
    lowercase_keys: bool,
    vars: Option<Vec<(String, String)>>,
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProvider {
    /// Create a provider over the process environment.
    pub fn new() -> Self {
        Self {
            name: "environment".to_string(),
            priority: ENVIRONMENT_PRIORITY,
            prefix: None,
            lowercase_keys: false,
            vars: None,
        }
    }

    /// Create a provider over a fixed set of variables instead of the process
    /// environment.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            ..Self::new()
        }
    }

    /// Only keep variables starting with `prefix`, and strip it from keys.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    /// Lowercase every key produced by this provider.
    pub fn with_lowercase_keys(mut self, lowercase: bool) -> Self {
        self.lowercase_keys = lowercase;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Map one variable to a key, or `None` if the prefix filter rejects it.
    fn map_key(&self, name: &str) -> Option<String> {
        let stripped = match &self.prefix {
            Some(prefix) => name.strip_prefix(prefix.as_str())?,
            None => name,
        };
        if stripped.is_empty() {
            return None;
        }
        let key = env_key_to_path(stripped);
        Some(if self.lowercase_keys {
            key.to_lowercase()
        } else {
            key
        })
    }

    fn process_vars() -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(k, v): (OsString, OsString)| {
                Some((k.into_string().ok()?, v.into_string().ok()?))
            })
            .collect()
    }
}

impl SourceProvider for EnvironmentProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn load(&self) -> Result<ConfigurationSource, SourceError> {
        let vars = match &self.vars {
            Some(vars) => vars.clone(),
            None => Self::process_vars(),
        };
        let entries = vars
            .into_iter()
            .filter_map(|(name, value)| self.map_key(&name).map(|key| (key, value)));
        let source = ConfigurationSource::new(self.name.clone(), self.priority).with_entries(entries);

        tracing::debug!(
            source = %self.name,
            entries = source.len(),
            "Loaded environment variables"
        );
        Ok(source)
    }
}
