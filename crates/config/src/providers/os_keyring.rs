//! OS keyring provider.
//!
//! Responsibilities:
//! - Look up a fixed list of `(key, account)` pairs in the system keyring.
//!
//! Does NOT handle:
//! - Keyring entry creation/management (only retrieval).
//!
//! Invariants:
//! - Accounts without a keyring entry are skipped, not errors.
//! - Any other keyring failure aborts the whole load.
//! - The produced source is always marked sensitive.

use super::SourceProvider;
use crate::constants::{APP_NAME, KEYRING_PRIORITY};
use crate::error::SourceError;
use crate::source::ConfigurationSource;

/// Reads selected secrets from the system keyring.
#[derive(Debug, Clone)]
pub struct KeyringProvider {
    name: String,
    priority: i32,
    service: String,
    mappings: Vec<(String, String)>,
}

impl Default for KeyringProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringProvider {
    /// Create a provider using the default `hostconf` keyring service.
    pub fn new() -> Self {
        Self {
            name: "keyring".to_string(),
            priority: KEYRING_PRIORITY,
            service: APP_NAME.to_string(),
            mappings: Vec::new(),
        }
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Expose the keyring `account` as configuration key `key`.
    pub fn with_account(mut self, key: impl Into<String>, account: impl Into<String>) -> Self {
        self.mappings.push((key.into(), account.into()));
        self
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

impl SourceProvider for KeyringProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn load(&self) -> Result<ConfigurationSource, SourceError> {
        let mut entries = Vec::with_capacity(self.mappings.len());
        for (key, account) in &self.mappings {
            let entry = keyring::Entry::new(&self.service, account)?;
            match entry.get_password() {
                Ok(secret) => entries.push((key.clone(), secret)),
                Err(keyring::Error::NoEntry) => {
                    tracing::debug!(key = %key, "No keyring entry for configured account");
                }
                Err(e) => return Err(SourceError::Keyring(e)),
            }
        }

        tracing::debug!(
            service = %self.service,
            entries = entries.len(),
            "Loaded keyring secrets"
        );
        Ok(ConfigurationSource::new(self.name.clone(), self.priority)
            .with_entries(entries)
            .with_sensitive(true))
    }
}
