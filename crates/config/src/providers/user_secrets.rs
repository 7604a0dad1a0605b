//! Per-developer user secrets provider.
//!
//! Responsibilities:
//! - Locate the secrets file for a user secrets id.
//! - Read it as JSON and flatten it into a sensitive source.
//!
//! Does NOT handle:
//! - Creating, editing or encrypting secrets; the store is read-only here.
//!
//! Invariants:
//! - Location precedence: explicit path > `HOSTCONF_USER_SECRETS_PATH` > platform default.
//! - A missing secrets file is an empty source unless the provider is required.
//! - The produced source is always marked sensitive.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::SourceProvider;
use super::env::env_var_or_none;
use super::json::read_json_entries;
use crate::constants::{USER_SECRETS_PATH_VAR, USER_SECRETS_PRIORITY};
use crate::error::SourceError;
use crate::path::{default_user_secrets_path, validate_user_secrets_id};
use crate::source::ConfigurationSource;

/// Reads the user secrets store for one application id.
#[derive(Debug, Clone)]
pub struct UserSecretsProvider {
    user_secrets_id: String,
    priority: i32,
    path: Option<PathBuf>,
    optional: bool,
}

impl UserSecretsProvider {
    pub fn new(user_secrets_id: impl Into<String>) -> Self {
        Self {
            user_secrets_id: user_secrets_id.into(),
            priority: USER_SECRETS_PRIORITY,
            path: None,
            optional: true,
        }
    }

    /// Read secrets from `path` instead of the default location.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Require the secrets file to exist.
    pub fn required(mut self) -> Self {
        self.optional = false;
        self
    }

    pub fn user_secrets_id(&self) -> &str {
        &self.user_secrets_id
    }

    /// Resolve the secrets file location.
    pub fn secrets_path(&self) -> Result<PathBuf, SourceError> {
        validate_user_secrets_id(&self.user_secrets_id)?;
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        if let Some(path) = env_var_or_none(USER_SECRETS_PATH_VAR) {
            return Ok(PathBuf::from(path));
        }
        default_user_secrets_path(&self.user_secrets_id)
    }
}

impl SourceProvider for UserSecretsProvider {
    fn name(&self) -> &str {
        "user-secrets"
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn load(&self) -> Result<ConfigurationSource, SourceError> {
        let path = self.secrets_path()?;
        let entries = match read_json_entries(&path)? {
            Some(entries) => entries,
            None if self.optional => {
                tracing::debug!(
                    user_secrets_id = %self.user_secrets_id,
                    "No user secrets file found"
                );
                BTreeMap::new()
            }
            None => return Err(SourceError::NotFound { path }),
        };

        tracing::debug!(
            user_secrets_id = %self.user_secrets_id,
            entries = entries.len(),
            "Loaded user secrets"
        );
        Ok(ConfigurationSource::new(self.name(), self.priority)
            .with_entries(entries)
            .with_sensitive(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn write_secrets(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("secrets.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_loads_and_flattens_secrets() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_secrets(&temp_dir, r#"{ "db": { "pass": "x" }, "api.key": "k" }"#);

        let source = UserSecretsProvider::new("app-1").with_path(&path).load().unwrap();
        assert_eq!(source.name(), "user-secrets");
        assert!(source.is_sensitive());
        assert_eq!(source.get("db.pass"), Some("x"));
        assert_eq!(source.get("api.key"), Some("k"));
    }

    #[test]
    fn test_missing_file_is_empty_when_optional() {
        let temp_dir = TempDir::new().unwrap();
        let source = UserSecretsProvider::new("app-1")
            .with_path(temp_dir.path().join("nope.json"))
            .load()
            .unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn test_missing_file_is_error_when_required() {
        let temp_dir = TempDir::new().unwrap();
        let err = UserSecretsProvider::new("app-1")
            .with_path(temp_dir.path().join("nope.json"))
            .required()
            .load()
            .unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[test]
    fn test_invalid_id_is_rejected_even_with_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let err = UserSecretsProvider::new("../other")
            .with_path(temp_dir.path().join("secrets.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, SourceError::InvalidUserSecretsId(_)));
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_default_location() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_secrets(&temp_dir, r#"{ "token": "from-env-path" }"#);

        temp_env::with_vars(
            [(USER_SECRETS_PATH_VAR, Some(path.as_os_str()))],
            || {
                let provider = UserSecretsProvider::new("app-1");
                assert_eq!(provider.secrets_path().unwrap(), path);
                assert_eq!(provider.load().unwrap().get("token"), Some("from-env-path"));
            },
        );
    }

    #[test]
    #[serial]
    fn test_explicit_path_beats_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let explicit = write_secrets(&temp_dir, "{}");

        temp_env::with_vars([(USER_SECRETS_PATH_VAR, Some("/somewhere/else.json"))], || {
            let provider = UserSecretsProvider::new("app-1").with_path(&explicit);
            assert_eq!(provider.secrets_path().unwrap(), explicit);
        });
    }
}
