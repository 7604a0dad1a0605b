//! `.env` file provider.
//!
//! Responsibilities:
//! - Read `KEY=value` pairs from a `.env` file without touching the process environment.
//! - Apply the same `__` to `.` key mapping as environment variables.
//! - Enforce the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Exporting values into the process environment.
//!
//! Invariants:
//! - A missing `.env` file yields an empty source.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::SourceProvider;
use super::env::env_key_to_path;
use crate::constants::{DOTENV_DISABLED_VAR, DOTENV_PRIORITY};
use crate::error::SourceError;
use crate::source::ConfigurationSource;

/// Reads a `.env` file into a configuration source.
#[derive(Debug, Clone)]
pub struct DotenvProvider {
    name: String,
    priority: i32,
    path: PathBuf,
}

impl Default for DotenvProvider {
    fn default() -> Self {
        Self::new(".env")
    }
}

impl DotenvProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            name: "dotenv".to_string(),
            priority: DOTENV_PRIORITY,
            path: path.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    fn map_error(err: dotenvy::Error) -> SourceError {
        match err {
            dotenvy::Error::LineParse(_, idx) => SourceError::DotenvParse { error_index: idx },
            dotenvy::Error::Io(io_err) => SourceError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => SourceError::DotenvUnknown,
        }
    }
}

impl SourceProvider for DotenvProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn load(&self) -> Result<ConfigurationSource, SourceError> {
        let source = ConfigurationSource::new(self.name.clone(), self.priority);
        if Self::dotenv_disabled() {
            tracing::debug!("Skipping .env file because {DOTENV_DISABLED_VAR} is set");
            return Ok(source);
        }

        let iter = match dotenvy::from_path_iter(&self.path) {
            Ok(iter) => iter,
            Err(dotenvy::Error::Io(io_err)) if io_err.kind() == ErrorKind::NotFound => {
                return Ok(source);
            }
            Err(e) => return Err(Self::map_error(e)),
        };

        let mut entries = Vec::new();
        for item in iter {
            let (name, value) = item.map_err(Self::map_error)?;
            entries.push((env_key_to_path(&name), value));
        }

        tracing::debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "Loaded .env file"
        );
        Ok(source.with_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn write_env(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(".env");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    #[serial]
    fn test_reads_pairs_without_exporting() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_env(
            &temp_dir,
            "_HOSTCONF_DOTENV_DB__HOST=localhost\n# comment\nGREETING=\"hello world\"\n",
        );

        temp_env::with_vars([(DOTENV_DISABLED_VAR, None::<&str>)], || {
            let source = DotenvProvider::new(&path).load().unwrap();
            assert_eq!(source.get("_HOSTCONF_DOTENV_DB.HOST"), Some("localhost"));
            assert_eq!(source.get("GREETING"), Some("hello world"));
            assert_eq!(source.priority(), DOTENV_PRIORITY);
            assert!(std::env::var("_HOSTCONF_DOTENV_DB__HOST").is_err());
        });
    }

    #[test]
    #[serial]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        temp_env::with_vars([(DOTENV_DISABLED_VAR, None::<&str>)], || {
            let source = DotenvProvider::new(temp_dir.path().join(".env"))
                .load()
                .unwrap();
            assert!(source.is_empty());
        });
    }

    #[test]
    #[serial]
    fn test_disabled_gate_skips_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_env(&temp_dir, "KEY=value\n");

        for flag in ["1", "true"] {
            temp_env::with_vars([(DOTENV_DISABLED_VAR, Some(flag))], || {
                let source = DotenvProvider::new(&path).load().unwrap();
                assert!(source.is_empty(), "DOTENV_DISABLED={flag} should skip loading");
            });
        }
    }

    #[test]
    #[serial]
    fn test_parse_error_does_not_leak_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_env(&temp_dir, "GOOD=1\nINVALID_LINE_hunter2_WITHOUT_EQUALS\n");

        temp_env::with_vars([(DOTENV_DISABLED_VAR, None::<&str>)], || {
            let err = DotenvProvider::new(&path).load().unwrap_err();
            assert!(matches!(err, SourceError::DotenvParse { .. }));
            assert!(
                !err.to_string().contains("hunter2"),
                "dotenv errors must not echo line contents"
            );
        });
    }
}
