//! JSON settings file provider.
//!
//! Responsibilities:
//! - Read a JSON document and flatten it into dotted key paths.
//! - Share that file reading with the user secrets provider.
//!
//! Does NOT handle:
//! - Writing settings files.
//!
//! Invariants:
//! - The top-level JSON value must be an object.
//! - Arrays flatten to index segments (`servers.0`), scalars to their text,
//!   `null` to the empty string. Empty objects and arrays produce no keys.
//! - A missing file is an empty source when optional, an error when required.

use serde_json::Value;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::SourceProvider;
use crate::constants::{JSON_FILE_PRIORITY, KEY_DELIMITER};
use crate::error::SourceError;
use crate::source::ConfigurationSource;

/// Flatten a JSON object into dotted key paths.
///
/// Returns `None` if `value` is not an object.
pub fn flatten_json(value: &Value) -> Option<BTreeMap<String, String>> {
    let object = value.as_object()?;
    let mut entries = BTreeMap::new();
    for (key, child) in object {
        flatten_into(key.clone(), child, &mut entries);
    }
    Some(entries)
}

fn flatten_into(path: String, value: &Value, entries: &mut BTreeMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(format!("{path}{KEY_DELIMITER}{key}"), child, entries);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(format!("{path}{KEY_DELIMITER}{index}"), child, entries);
            }
        }
        Value::String(s) => {
            entries.insert(path, s.clone());
        }
        Value::Null => {
            entries.insert(path, String::new());
        }
        Value::Bool(_) | Value::Number(_) => {
            entries.insert(path, value.to_string());
        }
    }
}

/// Read and flatten a JSON file.
///
/// Returns `Ok(None)` if the file does not exist.
pub(crate) fn read_json_entries(path: &Path) -> Result<Option<BTreeMap<String, String>>, SourceError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(SourceError::Io {
                path: path.to_path_buf(),
                kind: e.kind(),
            });
        }
    };

    // An empty file is treated like an empty object.
    if content.trim().is_empty() {
        return Ok(Some(BTreeMap::new()));
    }

    let value: Value = serde_json::from_str(&content).map_err(|e| SourceError::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    flatten_json(&value)
        .map(Some)
        .ok_or_else(|| SourceError::InvalidJsonRoot {
            path: path.to_path_buf(),
        })
}

/// Reads a JSON settings file into a configuration source.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    name: String,
    priority: i32,
    path: PathBuf,
    optional: bool,
    sensitive: bool,
}

impl JsonFileProvider {
    /// Create a provider for `path`. The file is optional by default.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: format!("json:{}", path.display()),
            priority: JSON_FILE_PRIORITY,
            path,
            optional: true,
            sensitive: false,
        }
    }

    /// Require the file to exist.
    pub fn required(mut self) -> Self {
        self.optional = false;
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

    pub fn with_sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SourceProvider for JsonFileProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn load(&self) -> Result<ConfigurationSource, SourceError> {
        let entries = match read_json_entries(&self.path)? {
            Some(entries) => entries,
            None if self.optional => {
                tracing::debug!(path = %self.path.display(), "Optional JSON file not found");
                BTreeMap::new()
            }
            None => {
                return Err(SourceError::NotFound {
                    path: self.path.clone(),
                });
            }
        };

        tracing::debug!(
            source = %self.name,
            entries = entries.len(),
            "Loaded JSON configuration file"
        );
        Ok(ConfigurationSource::new(self.name.clone(), self.priority)
            .with_entries(entries)
            .with_sensitive(self.sensitive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_flatten_nested_objects_and_arrays() {
        let value = json!({
            "db": { "host": "localhost", "port": 5432 },
            "servers": ["a", "b"],
            "debug": true,
            "comment": null,
            "empty": {}
        });
        let entries = flatten_json(&value).unwrap();
        assert_eq!(entries.get("db.host").map(String::as_str), Some("localhost"));
        assert_eq!(entries.get("db.port").map(String::as_str), Some("5432"));
        assert_eq!(entries.get("servers.0").map(String::as_str), Some("a"));
        assert_eq!(entries.get("servers.1").map(String::as_str), Some("b"));
        assert_eq!(entries.get("debug").map(String::as_str), Some("true"));
        assert_eq!(entries.get("comment").map(String::as_str), Some(""));
        assert!(!entries.contains_key("empty"));
        assert_eq!(entries.len(), 6);
    }

    #[test]
    fn test_flatten_keeps_literal_dotted_keys() {
        let entries = flatten_json(&json!({ "db.host": "x" })).unwrap();
        assert_eq!(entries.get("db.host").map(String::as_str), Some("x"));
    }

    #[test]
    fn test_flatten_rejects_non_object_root() {
        assert!(flatten_json(&json!(["a"])).is_none());
        assert!(flatten_json(&json!("a")).is_none());
    }

    #[test]
    fn test_missing_optional_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let source = JsonFileProvider::new(temp_dir.path().join("missing.json"))
            .load()
            .unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn test_missing_required_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = JsonFileProvider::new(temp_dir.path().join("missing.json"))
            .required()
            .load()
            .unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "password": "hunter2", "#).unwrap();

        let err = JsonFileProvider::new(&path).load().unwrap_err();
        assert!(matches!(err, SourceError::JsonParse { .. }));
        assert!(
            !err.to_string().contains("hunter2"),
            "parse errors must not echo file contents"
        );
    }

    #[test]
    fn test_array_root_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let err = JsonFileProvider::new(&path).load().unwrap_err();
        assert!(matches!(err, SourceError::InvalidJsonRoot { .. }));
    }

    #[test]
    fn test_empty_file_is_empty_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "  \n").unwrap();

        let source = JsonFileProvider::new(&path).required().load().unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn test_loads_file_with_custom_name_and_priority() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "logging": { "level": "info" } }"#).unwrap();

        let source = JsonFileProvider::new(&path)
            .with_name("appsettings")
            .with_priority(-5)
            .load()
            .unwrap();
        assert_eq!(source.name(), "appsettings");
        assert_eq!(source.priority(), -5);
        assert_eq!(source.get("logging.level"), Some("info"));
    }
}
