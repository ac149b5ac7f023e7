//! Raw attribute sets.
//!
//! Responsibilities:
//! - Hold the raw key/value pairs an attribute bag is built from.
//! - Load attribute sets from JSON text or JSON files.
//!
//! Does NOT handle:
//! - Typed parsing or defaults (see `bag` and `value`).
//!
//! Invariants:
//! - Values are stored as raw, untrimmed text; JSON scalars are stringified.
//! - Later insertions of the same key replace earlier ones.

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use super::error::ConfigError;

/// A flat key/value mapping of attribute names to raw values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    values: BTreeMap<String, String>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse an attribute set from a JSON object.
    ///
    /// ```
    /// use chameleon_config::AttributeSet;
    ///
    /// let attrs = AttributeSet::from_json_str(r#"{"emptyText": "nothing", "useEmptyButton": true}"#)
    ///     .unwrap();
    /// assert_eq!(attrs.get("emptyText"), Some("nothing"));
    /// assert_eq!(attrs.get("useEmptyButton"), Some("true"));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Convert a JSON object into an attribute set.
    pub fn from_json_value(value: Value) -> Result<Self, ConfigError> {
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(ConfigError::NotAnObject {
                    found: json_kind(&other),
                });
            }
        };

        let mut set = Self::new();
        for (key, value) in object {
            let raw = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return Err(ConfigError::UnsupportedValue { key }),
            };
            set.insert(key, raw);
        }
        Ok(set)
    }

    /// Load an attribute set from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::AttributeFileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| ConfigError::AttributeFileParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_value(value)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
