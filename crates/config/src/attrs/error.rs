//! Error types for attribute loading.
//!
//! Responsibilities:
//! - Define error variants for attribute file loading and value parsing.
//!
//! Does NOT handle:
//! - Widget contract violations (see `ChameleonError` in the TUI crate).
//!
//! Invariants:
//! - Every variant names the attribute key or the file path involved.
//! - Missing attributes are never an error; they fall back to defaults.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building an attribute set or an attribute bag.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to read attribute file at {path}")]
    AttributeFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse attribute file at {path}")]
    AttributeFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse attributes: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Attributes must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Attribute {key} must be a string, number or boolean")]
    UnsupportedValue { key: String },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
